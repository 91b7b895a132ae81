//! Room deduplication.
//!
//! Observations with the same normalized title and description are one
//! room. A move that is undone by the opposite move also merges the rooms
//! at both ends of the round trip when their titles match and one
//! description extends the other (the game appended a line the second
//! time). Distinct descriptions under one title always stay apart.
//!
//! Keys are the slugged title when the title belongs to one room only.
//! Rooms sharing a title (several "Main Street"s) get a description prefix
//! appended until the keys differ.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};

use mudmap_foundation::room::normalize_title;
use mudmap_foundation::{
    CanonicalRoom, Direction, DoorInfo, Exit, MapGraph, ObservationId, ParseContext, RoomKey,
    WarningKind, Zone,
};

use crate::correlator::Correlation;

/// Disjoint-set forest over observation indices; roots are always the
/// earliest member.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[child] = root;
        }
    }
}

/// Room deduplicator.
#[derive(Debug, Default)]
pub struct Deduplicator;

impl Deduplicator {
    /// Creates a deduplicator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Merges observations into canonical rooms and rewrites traversals to
    /// canonical edges. Every room starts in the unassigned zone.
    #[must_use]
    pub fn deduplicate(&self, correlation: &Correlation, ctx: &mut ParseContext) -> MapGraph {
        let observations = &correlation.observations;
        let mut sets = DisjointSet::new(observations.len());

        let mut by_text: HashMap<(String, String), usize> = HashMap::new();
        for (idx, obs) in observations.iter().enumerate() {
            let identity = (obs.normalized_title(), obs.normalized_description());
            let first = *by_text.entry(identity).or_insert(idx);
            sets.union(first, idx);
        }

        for &(out, back) in &correlation.pairs {
            let start = correlation.observation(correlation.traversals[out].from);
            let end = correlation.observation(correlation.traversals[back].to);
            if start.normalized_title() == end.normalized_title()
                && extends(
                    &start.normalized_description(),
                    &end.normalized_description(),
                )
            {
                sets.union(
                    correlation.traversals[out].from.0,
                    correlation.traversals[back].to.0,
                );
            }
        }

        let mut clusters: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for idx in 0..observations.len() {
            clusters.entry(sets.find(idx)).or_default().push(idx);
        }
        let clusters: Vec<Vec<usize>> = clusters.into_values().collect();

        let keys = assign_keys(correlation, &clusters, ctx.config.key_prefix_words);
        let mut room_of = vec![0usize; observations.len()];
        let mut rooms: Vec<CanonicalRoom> = clusters
            .iter()
            .zip(keys)
            .enumerate()
            .map(|(room_idx, (members, key))| {
                for &m in members {
                    room_of[m] = room_idx;
                }
                merge(correlation, members, key)
            })
            .collect();

        for traversal in &correlation.traversals {
            let from = room_of[traversal.from.0];
            let to_key = rooms[room_of[traversal.to.0]].key.clone();
            let door = door_towards(correlation, &clusters[from], traversal.direction);
            let room = &mut rooms[from];
            match room.exits.entry(traversal.direction) {
                Entry::Vacant(slot) => {
                    slot.insert(Exit {
                        to: Some(to_key),
                        door,
                    });
                }
                Entry::Occupied(slot) => {
                    if slot.get().to.as_ref() != Some(&to_key) {
                        let kept = slot.get().to.clone();
                        ctx.diagnostics.warn(
                            WarningKind::Dedup,
                            Some(correlation.observation(traversal.to).lines),
                            format!(
                                "exit {} from '{}' led to '{}' before and to '{to_key}' now; keeping the first",
                                traversal.direction,
                                room.key,
                                kept.map_or_else(|| "nowhere".to_string(), |k| k.to_string()),
                            ),
                        );
                    }
                }
            }
        }

        for (room, members) in rooms.iter_mut().zip(&clusters) {
            for &m in members {
                for direction in observations[m].exit_directions() {
                    if !room.exits.contains_key(&direction) {
                        let door = door_towards(correlation, members, direction);
                        room.exits.insert(direction, Exit { to: None, door });
                    }
                }
            }
        }

        let graph = MapGraph::new(rooms);
        tracing::debug!(
            observations = observations.len(),
            rooms = graph.room_count(),
            edges = graph.edge_count(),
            dangling = graph.dangling_count(),
            "deduplicated rooms"
        );
        graph
    }
}

/// Returns true if the shorter description is the leading words of the
/// longer one.
fn extends(a: &str, b: &str) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut long_words = long.split_whitespace();
    short
        .split_whitespace()
        .all(|word| long_words.next() == Some(word))
}

/// Builds the canonical room for one cluster.
fn merge(correlation: &Correlation, members: &[usize], key: RoomKey) -> CanonicalRoom {
    let first = correlation.observation(ObservationId(members[0]));
    let mut description = String::new();
    let mut npcs: Vec<String> = Vec::new();
    let mut items: Vec<String> = Vec::new();
    let mut zone_hint = None;

    for &m in members {
        let obs = correlation.observation(ObservationId(m));
        if obs.body_text.chars().count() > description.chars().count() {
            description.clone_from(&obs.body_text);
        }
        for npc in &obs.npcs {
            if !npcs.contains(npc) {
                npcs.push(npc.clone());
            }
        }
        for item in &obs.items {
            if !items.contains(item) {
                items.push(item.clone());
            }
        }
        if zone_hint.is_none() {
            zone_hint.clone_from(&obs.zone_hint);
        }
    }

    CanonicalRoom {
        key,
        title: first.title.trim().to_string(),
        description,
        npcs,
        items,
        visits: members.len(),
        first_seen: first.source_block_index,
        zone_hint,
        zone: Zone::Unassigned,
        exits: BTreeMap::new(),
    }
}

/// First door marker any member printed for `direction`.
fn door_towards(
    correlation: &Correlation,
    members: &[usize],
    direction: Direction,
) -> Option<DoorInfo> {
    members.iter().find_map(|&m| {
        correlation
            .observation(ObservationId(m))
            .door_towards(direction)
            .cloned()
    })
}

/// Computes one key per cluster.
fn assign_keys(correlation: &Correlation, clusters: &[Vec<usize>], prefix_words: usize) -> Vec<RoomKey> {
    let mut by_title: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, members) in clusters.iter().enumerate() {
        let title = correlation.observation(ObservationId(members[0])).normalized_title();
        by_title.entry(title).or_default().push(idx);
    }

    let mut keys = vec![String::new(); clusters.len()];
    for (title, group) in &by_title {
        let base = slug(title);
        if let [only] = group.as_slice() {
            keys[*only] = base;
            continue;
        }
        let words: Vec<Vec<String>> = group
            .iter()
            .map(|&idx| {
                let obs = correlation.observation(ObservationId(clusters[idx][0]));
                slug_words(&obs.normalized_description())
            })
            .collect();
        let longest = words.iter().map(Vec::len).max().unwrap_or(0);
        let mut take = prefix_words.max(1);
        loop {
            let candidates: Vec<String> = words
                .iter()
                .map(|w| format!("{base}--{}", w[..take.min(w.len())].join("-")))
                .collect();
            let mut sorted = candidates.clone();
            sorted.sort();
            sorted.dedup();
            if sorted.len() == candidates.len() || take >= longest {
                for (&idx, key) in group.iter().zip(candidates) {
                    keys[idx] = key;
                }
                break;
            }
            take += 1;
        }
    }

    // Different titles can still slug to the same text; number the repeats
    // with suffixes no other room uses.
    let reserved: HashSet<String> = keys.iter().cloned().collect();
    let mut emitted: HashSet<String> = HashSet::with_capacity(keys.len());
    keys.into_iter()
        .map(|key| {
            if emitted.insert(key.clone()) {
                return RoomKey::new(key);
            }
            let mut n = 2;
            loop {
                let candidate = format!("{key}-{n}");
                if !reserved.contains(&candidate) && emitted.insert(candidate.clone()) {
                    return RoomKey::new(candidate);
                }
                n += 1;
            }
        })
        .collect()
}

/// Lowercase alphanumeric words of `text`.
fn slug_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Joins the alphanumeric words of `text` with hyphens.
fn slug(text: &str) -> String {
    let words = slug_words(&normalize_title(text));
    if words.is_empty() {
        "room".to_string()
    } else {
        words.join("-")
    }
}
