//! Zone assignment.

use std::collections::{HashMap, VecDeque};

use mudmap_foundation::{MapGraph, ParseContext, RoomKey, WarningKind, Zone};

/// Assigns a zone to every canonical room.
///
/// With an explicit zone in the configuration every room gets that zone.
/// Otherwise rooms that followed a zone banner seed their named zone and
/// the name spreads over resolved edges, followed in both directions. The
/// nearest seed wins; at equal distance the seed seen first wins. Rooms no
/// seed reaches stay [`Zone::Unassigned`].
#[derive(Debug, Default)]
pub struct ZoneResolver;

impl ZoneResolver {
    /// Creates a resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Writes the zone of every room in `graph`.
    pub fn resolve(&self, graph: &mut MapGraph, ctx: &mut ParseContext) {
        if let Some(id) = ctx.config.zone_override {
            for room in graph.rooms_mut() {
                room.zone = Zone::Explicit(id);
            }
            tracing::debug!(zone = id, rooms = graph.room_count(), "applied explicit zone");
            return;
        }

        let neighbours = adjacency(graph);
        let mut assigned: Vec<Option<String>> = vec![None; graph.room_count()];
        let mut queue = VecDeque::new();
        for (idx, room) in graph.rooms().iter().enumerate() {
            if let Some(hint) = &room.zone_hint {
                assigned[idx] = Some(hint.clone());
                queue.push_back(idx);
            }
        }

        while let Some(idx) = queue.pop_front() {
            for &next in &neighbours[idx] {
                if assigned[next].is_none() {
                    assigned[next] = assigned[idx].clone();
                    queue.push_back(next);
                }
            }
        }

        let mut unassigned = 0;
        for (room, zone) in graph.rooms_mut().iter_mut().zip(assigned) {
            room.zone = match zone {
                Some(name) => Zone::Named(name),
                None => {
                    unassigned += 1;
                    Zone::Unassigned
                }
            };
        }

        if unassigned > 0 {
            ctx.diagnostics.warn(
                WarningKind::Zone,
                None,
                format!(
                    "{unassigned} of {} rooms have no zone banner in reach and stay '{}'",
                    graph.room_count(),
                    Zone::UNASSIGNED
                ),
            );
        }
        tracing::debug!(rooms = graph.room_count(), unassigned, "resolved zones");
    }
}

/// Undirected neighbour lists over resolved edges, in edge order.
fn adjacency(graph: &MapGraph) -> Vec<Vec<usize>> {
    let index: HashMap<&RoomKey, usize> = graph
        .rooms()
        .iter()
        .enumerate()
        .map(|(pos, room)| (&room.key, pos))
        .collect();
    let mut neighbours = vec![Vec::new(); graph.room_count()];
    for (from, room) in graph.rooms().iter().enumerate() {
        for exit in room.exits.values() {
            let Some(&to) = exit.to.as_ref().and_then(|key| index.get(key)) else {
                continue;
            };
            if from == to {
                continue;
            }
            if !neighbours[from].contains(&to) {
                neighbours[from].push(to);
            }
            if !neighbours[to].contains(&from) {
                neighbours[to].push(from);
            }
        }
    }
    neighbours
}
