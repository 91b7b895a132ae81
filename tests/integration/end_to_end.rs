//! Transcript to export, end to end.

use std::fs;
use std::path::PathBuf;

use mudmap_foundation::{Direction, ErrorKind, RoomKey, WarningKind};
use mudmap_runtime::{ExportDocument, RunConfig, run};

fn temp(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mudmap_e2e_{name}_{}", std::process::id()))
}

const TEMPLE: &str = "\
The Temple of Midgaard
You are in the southern end of the temple hall in the Temple of Midgaard.
The temple has been constructed from giant marble blocks, eternal in
appearance, and most of the walls are covered by ancient wall paintings.
Exits: north, south(door)
The cityguard is standing here.
north
Temple Square
You are standing on the temple square. Huge marble steps lead up to the
temple gate. The entrance to the Clerics' Guild is to the west.
Exits: south
";

fn export_of(transcript: &str, name: &str) -> ExportDocument {
    let log = temp(&format!("{name}.log"));
    let export = temp(&format!("{name}.json"));
    fs::write(&log, transcript).unwrap();
    run(&RunConfig::new(&log)
        .with_export(Some(export.clone()))
        .with_dry_run(true))
    .unwrap();
    let doc = ExportDocument::load(&export).unwrap();
    let _ = fs::remove_file(&log);
    let _ = fs::remove_file(&export);
    doc
}

#[test]
fn temple_to_temple_square() {
    let doc = export_of(TEMPLE, "temple");

    assert_eq!(doc.rooms.len(), 2);
    assert_eq!(doc.rooms[0].key, RoomKey::new("the-temple-of-midgaard"));
    assert_eq!(doc.rooms[0].npcs, vec!["The cityguard"]);
    assert_eq!(doc.rooms[1].key, RoomKey::new("temple-square"));

    let north = doc
        .edges
        .iter()
        .find(|e| e.direction == Direction::North)
        .unwrap();
    assert_eq!(north.from, RoomKey::new("the-temple-of-midgaard"));
    assert_eq!(north.to, Some(RoomKey::new("temple-square")));
    assert!(!north.is_door);

    let back = doc
        .edges
        .iter()
        .find(|e| e.from == RoomKey::new("temple-square"))
        .unwrap();
    assert_eq!(back.direction, Direction::South);
    assert_eq!(back.to, None);

    let resolved = doc.edges.iter().filter(|e| e.to.is_some()).count();
    assert_eq!(resolved, 1);
}

#[test]
fn later_south_move_resolves_the_reverse_exit() {
    let transcript = format!(
        "{TEMPLE}south\n\
         The Temple of Midgaard\n\
         You are in the southern end of the temple hall in the Temple of Midgaard.\n\
         Exits: north, south(door)\n"
    );
    let doc = export_of(&transcript, "temple_back");

    assert_eq!(doc.rooms.len(), 2);
    let back = doc
        .edges
        .iter()
        .find(|e| e.from == RoomKey::new("temple-square"))
        .unwrap();
    assert_eq!(back.to, Some(RoomKey::new("the-temple-of-midgaard")));

    let door = doc
        .edges
        .iter()
        .find(|e| e.direction == Direction::South && e.from == RoomKey::new("the-temple-of-midgaard"))
        .unwrap();
    assert!(door.is_door);
    assert_eq!(door.door_name.as_deref(), Some("door"));
    assert_eq!(door.to, None);
}

#[test]
fn failure_message_adds_no_destination() {
    let transcript = format!("{TEMPLE}east\nAlas, you cannot go that way.\n");
    let doc = export_of(&transcript, "failure");
    assert!(doc.edges.iter().all(|e| e.direction != Direction::East));

    let log = temp("failure_report.log");
    fs::write(&log, &transcript).unwrap();
    let report = run(&RunConfig::new(&log).with_dry_run(true)).unwrap();
    assert_eq!(report.warnings.get(&WarningKind::Correlation), Some(&1));
    let _ = fs::remove_file(&log);
}

#[test]
fn empty_transcript_fails_the_run() {
    let log = temp("empty.log");
    fs::write(&log, "").unwrap();
    let err = run(&RunConfig::new(&log).with_dry_run(true)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyTranscript(_)));
    let _ = fs::remove_file(&log);
}

#[test]
fn transcript_without_rooms_is_an_empty_map() {
    let log = temp("chatter.log");
    fs::write(&log, "say hello\nYou say 'hello'\n").unwrap();
    let report = run(&RunConfig::new(&log).with_dry_run(true)).unwrap();
    assert!(report.graph.is_empty());
    let _ = fs::remove_file(&log);
}
