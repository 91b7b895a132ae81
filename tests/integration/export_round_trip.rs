//! Export and import round trips.

use mudmap_engine::Pipeline;
use mudmap_foundation::ParseContext;
use mudmap_runtime::{ExportDocument, ExportFormat};
use proptest::prelude::*;

const WALK: &str = "\
[Zone: Midgaard]
Market Square
The busy market square. Stalls line every side.
Exits: north east south west
A merchant is standing here.
north
Main Street
The street runs past the bakery.
Exits: north south
north
Main Street
The street runs past the armory.
Exits: south up[trapdoor]
south
Main Street
The street runs past the bakery.
Exits: north south
south
Market Square
The busy market square. Stalls line every side.
Exits: north east south west
east
Alas, you cannot go that way.
";

fn document(text: &str) -> ExportDocument {
    let mut ctx = ParseContext::default();
    ExportDocument::from_graph(&Pipeline::new().run(text, &mut ctx).graph)
}

#[test]
fn reimport_then_export_is_identical() {
    let doc = document(WALK);
    assert_eq!(doc.rooms.len(), 3);

    let again = ExportDocument::from_graph(&doc.clone().into_graph().unwrap());
    assert_eq!(again, doc);
}

#[test]
fn json_text_round_trip() {
    let doc = document(WALK);
    let bytes = doc.to_bytes(ExportFormat::Json).unwrap();
    let decoded = ExportDocument::from_bytes(&bytes, ExportFormat::Json).unwrap();
    let rebuilt = ExportDocument::from_graph(&decoded.into_graph().unwrap());
    assert_eq!(rebuilt.rooms.len(), doc.rooms.len());
    assert_eq!(rebuilt.edges.len(), doc.edges.len());
    assert_eq!(rebuilt, doc);
}

#[test]
fn dangling_to_is_null_not_missing() {
    let doc = document(WALK);
    let text = String::from_utf8(doc.to_bytes(ExportFormat::Json).unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    for edge in value["edges"].as_array().unwrap() {
        assert!(edge.get("to").is_some());
        assert!(edge.get("isDoor").is_some());
        assert!(edge.get("doorName").is_some());
        assert!(edge.get("isLocked").is_some());
    }
}

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Main Street".to_string()),
        Just("Market Square".to_string()),
        Just("The street runs past the bakery.".to_string()),
        Just("The street runs past the armory.".to_string()),
        Just("Exits: north south east(gate)".to_string()),
        Just("[Exits: n s]".to_string()),
        Just("north".to_string()),
        Just("s".to_string()),
        Just("east".to_string()),
        Just("Alas, you cannot go that way.".to_string()),
        Just("[Zone: Midgaard]".to_string()),
        Just("A merchant is standing here.".to_string()),
        Just(String::new()),
    ]
}

proptest! {
    #[test]
    fn export_import_export_is_stable(lines in prop::collection::vec(line(), 0..80)) {
        let doc = document(&lines.join("\n"));
        let graph = doc.clone().into_graph().unwrap();
        let again = ExportDocument::from_graph(&graph);
        prop_assert_eq!(again.rooms.len(), doc.rooms.len());
        prop_assert_eq!(again.edges.len(), doc.edges.len());
        prop_assert_eq!(again, doc);
    }

    #[test]
    fn messagepack_is_lossless(lines in prop::collection::vec(line(), 0..40)) {
        let doc = document(&lines.join("\n"));
        let bytes = doc.to_bytes(ExportFormat::MessagePack).unwrap();
        prop_assert_eq!(ExportDocument::from_bytes(&bytes, ExportFormat::MessagePack).unwrap(), doc);
    }
}
