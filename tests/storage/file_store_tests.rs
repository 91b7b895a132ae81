//! JSON file store tests.

use std::fs;
use std::path::PathBuf;

use mudmap_engine::Pipeline;
use mudmap_foundation::{ErrorKind, ParseContext};
use mudmap_storage::{JsonFileStore, Persister};

fn temp(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mudmap_it_store_{name}_{}.json", std::process::id()))
}

const INN: &str = "\
Inn
A cosy inn.
Exits: north
north
Yard
A muddy yard.
Exits: south
";

#[test]
fn store_survives_reopening() {
    let path = temp("reopen");
    let _ = fs::remove_file(&path);

    let mut ctx = ParseContext::default();
    let graph = Pipeline::new().run(INN, &mut ctx).graph;

    let mut store = JsonFileStore::open(&path).unwrap();
    Persister::new(&mut store).persist(&graph);
    store.save().unwrap();

    let mut reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.store().room_count(), 2);
    let summary = Persister::new(&mut reopened).persist(&graph);
    assert!(summary.is_clean());
    assert_eq!(reopened.store().room_count(), 2);
    assert_eq!(reopened.store().edge_count(), 2);

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["rooms"].as_array().unwrap().len(), 2);
    assert_eq!(value["zones"][0]["zone"], "unassigned");

    let _ = fs::remove_file(&path);
}

#[test]
fn unreadable_store_is_an_error() {
    let path = temp("broken");
    fs::write(&path, "{ \"version\": 1, \"rooms\": [").unwrap();
    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
    let _ = fs::remove_file(&path);
}
