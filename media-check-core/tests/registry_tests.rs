// media-check-core/tests/registry_tests.rs

use media_check_core::{CoreError, DirectoryRegistry};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_registry_from_json_keeps_order() {
    let json = r#"[
        {"name": "uploads", "path": "media/uploads"},
        {"name": "music", "path": "media/music"}
    ]"#;

    let registry = DirectoryRegistry::from_json_str("/srv/echobot", json).unwrap();
    let names: Vec<_> = registry.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["uploads", "music"]);
    assert_eq!(
        registry.resolve(&registry.entries()[0]),
        PathBuf::from("/srv/echobot/media/uploads")
    );
}

#[test]
fn test_registry_rejects_duplicate_names() {
    let json = r#"[
        {"name": "music", "path": "media/music"},
        {"name": "music", "path": "other/music"}
    ]"#;

    match DirectoryRegistry::from_json_str("/srv", json) {
        Err(CoreError::Config(msg)) => assert!(msg.contains("music")),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_registry_rejects_empty_names() {
    let json = r#"[{"name": " ", "path": "media/music"}]"#;
    assert!(matches!(
        DirectoryRegistry::from_json_str("/srv", json),
        Err(CoreError::Config(_))
    ));
}

#[test]
fn test_registry_rejects_malformed_json() {
    assert!(matches!(
        DirectoryRegistry::from_json_str("/srv", "{not json"),
        Err(CoreError::Json(_))
    ));
}

#[test]
fn test_registry_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("registry.json");
    std::fs::write(&file, r#"[{"name": "cache", "path": "media/cache"}]"#)?;

    let registry = DirectoryRegistry::from_json_file(dir.path(), &file)?;
    assert_eq!(registry.len(), 1);
    assert!(registry.get("cache").is_some());

    Ok(())
}

#[test]
fn test_registry_missing_file_is_config_error() {
    let result = DirectoryRegistry::from_json_file("/srv", std::path::Path::new("surely/not/here.json"));
    assert!(matches!(result, Err(CoreError::Config(_))));
}
