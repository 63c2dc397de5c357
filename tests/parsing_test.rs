//! Catalog payload decoding tests.
//!
//! The catalog API uses mixed-case field names (`Title`,
//! `MetaTagDescription`, `hasChildren`) inside a `{ "data": [...] }`
//! envelope; these tests pin the serde mapping and the tolerated-absence
//! rules at the decoding edge.

use vitrine::{parse_catalog, read_catalog};

#[test]
fn test_field_renames() {
    let response = parse_catalog(
        r#"{
            "data": [{
                "id": 7,
                "name": "Books",
                "Title": "3",
                "MetaTagDescription": "books.png",
                "url": "/books",
                "hasChildren": false,
                "children": []
            }]
        }"#,
    )
    .expect("Failed to parse catalog");

    let records = response.data.expect("data present");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 7);
    assert_eq!(records[0].name, "Books");
    assert_eq!(records[0].title, "3");
    assert_eq!(records[0].description, "books.png");
    assert_eq!(records[0].url, "/books");
    assert!(!records[0].has_children);
    assert_eq!(records[0].children.as_deref(), Some(&[][..]));
}

#[test]
fn test_optional_fields_default() {
    let response = parse_catalog(r#"{"data": [{"id": 1, "name": "Bare", "Title": ""}]}"#)
        .expect("Failed to parse catalog");

    let records = response.data.expect("data present");
    assert_eq!(records[0].description, "");
    assert_eq!(records[0].url, "");
    assert!(!records[0].has_children);
    assert!(records[0].children.is_none());
}

#[test]
fn test_nested_children_decode() {
    let response = parse_catalog(
        r#"{
            "data": [{
                "id": 1,
                "name": "Parent",
                "Title": "1",
                "hasChildren": true,
                "children": [
                    {"id": 2, "name": "Child", "Title": "1", "hasChildren": false}
                ]
            }]
        }"#,
    )
    .expect("Failed to parse catalog");

    let records = response.data.expect("data present");
    let children = records[0].children.as_deref().expect("children present");
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "Child");
}

#[test]
fn test_absent_data_variants() {
    assert!(parse_catalog(r#"{"data": null}"#).unwrap().data.is_none());
    assert!(parse_catalog(r#"{}"#).unwrap().data.is_none());

    let empty = parse_catalog(r#"{"data": []}"#).unwrap().data;
    // Empty is a real (zero-category) catalog, not absence.
    assert_eq!(empty.map(|d| d.len()), Some(0));
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(parse_catalog("{not json").is_err());
    assert!(parse_catalog(r#"{"data": [{"name": "no id"}]}"#).is_err());
}

#[test]
fn test_read_catalog_from_file() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"data": [{"id": 1, "name": "Disk", "Title": "1"}]}"#,
    )
    .expect("Failed to write catalog");

    let response = read_catalog(&path).expect("Failed to read catalog");
    assert_eq!(response.data.unwrap()[0].name, "Disk");

    assert!(read_catalog(dir.path().join("missing.json")).is_err());
}
