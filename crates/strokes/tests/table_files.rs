use std::fs;

use seimei_strokes::{StrokeError, StrokeTable};
use tempfile::tempdir;

#[test]
fn loads_json_table_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("strokes.json");
    fs::write(&path, r#"{"田": 5, "中": 4, "太": 4, "郎": 9}"#).unwrap();

    let table = StrokeTable::load(&path).expect("load json");

    assert_eq!(table.len(), 4);
    assert_eq!(table.get("郎"), Some(9));
}

#[test]
fn loads_js_master_by_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("all_kanji_master.js");
    fs::write(
        &path,
        "const ALL_KANJI_MASTER = {\n  \"花\": 7,\n  \"子\": 3,\n};\n\nexport default ALL_KANJI_MASTER;\n",
    )
    .unwrap();

    let table = StrokeTable::load(&path).expect("load js");

    assert_eq!(table.get("花"), Some(7));
    assert_eq!(table.get("子"), Some(3));
}

#[test]
fn rejects_negative_counts_in_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"田": -5}"#).unwrap();

    let err = StrokeTable::load(&path).unwrap_err();
    assert!(matches!(err, StrokeError::InvalidStrokeCount { .. }), "{err}");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = StrokeTable::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StrokeError::IoError(_)));
}

#[test]
fn merged_table_survives_save_and_load() {
    let dir = tempdir().unwrap();
    let base_path = dir.path().join("kanji_master.json");
    let extra_path = dir.path().join("additional_kanji_master.json");
    let out_path = dir.path().join("out/all_kanji_master.json");
    fs::write(&base_path, r#"{"田": 5, "中": 4, "颯": 13}"#).unwrap();
    fs::write(&extra_path, r#"{"颯": 14, "凛": 15}"#).unwrap();

    let mut merged = StrokeTable::load(&base_path).unwrap();
    let replaced = merged.merge(&StrokeTable::load(&extra_path).unwrap());
    merged.save(&out_path).unwrap();

    let reloaded = StrokeTable::load(&out_path).unwrap();
    assert_eq!(replaced, 1);
    assert_eq!(reloaded, merged);
    assert_eq!(reloaded.get("颯"), Some(14));
    assert_eq!(reloaded.len(), 4);
}
