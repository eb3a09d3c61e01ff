use std::fs;

use pretty_assertions::assert_eq;
use seimei_gokaku::{EngineConfig, GokakuError, LuckFilter, NamePool, RankTable};
use tempfile::tempdir;

#[test]
fn pool_formats_load_by_extension() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::write(root.join("names.json"), r#"["太郎", "花子"]"#).unwrap();
    fs::write(
        root.join("given_names.js"),
        "export const GIVEN_NAMES = [\n  \"蓮\",\n  \"結衣\",\n];\n",
    )
    .unwrap();
    fs::write(root.join("cleaned.txt"), "陽翔\n\n  さくら  \n").unwrap();

    let json = NamePool::load(&root.join("names.json")).unwrap();
    let js = NamePool::load(&root.join("given_names.js")).unwrap();
    let text = NamePool::load(&root.join("cleaned.txt")).unwrap();

    assert_eq!(json.names(), ["太郎", "花子"]);
    assert_eq!(js.names(), ["蓮", "結衣"]);
    assert_eq!(text.names(), ["陽翔", "さくら"]);
}

#[test]
fn pool_save_then_load() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("out").join("given_names.json");

    let mut pool = NamePool::new(["蓮", "陽翔", "蓮", "さくら"]);
    assert_eq!(pool.dedup(), 1);
    assert_eq!(pool.retain_valid(), 1);
    pool.save(&path).unwrap();

    let reloaded = NamePool::load(&path).unwrap();
    assert_eq!(reloaded, pool);
    assert_eq!(reloaded.names(), ["蓮", "陽翔"]);
}

#[test]
fn malformed_pool_json_is_an_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("names.json");
    fs::write(&path, r#"{"太郎": 1}"#).unwrap();

    let err = NamePool::load(&path).unwrap_err();
    assert!(matches!(err, GokakuError::JsonError(_)), "{err}");
}

#[test]
fn config_file_loads() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("seimei.toml");
    fs::write(&path, "max_results_per_group = 5\ndefault_luck = \"good\"\n").unwrap();

    let config = EngineConfig::load(&path).unwrap();

    assert_eq!(config.max_results_per_group, 5);
    assert_eq!(config.default_luck, LuckFilter::Good);
    assert_eq!(config.rank_table().unwrap(), RankTable::standard());
}

#[test]
fn missing_config_file_is_io_error() {
    let temp = tempdir().unwrap();
    let err = EngineConfig::load(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, GokakuError::IoError(_)), "{err}");
}
