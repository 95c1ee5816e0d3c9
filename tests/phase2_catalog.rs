//! Phase 2 tests: catalog configuration loading and per-city keyword sets.

use std::io::Write;

use purifier_keywords::{CatalogConfig, CityCatalog, KeywordSetGenerator, KwError, Locality};

// ==================== Helpers ====================

const SAMPLE_CONFIG: &str = r#"
[[city]]
name = "Pune"
areas = ["Baner", "Wakad"]
extra_phrases = ["पुण्यात RO भाड्याने"]

[[city]]
name = "Navi Mumbai"

[[city]]
name = "Thane"
slug = "thane-west"
areas = ["Ghodbunder Road"]
"#;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn sample_catalog() -> CityCatalog {
    CityCatalog::build(&CatalogConfig::from_toml_str(SAMPLE_CONFIG).unwrap()).unwrap()
}

// ==================== Catalog Tests ====================

#[test]
fn test_catalog_from_file() {
    let _ = env_logger::builder().is_test(true).try_init();
    let file = write_config(SAMPLE_CONFIG);
    let catalog = CityCatalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), 3);
    let slugs: Vec<&str> = catalog.pages().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["pune", "navi-mumbai", "thane-west"]);

    let pune = catalog.get("pune").unwrap();
    assert!(pune.keywords.contains("RO on rent in Wakad Pune"));
    assert!(pune.keywords.contains("पुण्यात RO भाड्याने"));

    let thane = catalog.get("thane-west").unwrap();
    assert!(thane.keywords.contains("Thane Ghodbunder Road RO rental"));
    assert!(catalog.get("thane").is_none());
}

#[test]
fn test_catalog_matches_direct_generation() {
    let catalog = sample_catalog();
    let direct = KeywordSetGenerator::new()
        .generate(&Locality::new("Navi Mumbai"))
        .unwrap();
    assert_eq!(catalog.get("navi-mumbai").unwrap().keywords, direct);
}

#[test]
fn test_meta_keywords() {
    let catalog = sample_catalog();
    let meta = catalog.meta_keywords("pune").unwrap();
    assert!(meta.starts_with("RO purifier on rent in Pune, RO purifier on rent Pune, "));
    assert!(meta.ends_with("पुण्यात RO भाड्याने"));
    assert!(catalog.meta_keywords("nowhere").is_none());
}

#[test]
fn test_duplicate_slug_rejected() {
    let config = CatalogConfig::from_toml_str(
        "[[city]]\nname = \"Pune\"\n\n[[city]]\nname = \"PUNE\"\n",
    )
    .unwrap();
    match CityCatalog::build(&config) {
        Err(KwError::DuplicateLocality(slug)) => assert_eq!(slug, "pune"),
        other => panic!("expected DuplicateLocality, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_empty_city_name_fails_build() {
    let config = CatalogConfig::from_toml_str("[[city]]\nname = \"\"\n").unwrap();
    let result = CityCatalog::build(&config);
    assert!(matches!(result, Err(KwError::InvalidInput(_))));
}

#[test]
fn test_empty_derived_slug_rejected() {
    let config = CatalogConfig::from_toml_str("[[city]]\nname = \"!!!\"\n").unwrap();
    match CityCatalog::build(&config) {
        Err(KwError::InvalidInput(msg)) => assert!(msg.contains("!!!"), "message: {msg}"),
        other => panic!("expected InvalidInput, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_empty_explicit_slug_rejected() {
    let config =
        CatalogConfig::from_toml_str("[[city]]\nname = \"Pune\"\nslug = \"\"\n").unwrap();
    match CityCatalog::build(&config) {
        Err(KwError::InvalidInput(msg)) => assert!(msg.contains("Pune"), "message: {msg}"),
        other => panic!("expected InvalidInput, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_devanagari_city_slug() {
    let config = CatalogConfig::from_toml_str("[[city]]\nname = \"दिल्ली\"\n").unwrap();
    let catalog = CityCatalog::build(&config).unwrap();
    assert!(catalog.get("दिल्ली").is_some());
    assert!(catalog.meta_keywords("दिल्ली").unwrap().contains("RO ka price दिल्ली"));
}

#[test]
fn test_configured_limits_apply() {
    let config = CatalogConfig::from_toml_str(
        "[limits]\nprice_products = 0\nintent_products = 0\n\n[[city]]\nname = \"Pune\"\n",
    )
    .unwrap();
    let catalog = CityCatalog::build(&config).unwrap();
    let pune = &catalog.get("pune").unwrap().keywords;
    assert!(!pune.contains("RO purifier on rent 299 Pune"));
    assert!(!pune.contains("RO purifier on rent near me Pune"));
    assert!(pune.contains("RO purifier on rent in Pune"));
}

#[test]
fn test_configured_vocabulary_override() {
    let config = CatalogConfig::from_toml_str(
        "[vocabulary]\nprice_terms = [\"199\"]\n\n[[city]]\nname = \"Pune\"\n",
    )
    .unwrap();
    let catalog = CityCatalog::build(&config).unwrap();
    let pune = &catalog.get("pune").unwrap().keywords;
    assert!(pune.contains("RO purifier on rent 199 Pune"));
    assert!(!pune.contains("RO purifier on rent 299 Pune"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CityCatalog::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, KwError::Io(_)));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let file = write_config("[[city]\nname = ");
    let err = CityCatalog::load(file.path()).unwrap_err();
    assert!(matches!(err, KwError::Config(_)));
}

#[test]
fn test_empty_config_gives_empty_catalog() {
    let catalog = CityCatalog::build(&CatalogConfig::default()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.pages().is_empty());
}

#[test]
fn test_catalog_serializes_pages() {
    let catalog = sample_catalog();
    let json = serde_json::to_value(catalog.pages()).unwrap();
    assert_eq!(json[0]["slug"], "pune");
    assert_eq!(json[0]["locality"]["areas"][1], "Wakad");
    assert_eq!(json[0]["keywords"][0], "RO purifier on rent in Pune");
}
