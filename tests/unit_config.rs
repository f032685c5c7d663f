// tests/unit_config.rs
use blastmap_core::config::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let c = Config::new();
    assert!(c.include_patterns.is_empty());
    assert!(c.exclude_patterns.is_empty());
    assert_eq!(c.top_count, 10);
    assert!(c.cache_enabled);
    assert!(!c.verbose);
}

#[test]
fn test_load_toml() {
    let d = tempdir().unwrap();
    fs::write(
        d.path().join("blastmap.toml"),
        "[report]\ntop_count = 25\n\n[cache]\nenabled = false\n",
    )
    .unwrap();

    let c = Config::load_from(d.path());
    assert_eq!(c.top_count, 25);
    assert!(!c.cache_enabled);
}

#[test]
fn test_scan_patterns_from_toml() {
    let d = tempdir().unwrap();
    fs::write(
        d.path().join("blastmap.toml"),
        "[scan]\ninclude = [\"^src/\"]\nexclude = [\"generated\"]\n",
    )
    .unwrap();

    let c = Config::load_from(d.path());
    assert_eq!(c.include_patterns.len(), 1);
    assert_eq!(c.exclude_patterns.len(), 1);
    assert!(c.include_patterns[0].is_match("src/main.rs"));
}

#[test]
fn test_ignore_file_folds_into_excludes() {
    let d = tempdir().unwrap();
    fs::write(
        d.path().join(".blastmapignore"),
        "# generated output\n\nfixtures/\n\\.snap$\n",
    )
    .unwrap();

    let c = Config::load_from(d.path());
    assert_eq!(c.exclude_patterns.len(), 2);
    assert!(c.exclude_patterns.iter().any(|re| re.is_match("fixtures/a.ts")));
}

#[test]
fn test_invalid_pattern_skipped() {
    let mut c = Config::new();
    c.process_ignore_line("[unclosed");
    assert!(c.exclude_patterns.is_empty());
}

#[test]
fn test_missing_files_use_defaults() {
    let d = tempdir().unwrap();
    let c = Config::load_from(d.path());
    assert_eq!(c.top_count, 10);
    assert!(c.cache_enabled);
}

#[test]
fn test_invalid_toml_ignored() {
    let d = tempdir().unwrap();
    fs::write(d.path().join("blastmap.toml"), "not [valid toml").unwrap();

    let c = Config::load_from(d.path());
    assert_eq!(c.top_count, 10);
}
