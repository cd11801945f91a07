//! File-backed screening tests

use std::fs;
use std::path::{Path, PathBuf};

use namescreen::{load_noise, Error, Screener};
use namescreen_core::MatchStage;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Blacklist and noise fixtures in a scratch directory
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("blacklist.txt"),
            "Osama Bin Laden\nSaddam Hussein\nPablo Escobar\ndebarquer\n",
        )
        .unwrap();
        fs::write(dir.path().join("noise.txt"), "to\nthe\nand\ndr\nmr\n").unwrap();
        Self { dir }
    }

    fn blacklist(&self) -> PathBuf {
        self.dir.path().join("blacklist.txt")
    }

    fn noise(&self) -> PathBuf {
        self.dir.path().join("noise.txt")
    }

    fn missing(&self) -> PathBuf {
        self.dir.path().join("missing.txt")
    }

    fn search(&self, name: &str) -> Option<Vec<String>> {
        Screener::new().search_files(
            Some(name),
            Some(self.blacklist().as_path()),
            Some(self.noise().as_path()),
        )
    }
}

#[test]
fn test_matches_from_files() {
    let fx = Fixture::new();
    let expected = Some(vec!["Osama Bin Laden".to_string()]);

    assert_eq!(fx.search("Osama Bin Laden"), expected);
    assert_eq!(fx.search("Bin Laden, Osama"), expected);
    assert_eq!(fx.search("to the osama bin laden"), expected);
    assert_eq!(fx.search("B6n La9en, Osama"), expected);
}

#[test]
fn test_no_match_is_empty_not_none() {
    let fx = Fixture::new();
    assert_eq!(fx.search("Osama Jackson"), Some(vec![]));
    assert_eq!(fx.search("Elvis Laden"), Some(vec![]));
}

#[test]
fn test_diacritics_from_files() {
    let fx = Fixture::new();
    assert_eq!(fx.search("débárquér"), Some(vec!["debarquer".to_string()]));
}

#[test]
fn test_missing_name_or_blacklist_is_none() {
    let fx = Fixture::new();
    let screener = Screener::new();
    let noise = fx.noise();

    assert_eq!(
        screener.search_files(None, Some(fx.blacklist().as_path()), Some(noise.as_path())),
        None
    );
    assert_eq!(
        screener.search_files(Some("Osama Bin Laden"), None, Some(noise.as_path())),
        None
    );
}

#[test]
fn test_unreadable_blacklist_is_none() {
    let fx = Fixture::new();
    let result = Screener::new().search_files(
        Some("Osama Bin Laden"),
        Some(fx.missing().as_path()),
        Some(fx.noise().as_path()),
    );
    assert_eq!(result, None);
}

#[test]
fn test_unreadable_noise_is_non_fatal() {
    let fx = Fixture::new();
    let screener = Screener::new();

    // Without noise words, "dr" stays in the name but fuzzy scoring still matches
    let result = screener.search_files(
        Some("Dr Osama Bin Laden"),
        Some(fx.blacklist().as_path()),
        Some(fx.missing().as_path()),
    );
    assert_eq!(result, Some(vec!["Osama Bin Laden".to_string()]));

    let result = screener.search_files(
        Some("Osama Bin Laden"),
        Some(fx.blacklist().as_path()),
        None,
    );
    assert_eq!(result, Some(vec!["Osama Bin Laden".to_string()]));
}

#[test]
fn test_load_noise() {
    let fx = Fixture::new();
    assert_eq!(load_noise(Some(fx.noise().as_path())).len(), 5);
    assert!(load_noise(Some(fx.missing().as_path())).is_empty());
    assert!(load_noise(None).is_empty());
}

#[test]
fn test_duplicate_lines_reported_twice() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.txt");
    fs::write(&path, "Pablo Escobar\r\nOsama Bin Laden\r\nOsama Bin Laden\r\n").unwrap();

    let result = Screener::new().search_files(Some("osama bin laden"), Some(path.as_path()), None);
    assert_eq!(
        result,
        Some(vec!["Osama Bin Laden".to_string(), "Osama Bin Laden".to_string()])
    );
}

#[test]
fn test_threshold_configuration() {
    let fx = Fixture::new();
    let lenient = Screener::with_threshold(69).unwrap();
    let result = lenient.search_files(
        Some("Osama Jackson"),
        Some(fx.blacklist().as_path()),
        Some(fx.noise().as_path()),
    );
    assert_eq!(result, Some(vec!["Osama Bin Laden".to_string()]));

    assert!(matches!(Screener::with_threshold(101), Err(Error::Config(_))));
}

#[test]
fn test_explain_files() {
    let fx = Fixture::new();
    let verdicts = Screener::new()
        .explain_files(
            Some("B6n La9en, Osama"),
            Some(fx.blacklist().as_path()),
            Some(fx.noise().as_path()),
        )
        .unwrap();

    assert_eq!(verdicts.len(), 4);
    assert_eq!(verdicts[0].entry, "Osama Bin Laden");
    assert_eq!(verdicts[0].verdict.stage, Some(MatchStage::Fuzzy));
    assert_eq!(verdicts[0].verdict.score, Some(92));
    assert!(verdicts[1..].iter().all(|v| !v.verdict.is_match()));
}

#[test]
fn test_explain_files_missing_blacklist() {
    let fx = Fixture::new();
    let missing: &Path = &fx.missing();
    assert!(Screener::new()
        .explain_files(Some("x"), Some(missing), None)
        .is_none());
}
