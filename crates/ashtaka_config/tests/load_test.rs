use std::io::Write;

use ashtaka_config::{ConfigError, Settings};

#[test]
fn load_resolves_relative_ephemeris() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ashtaka.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "ephemeris = \"tables/eph.json\"").unwrap();
    writeln!(f, "[scan]\ntop_n = 5").unwrap();
    drop(f);

    let s = Settings::load(&path).unwrap();
    assert_eq!(s.ephemeris, Some(dir.path().join("tables/eph.json")));
    assert_eq!(s.scan.top_n, 5);
}

#[test]
fn absolute_ephemeris_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ashtaka.toml");
    let eph = dir.path().join("abs.json");
    std::fs::write(&path, format!("ephemeris = {:?}\n", eph.display().to_string())).unwrap();
    let s = Settings::load(&path).unwrap();
    assert_eq!(s.ephemeris, Some(eph));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn no_path_gives_defaults() {
    assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
}
