use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

const SAV_HOUSES: &str = "[27, 26, 32, 33, 32, 34, 23, 21, 22, 30, 29, 28]";

const EPHEMERIS: &str = r#"{
    "ayanamsha": "lahiri",
    "entries": [
        {
            "utc": "1978-09-18T12:05:00",
            "latitude": 13.0827,
            "longitude": 80.2707,
            "bodies": {
                "sun": { "longitude": 151.6, "speed": 0.98 },
                "moon": { "longitude": 358.2, "speed": 13.1 },
                "mars": { "longitude": 168.0, "speed": 0.65 },
                "mercury": { "longitude": 160.0, "speed": 1.4 },
                "jupiter": { "longitude": 71.4, "speed": 0.15 },
                "venus": { "longitude": 181.4, "speed": 1.2 },
                "saturn": { "longitude": 126.0, "speed": 0.11 },
                "rahu": { "longitude": 131.0, "speed": -0.05 },
                "ketu": { "longitude": 311.0, "speed": -0.05 },
                "lagna": { "longitude": 324.8 }
            }
        },
        {
            "utc": "2025-01-01T12:00:00",
            "bodies": {
                "sun": { "longitude": 256.6, "speed": 1.02 },
                "moon": { "longitude": 281.9, "speed": 12.4 },
                "mars": { "longitude": 105.2, "speed": -0.3 },
                "mercury": { "longitude": 235.7, "speed": 1.3 },
                "jupiter": { "longitude": 48.9, "speed": -0.09 },
                "venus": { "longitude": 307.3, "speed": 1.2 },
                "saturn": { "longitude": 320.5, "speed": 0.08 },
                "rahu": { "longitude": 355.1, "speed": -0.05 },
                "ketu": { "longitude": 175.1, "speed": -0.05 }
            }
        }
    ]
}"#;

fn cmd() -> Command {
    Command::cargo_bin("ashtaka").unwrap()
}

fn ephemeris(dir: &Path) -> PathBuf {
    let path = dir.join("ephemeris.json");
    std::fs::write(&path, EPHEMERIS).unwrap();
    path
}

fn birth_args(eph: &Path) -> Vec<String> {
    [
        "--dob",
        "1978-09-18",
        "--tob",
        "17:35",
        "--lat",
        "13.0827",
        "--lon",
        "80.2707",
        "--tz",
        "5.5",
        "--ephemeris",
    ]
    .iter()
    .map(ToString::to_string)
    .chain([eph.display().to_string()])
    .collect()
}

#[test]
fn rashi_from_longitude() {
    cmd()
        .args(["rashi", "151.6"])
        .assert()
        .success()
        .stdout(contains("Kanya (Virgo)").and(contains("sign 6")));
}

#[test]
fn rashi_negative_longitude_wraps() {
    cmd()
        .args(["rashi", "-30"])
        .assert()
        .success()
        .stdout(contains("Meena"));
}

#[test]
fn house_from_signs() {
    cmd()
        .args(["house", "--sign", "6", "--ascendant", "11"])
        .assert()
        .success()
        .stdout(contains("House 8"));
}

#[test]
fn house_rejects_bad_sign() {
    cmd()
        .args(["house", "--sign", "13", "--ascendant", "1"])
        .assert()
        .failure()
        .stderr(contains("invalid sign index: 13"));
}

#[test]
fn house_rejects_bad_ascendant() {
    cmd()
        .args(["house", "--sign", "4", "--ascendant", "0"])
        .assert()
        .failure()
        .stderr(contains("invalid sign index: 0"));
}

#[test]
fn calculate_ashtakavarga_from_signs() {
    cmd()
        .args([
            "calculate-ashtakavarga",
            "--graha-signs",
            "6,12,6,6,3,7,5",
            "--lagna-sign",
            "11",
        ])
        .assert()
        .success()
        .stdout(contains("BAV (Bhinna Ashtakavarga)").and(contains(SAV_HOUSES)));
}

#[test]
fn calculate_ashtakavarga_json() {
    cmd()
        .args([
            "--json",
            "calculate-ashtakavarga",
            "--graha-signs",
            "6,12,6,6,3,7,5",
            "--lagna-sign",
            "11",
        ])
        .assert()
        .success()
        .stdout(contains("\"house_points\"").and(contains("\"after_trikona\"")));
}

#[test]
fn calculate_ashtakavarga_wrong_count() {
    cmd()
        .args(["calculate-ashtakavarga", "--graha-signs", "1,2,3", "--lagna-sign", "1"])
        .assert()
        .failure()
        .stderr(contains("expected 7"));
}

#[test]
fn ashtakavarga_for_birth() {
    let dir = tempfile::tempdir().unwrap();
    let eph = ephemeris(dir.path());
    cmd()
        .arg("ashtakavarga")
        .args(birth_args(&eph))
        .args(["--prastara", "sun"])
        .assert()
        .success()
        .stdout(
            contains("Ascendant: Kumbha")
                .and(contains(SAV_HOUSES))
                .and(contains("Prastara for Sun")),
        );
}

#[test]
fn gochara_for_date() {
    let dir = tempfile::tempdir().unwrap();
    let eph = ephemeris(dir.path());
    cmd()
        .arg("gochara")
        .args(birth_args(&eph))
        .args(["--date", "2025-01-01"])
        .assert()
        .success()
        .stdout(contains("Gochara 2025-01-01").and(contains("Activated houses")));
}

#[test]
fn gochara_json() {
    let dir = tempfile::tempdir().unwrap();
    let eph = ephemeris(dir.path());
    cmd()
        .args(["--json", "gochara"])
        .args(birth_args(&eph))
        .args(["--date", "2025-01-01"])
        .assert()
        .success()
        .stdout(contains("\"house_rankings\"").and(contains("\"rag\"")));
}

#[test]
fn gochara_uncovered_date_fails() {
    let dir = tempfile::tempdir().unwrap();
    let eph = ephemeris(dir.path());
    cmd()
        .arg("gochara")
        .args(birth_args(&eph))
        .args(["--date", "2025-01-02"])
        .assert()
        .failure()
        .stderr(contains("no ephemeris entry"));
}

#[test]
fn auspicious_dates_skips_uncovered_days() {
    let dir = tempfile::tempdir().unwrap();
    let eph = ephemeris(dir.path());
    cmd()
        .arg("auspicious-dates")
        .args(birth_args(&eph))
        .args(["--month", "2025-01", "--with-sav", "--top-n", "3"])
        .assert()
        .success()
        .stdout(contains("1 dates analysed, 30 skipped").and(contains("2025-01-01")));
}

#[test]
fn connections_for_birth() {
    let dir = tempfile::tempdir().unwrap();
    let eph = ephemeris(dir.path());
    cmd()
        .arg("connections")
        .args(birth_args(&eph))
        .assert()
        .success()
        .stdout(contains("Sun").and(contains("connected [1, 4, 7, 8, 9, 12]")));
}

#[test]
fn ephemeris_from_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    ephemeris(dir.path());
    let config = dir.path().join("ashtaka.toml");
    std::fs::write(&config, "ephemeris = \"ephemeris.json\"\n").unwrap();
    cmd()
        .arg("--config")
        .arg(&config)
        .args([
            "ashtakavarga",
            "--dob",
            "18-09-1978",
            "--tob",
            "17:35",
            "--lat",
            "13.0827",
            "--lon",
            "80.2707",
        ])
        .assert()
        .success()
        .stdout(contains(SAV_HOUSES));
}

#[test]
fn missing_ephemeris_reported() {
    cmd()
        .args([
            "ashtakavarga",
            "--dob",
            "1978-09-18",
            "--tob",
            "17:35",
            "--lat",
            "13.0827",
            "--lon",
            "80.2707",
        ])
        .assert()
        .failure()
        .stderr(contains("no ephemeris table"));
}

#[test]
fn invalid_birth_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let eph = ephemeris(dir.path());
    let mut args = birth_args(&eph);
    args[5] = "95".to_string();
    cmd()
        .arg("ashtakavarga")
        .args(args)
        .assert()
        .failure()
        .stderr(contains("latitude 95 outside"));
}
