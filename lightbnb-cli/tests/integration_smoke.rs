//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn lightbnb() -> Command {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_properties_search_help() {
    lightbnb()
        .args(["properties", "search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum price per night"));
}

#[test]
fn test_reservations_help() {
    lightbnb()
        .args(["reservations", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guest user id"));
}

#[test]
fn test_user_show_requires_lookup() {
    lightbnb()
        .args(["user", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

// === Dry Run Tests ===

#[test]
fn test_search_dry_run_without_filters() {
    lightbnb()
        .args(["properties", "search", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GROUP BY properties.id"))
        .stdout(predicate::str::contains("WHERE").not())
        .stdout(predicate::str::contains("$1 = 10"));
}

#[test]
fn test_search_dry_run_scales_prices() {
    lightbnb()
        .args([
            "properties",
            "search",
            "--dry-run",
            "--city",
            "Vancouver",
            "--min-price",
            "50",
            "--max-price",
            "150",
            "--min-rating",
            "4",
            "-n",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "WHERE properties.city LIKE $1 AND properties.cost_per_night BETWEEN $2 AND $3",
        ))
        .stdout(predicate::str::contains("$1 = '%Vancouver%'"))
        .stdout(predicate::str::contains("$2 = 5000"))
        .stdout(predicate::str::contains("$3 = 15000"))
        .stdout(predicate::str::contains("$4 = 4"))
        .stdout(predicate::str::contains("$5 = 5"));
}

#[test]
fn test_search_rejects_price_too_large_to_scale() {
    lightbnb()
        .args([
            "properties",
            "search",
            "--dry-run",
            "--min-price",
            "79228162514264337593543950335",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("minimum_price_per_night is out of range"));
}

#[test]
fn test_search_rejects_nan_rating() {
    lightbnb()
        .args(["properties", "search", "--dry-run", "--min-rating", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("minimum_rating: 'NaN' is not a valid number"));
}

// === Environment Tests ===

#[test]
fn test_rust_log_from_dotenv_applies() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "RUST_LOG=debug\n").unwrap();

    lightbnb()
        .current_dir(dir.path())
        .args(["properties", "search", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved database settings"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[database\n").unwrap();

    lightbnb()
        .args(["--config"])
        .arg(&path)
        .args(["properties", "search", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
