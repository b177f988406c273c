//! Integration tests for geowall

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn geowall() -> Command {
        cargo_bin_cmd!("geowall")
    }

    #[test]
    fn help_displays() {
        geowall()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Live satellite Earth wallpaper"));
    }

    #[test]
    fn version_displays() {
        geowall()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("geowall"));
    }

    #[test]
    fn config_path_honors_the_env_override() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        geowall()
            .env("GEOWALL_CONFIG", &path)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("custom.toml"));
    }

    #[test]
    fn config_show_prints_defaults() {
        let tmp = TempDir::new().unwrap();
        geowall()
            .env("GEOWALL_CONFIG", tmp.path().join("config.toml"))
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[screen]"))
            .stdout(predicate::str::contains("GEOCOLOR"));
    }

    #[test]
    fn config_init_writes_a_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        geowall()
            .env("GEOWALL_CONFIG", &path)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration initialized"));
        assert!(path.is_file());

        // A second init without --force leaves the file alone
        geowall()
            .env("GEOWALL_CONFIG", &path)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));
    }

    #[test]
    fn invalid_config_fails_with_a_hint() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "screen = 5").unwrap();
        geowall()
            .env("GEOWALL_CONFIG", &path)
            .args(["config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"))
            .stderr(predicate::str::contains("Hint:"));
    }
}
