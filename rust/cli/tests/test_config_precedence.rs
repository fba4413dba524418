mod common;

use common::{clear_env, run_cli, set_env};
use guozha_cli::config::{Overrides, ValueSource, load_with_overrides, load_with_sources};
use guozha_engine::config::GameMode;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let res = run_cli(&["cfg"]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["players"]["value"], 4);
    assert_eq!(json["players"]["source"], "default");
    assert_eq!(json["mode"]["value"], "individual");
    assert_eq!(json["starting_score"]["value"], -100);
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["ai"]["value"], "baseline");
}

#[test]
#[serial]
fn env_overrides_file_and_flags_override_env() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "players = 6\nmode = \"team\"\nseed = 7\nai = \"random\"").unwrap();
    set_env("GUOZHA_CONFIG", file.path().to_str().unwrap());
    set_env("GUOZHA_SEED", "99");

    let resolved = load_with_sources().unwrap();
    assert_eq!(resolved.config.players, 6);
    assert_eq!(resolved.sources.players, ValueSource::File);
    assert_eq!(resolved.config.mode, GameMode::Team);
    assert_eq!(resolved.config.seed, Some(99));
    assert_eq!(resolved.sources.seed, ValueSource::Env);
    assert_eq!(resolved.sources.starting_score, ValueSource::Default);

    let overrides = Overrides {
        seed: Some(1),
        players: Some(8),
        ..Overrides::default()
    };
    let resolved = load_with_overrides(&overrides).unwrap();
    assert_eq!(resolved.config.seed, Some(1));
    assert_eq!(resolved.sources.seed, ValueSource::Flag);
    assert_eq!(resolved.config.players, 8);
    assert_eq!(resolved.config.ai, "random");
    clear_env();
}

#[test]
#[serial]
fn empty_env_values_are_ignored() {
    clear_env();
    set_env("GUOZHA_PLAYERS", "");
    let resolved = load_with_sources().unwrap();
    assert_eq!(resolved.sources.players, ValueSource::Default);
    clear_env();
}

#[test]
#[serial]
fn invalid_env_values_fail_cfg() {
    clear_env();
    set_env("GUOZHA_PLAYERS", "nine");
    let res = run_cli(&["cfg"]);
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Invalid GUOZHA_PLAYERS: nine"));

    set_env("GUOZHA_PLAYERS", "9");
    let res = run_cli(&["cfg"]);
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Invalid configuration"));

    clear_env();
    set_env("GUOZHA_AI", "oracle");
    assert!(load_with_sources().is_err());
    clear_env();
}

#[test]
#[serial]
fn starting_score_from_env_reaches_the_table() {
    clear_env();
    set_env("GUOZHA_STARTING_SCORE", "0");
    let resolved = load_with_sources().unwrap();
    assert_eq!(resolved.config.game_config().starting_score, 0);
    assert_eq!(resolved.sources.starting_score, ValueSource::Env);
    clear_env();
}
