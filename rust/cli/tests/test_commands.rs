mod common;

use common::{clear_env, run_cli};
use serde_json::Value;
use serial_test::serial;

#[test]
#[serial]
fn play_prints_events_and_standings() {
    clear_env();
    let res = run_cli(&["play", "--players", "4", "--seed", "42"]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.starts_with("Seed: 42\n"));
    assert!(res.stdout.contains("Game started: 4 players, individual mode"));
    assert!(res.stdout.contains("Game over: seat"));
    assert!(res.stdout.contains("Rank  Seat  Finish  Cards  Score"));
}

#[test]
#[serial]
fn play_is_reproducible_for_a_seed() {
    clear_env();
    let a = run_cli(&["play", "--players", "3", "--seed", "9", "--ai", "random"]);
    let b = run_cli(&["play", "--players", "3", "--seed", "9", "--ai", "random"]);
    assert_eq!(a.code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn play_json_emits_one_event_per_line() {
    clear_env();
    let res = run_cli(&["play", "--players", "4", "--mode", "team", "--seed", "5", "--json"]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    let events: Vec<Value> = res
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(events.first().unwrap()["type"], "game_started");
    assert_eq!(events.first().unwrap()["mode"], "team");
    let last = events.last().unwrap();
    assert_eq!(last["type"], "game_ended");
    assert_eq!(last["reason"]["kind"], "team_sweep");
    assert_eq!(last["standings"]["teams"].as_array().unwrap().len(), 2);
}

#[test]
#[serial]
fn play_rejects_odd_team_tables() {
    clear_env();
    let res = run_cli(&["play", "--players", "5", "--mode", "team", "--seed", "1"]);
    assert_eq!(res.code, 2);
    assert!(res.stderr.starts_with("Error: Configuration error:"));
}

#[test]
#[serial]
fn sim_reports_aggregates() {
    clear_env();
    let res = run_cli(&["sim", "--games", "4", "--players", "5", "--seed", "3"]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Games: 4"));
    assert!(res.stdout.contains("Average rounds:"));
    let wins: usize = res
        .stdout
        .lines()
        .filter_map(|l| l.strip_prefix("Seat ").and_then(|r| r.split(" wins: ").nth(1)))
        .map(|n| n.parse::<usize>().unwrap())
        .sum();
    assert_eq!(wins, 4);
}

#[test]
#[serial]
fn sim_rejects_zero_games() {
    clear_env();
    let res = run_cli(&["sim", "--games", "0"]);
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("games must be at least 1"));
}

#[test]
fn rules_classify_and_beats() {
    let res = run_cli(&["rules", "classify", "sj", "sj", "bj", "bj"]);
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("Bomb"));

    let res = run_cli(&["rules", "beats", "--challenger", "5,5,5,5", "--incumbent", "2,2,2"]);
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains(" beats "));

    let res = run_cli(&["rules", "beats", "--challenger", "K", "--incumbent", "3,3"]);
    assert!(res.stdout.contains("does not beat"));
}

#[test]
fn rules_classify_rejects_mixed_ranks() {
    let res = run_cli(&["rules", "classify", "5", "6"]);
    assert_eq!(res.code, 2);
    assert!(res.stderr.starts_with("Error: Engine error:"));
}

#[test]
fn help_goes_to_stdout() {
    let res = run_cli(&["--help"]);
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("Usage"));
    assert!(res.stderr.is_empty());
}

#[test]
fn unknown_command_prints_usage() {
    let res = run_cli(&["shuffle"]);
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Usage: guozha <command> [options]"));
    assert!(res.stderr.contains("  sim"));
}

#[test]
fn simulation_logs_engine_lifecycle() {
    use guozha_cli::config::Config;
    use guozha_cli::logging::CapturedLogs;

    let logs = CapturedLogs::new();
    let config = Config {
        players: 3,
        ..Config::default()
    };
    let summary = tracing::subscriber::with_default(logs.subscriber(), || {
        guozha_cli::simulate(2, &config, 17).unwrap()
    });
    assert_eq!(summary.games, 2);
    assert_eq!(logs.matching("game started").len(), 2);
    assert_eq!(logs.matching("game ended").len(), 2);
    assert!(logs.entries().iter().any(|e| e.target.starts_with("guozha_engine")));
}

#[test]
fn rules_classify_rejects_groups_no_table_can_hold() {
    let mut args = vec!["rules", "classify"];
    args.extend(std::iter::repeat_n("3", 71));
    let res = run_cli(&args);
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("largest possible group"));
}
