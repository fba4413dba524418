// Shared by the integration test binaries; not every binary uses every helper.
#![allow(dead_code)]

pub const ENV_VARS: &[&str] = &[
    "GUOZHA_CONFIG",
    "GUOZHA_PLAYERS",
    "GUOZHA_MODE",
    "GUOZHA_SEED",
    "GUOZHA_STARTING_SCORE",
    "GUOZHA_AI",
];

pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["guozha"];
    argv.extend_from_slice(args);
    let code = guozha_cli::run(argv, &mut out, &mut err);
    CliOutput {
        code,
        stdout: String::from_utf8(out).expect("utf8 stdout"),
        stderr: String::from_utf8(err).expect("utf8 stderr"),
    }
}

pub fn clear_env() {
    for key in ENV_VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

pub fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}
