//! Shared helpers for the CLI integration tests.
//!
//! - [`run_cli`] drives `warsim_cli::run` in-process and captures both streams.
//! - [`EnvGuard`] sets `WARSIM_*` variables for one test and restores them on drop.
//!
//! Tests that touch the environment must also be `#[serial]`.

#![allow(dead_code)]

pub const CONFIG_VARS: &[&str] = &[
    "WARSIM_CONFIG",
    "WARSIM_SEED",
    "WARSIM_FACE_DOWN",
    "WARSIM_RECYCLE",
    "WARSIM_MAX_TURNS",
];

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut argv = vec!["warsim"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit_code = warsim_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

#[derive(Debug)]
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Clears every config variable, then applies `pairs`.
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            if !CONFIG_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }

    pub fn clean() -> Self {
        Self::apply(&[])
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
