//! Stratagem -- a heuristic engine speaking a line-based host protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr through `env_logger`; set `RUST_LOG` to adjust.
//! An optional first argument names a JSON strategy file.

use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

use stratagem::config::{load_config, StrategyConfig};
use stratagem::engine::Engine;
use stratagem::protocol::{parse_command, Flow, Host};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(c) => {
                log::info!("loaded strategy from {}", path);
                c
            }
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => StrategyConfig::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut host = Host::new(Engine::new(config));

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match host.handle(cmd, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
