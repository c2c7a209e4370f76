//! Protocol session.
//!
//! Couples an `Engine` with the position last received from the host and
//! turns commands into protocol output.

use std::io::Write;

use thiserror::Error;

use crate::board::{ClassicRules, CombatRules, GameState};
use crate::engine::Engine;
use crate::error::EngineError;

use super::notation::{format_move, format_placement, parse_state};
use super::parser::Command;

/// Failures that end the session.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Whether the main loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Host<R: CombatRules = ClassicRules> {
    engine: Engine<R>,
    position: Option<GameState>,
}

impl<R: CombatRules> Host<R> {
    pub fn new(engine: Engine<R>) -> Self {
        Host {
            engine,
            position: None,
        }
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    /// Executes one command, writing any response to `out`.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, HostError> {
        match cmd {
            Command::Hello => {
                writeln!(out, "id name stratagem")?;
                writeln!(out, "id author stratagem")?;
                writeln!(out, "option name Seed type spin default 0 min 0 max {}", u64::MAX)?;
                writeln!(out, "stratagemok")?;
            }
            Command::IsReady => {
                writeln!(out, "readyok")?;
            }
            Command::SetOption { name, value } => self.set_option(&name, value.as_deref()),
            Command::NewGame { side } => {
                self.position = None;
                let placement = self.engine.initialize(side)?;
                writeln!(out, "placement {}", format_placement(&placement))?;
            }
            Command::Position { notation } => match parse_state(&notation) {
                Ok(state) => self.position = Some(state),
                Err(e) => log::warn!("ignoring position: {}", e),
            },
            Command::Go => {
                let Some(state) = &self.position else {
                    log::warn!("go: no position set");
                    return Ok(Flow::Continue);
                };
                match self.engine.process(state)? {
                    Some(mv) => {
                        writeln!(out, "bestmove {} score {:.3}", format_move(&mv), mv.score)?
                    }
                    None => writeln!(out, "observed")?,
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) {
        match (name, value.map(str::parse::<u64>)) {
            ("Seed", Some(Ok(seed))) => {
                log::info!("seeding engine with {}", seed);
                self.engine.seed(seed);
            }
            ("Seed", _) => log::warn!("Seed needs an unsigned integer value"),
            (other, _) => log::warn!("unknown option: {}", other),
        }
    }
}
