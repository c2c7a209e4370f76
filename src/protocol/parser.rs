//! Host command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the main loop dispatches on.

use crate::board::Side;

/// A parsed host-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake.
    Hello,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a game on the given side and request a placement.
    NewGame { side: Side },

    /// Set the current position; the payload is parsed by `notation::parse_state`.
    Position { notation: String },

    /// Process the current position.
    Go,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "stratagem" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "go" => Some(Command::Go),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "newgame" => parse_newgame(&tokens),
        "position" => parse_position(&tokens),

        other => {
            log::warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        log::warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");
    let (name_parts, value_parts) = match value_idx {
        Some(vi) => (&tokens[2..vi], &tokens[vi + 1..]),
        None => (&tokens[2..], &tokens[tokens.len()..]),
    };
    if name_parts.is_empty() {
        log::warn!("malformed setoption: empty name");
        return None;
    }

    let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
    Some(Command::SetOption {
        name: name_parts.join(" "),
        value,
    })
}

/// Parses `newgame <first|second>`.
fn parse_newgame(tokens: &[&str]) -> Option<Command> {
    let Some(name) = tokens.get(1) else {
        log::warn!("malformed newgame: expected 'newgame <first|second>'");
        return None;
    };
    match Side::from_name(name) {
        Some(side) => Some(Command::NewGame { side }),
        None => {
            log::warn!("unknown side: '{}'", name);
            None
        }
    }
}

/// Parses `position <board> <side> <last move>`, keeping the payload as text.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        log::warn!("malformed position: expected 'position <board> <side> <last move>'");
        return None;
    }
    Some(Command::Position {
        notation: tokens[1..].join(" "),
    })
}
