//! Integration tests for the stratagem engine binary.
//!
//! Spawns the engine process, sends protocol commands via stdin, and
//! verifies the stdout responses and exit status.

use std::io::{BufRead, Write};
use std::process::{Command, ExitStatus, Stdio};

use stratagem::board::{GameState, Rank, Side};
use stratagem::protocol::encode_state;
use stratagem::protocol::notation::parse_point;

/// Sends a sequence of commands to the engine and collects stdout lines
/// along with the exit status.
fn run_engine_with_status(commands: &[&str]) -> (Vec<String>, ExitStatus) {
    let exe = env!("CARGO_BIN_EXE_stratagem");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start stratagem");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        // The engine may already have exited on a fatal error.
        if writeln!(stdin, "{}", cmd).is_err() {
            break;
        }
    }
    let _ = stdin.flush();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    (lines, status)
}

fn run_engine(commands: &[&str]) -> Vec<String> {
    let (lines, status) = run_engine_with_status(commands);
    assert!(status.success());
    lines
}

/// Rebuilds a board from a `placement ...` line, with a hidden opponent army.
fn opening_position(placement_line: &str, side: Side, active: Side) -> String {
    let mut state = GameState::empty(active);
    for entry in placement_line.trim_start_matches("placement ").split(' ') {
        let (rank, point) = entry.split_once('@').unwrap();
        let rank = Rank::from_notation_char(rank.chars().next().unwrap()).unwrap();
        state.place(parse_point(point).unwrap(), side, Some(rank));
    }
    for p in side.opponent().home_points() {
        state.place(p, side.opponent(), None);
    }
    format!("position {}", encode_state(&state))
}

#[test]
fn handshake() {
    let lines = run_engine(&["stratagem", "quit"]);
    assert!(lines.iter().any(|l| l == "id name stratagem"));
    assert!(lines.iter().any(|l| l == "id author stratagem"));
    assert_eq!(lines.last().map(String::as_str), Some("stratagemok"));
}

#[test]
fn isready_responds_readyok() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn unknown_and_empty_lines_are_ignored() {
    let lines = run_engine(&["", "foobar", "newgame purple", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn eof_without_quit_exits_cleanly() {
    let lines = run_engine(&["isready"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn newgame_reports_a_full_placement() {
    let lines = run_engine(&["setoption name Seed value 3", "newgame second", "quit"]);
    assert_eq!(lines.len(), 1);
    let entries: Vec<&str> = lines[0]
        .strip_prefix("placement ")
        .unwrap()
        .split(' ')
        .collect();
    assert_eq!(entries.len(), 40);
    for entry in entries {
        let (_, point) = entry.split_once('@').unwrap();
        assert!(parse_point(point).unwrap().y <= 3, "{} outside home rows", entry);
    }
}

#[test]
fn seeded_sessions_are_reproducible() {
    let cmds = ["setoption name Seed value 11", "newgame first", "quit"];
    assert_eq!(run_engine(&cmds), run_engine(&cmds));
}

#[test]
fn go_returns_a_forward_move() {
    let lines = run_engine(&["setoption name Seed value 5", "newgame first", "quit"]);
    let position = opening_position(&lines[0], Side::First, Side::First);

    let lines = run_engine(&[
        "setoption name Seed value 5",
        "newgame first",
        &position,
        "go",
        "quit",
    ]);
    assert_eq!(lines.len(), 2);
    let reply: Vec<&str> = lines[1].split(' ').collect();
    assert_eq!(reply[0], "bestmove");
    assert_eq!(reply[2], "score");
    assert!(reply[3].parse::<f64>().is_ok());

    let (from, to) = reply[1].split_once('-').unwrap();
    let from = parse_point(from).unwrap();
    let to = parse_point(to).unwrap();
    assert_eq!(from.y, 6);
    assert!(to.y < from.y);
}

#[test]
fn go_on_opponent_turn_prints_observed() {
    let lines = run_engine(&["setoption name Seed value 8", "newgame first", "quit"]);
    let position = opening_position(&lines[0], Side::First, Side::Second);

    let lines = run_engine(&[
        "setoption name Seed value 8",
        "newgame first",
        &position,
        "go",
        "quit",
    ]);
    assert_eq!(lines[1], "observed");
}

#[test]
fn go_before_newgame_is_fatal() {
    let position = format!("position {}", encode_state(&GameState::empty(Side::First)));
    let (lines, status) = run_engine_with_status(&[&position, "go", "isready", "quit"]);
    assert!(!status.success());
    assert!(lines.is_empty());
}

#[test]
fn missing_config_file_is_fatal() {
    let exe = env!("CARGO_BIN_EXE_stratagem");
    let status = Command::new(exe)
        .arg("/nonexistent/strategy.json")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to start stratagem");
    assert!(!status.success());
}
