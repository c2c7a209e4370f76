//! Host protocol handling.
//!
//! Line-based command parsing, the board notation used to exchange
//! positions and moves with the host, and the session that ties them to an
//! `Engine`.

pub mod host;
pub mod notation;
pub mod parser;

pub use host::{Flow, Host, HostError};
pub use notation::{
    encode_state, format_move, format_placement, parse_state, NotationError,
};
pub use parser::{parse_command, Command};
