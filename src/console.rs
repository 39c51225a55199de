//! Line-oriented pin queries over the serial console.
//!
//! The host types a name and a line ending; the board answers with the
//! GPIO it resolves to. Accepted names are the board's aliases (`LED`,
//! `GP4`, `A0`), PLC terminals on the picoXpander (`IX3`, `QW0`) and bare
//! GPIO numbers (`25`).

use core::fmt::Write;

use heapless::String;

use crate::board::{Board, BoardDescriptor};
use crate::error::{Error, Result};
use crate::pin::PinId;
use crate::plc;

/// Longest query line kept; longer lines are discarded.
pub const LINE_LEN: usize = 64;

/// Room for any reply to a query of at most `LINE_LEN` bytes.
pub const REPLY_LEN: usize = LINE_LEN + 32;

/// Collects bytes until a line ending arrives.
#[derive(Debug, Default)]
pub struct LineBuffer {
    line: String<LINE_LEN>,
    discard: bool,
}

impl LineBuffer {
    pub const fn new() -> Self {
        LineBuffer {
            line: String::new(),
            discard: false,
        }
    }

    /// Feeds received bytes, calling `on_line` for every complete,
    /// non-empty line. A line that overflows the buffer or carries
    /// non-ASCII bytes is dropped up to its line ending.
    pub fn feed(&mut self, bytes: &[u8], mut on_line: impl FnMut(&str)) {
        for &b in bytes {
            match b {
                b'\r' | b'\n' => {
                    if !self.discard && !self.line.is_empty() {
                        on_line(self.line.as_str());
                    }
                    self.line.clear();
                    self.discard = false;
                }
                _ if self.discard => {}
                _ if b.is_ascii() => {
                    if self.line.push(char::from(b)).is_err() {
                        self.discard = true;
                    }
                }
                _ => self.discard = true,
            }
        }
    }
}

/// Resolves one query against `board`.
pub fn resolve(board: &BoardDescriptor, query: &str) -> Result<PinId> {
    if !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit()) {
        return query
            .parse::<u8>()
            .ok()
            .and_then(PinId::checked)
            .ok_or(Error::NoSuchPin);
    }
    if board.board() == Board::PicoXpander {
        if let Some(pin) = plc::terminal(query) {
            return Ok(pin);
        }
    }
    board.lookup(query)
}

/// Writes the reply line for `query` into `reply`, e.g. `LED=GPIO25\r\n`.
/// Blank queries get no reply.
pub fn answer(board: &BoardDescriptor, query: &str, reply: &mut String<REPLY_LEN>) {
    reply.clear();
    let name = query.trim();
    if name.is_empty() {
        return;
    }
    // a name of at most LINE_LEN bytes always fits REPLY_LEN
    let _ = match resolve(board, name) {
        Ok(pin) => write!(reply, "{}={}\r\n", name, pin),
        Err(e) => write!(reply, "{}: {}\r\n", e, name),
    };
}
