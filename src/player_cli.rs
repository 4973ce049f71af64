#![cfg(feature = "std")]

use std::io::{self, Read};
use std::string::String;
use std::vec::Vec;

use crate::{board::Board, common::Cell, player::Player};

/// Interactive player reading one move per line.
///
/// Input is consumed one byte at a time up to the newline, so several players
/// can share `io::Stdin` without one of them buffering the other's lines.
pub struct CliPlayer<R> {
    input: R,
}

impl CliPlayer<io::Stdin> {
    /// Player reading from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> CliPlayer<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let mut terminated = false;
        for byte in (&mut self.input).bytes() {
            match byte? {
                b'\n' => {
                    terminated = true;
                    break;
                }
                b => buf.push(b),
            }
        }
        if !terminated && buf.is_empty() {
            return Ok(None);
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: Read> Player for CliPlayer<R> {
    fn select_move(&mut self, mark: Cell, _board: &Board) -> anyhow::Result<String> {
        match self.read_line()? {
            Some(line) => Ok(line),
            None => anyhow::bail!("input closed while waiting for {}'s move", mark),
        }
    }
}
