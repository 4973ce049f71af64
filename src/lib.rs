#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
pub mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod player_cli;
mod player_scripted;
pub mod prelude;
#[cfg(feature = "std")]
mod session;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::{coord_to_token, parse_move};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use player_scripted::*;
#[cfg(feature = "std")]
pub use session::*;
