#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod heuristic;
mod history;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod random;
#[cfg(feature = "std")]
pub mod session;
mod strategy;

pub use board::*;
pub use common::*;
pub use config::*;
pub use heuristic::*;
pub use history::History;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use random::RandomStrategy;
#[cfg(feature = "std")]
pub use session::{Command, GameOver, Outcome, ParseError, Session};
pub use strategy::*;
