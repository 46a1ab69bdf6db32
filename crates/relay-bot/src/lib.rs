//! # Relay Bot
//!
//! Discord bot relaying slash commands to OpenAI text and image generation.
//!
//! This is the main binary crate that wires configuration, logging, the
//! provider client and the Poise framework together and runs the gateway
//! connection until shutdown.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod logging;

pub use bot::*;
pub use error::*;
pub use logging::*;
