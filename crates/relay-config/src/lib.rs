//! # Relay Config
//!
//! Type-safe configuration loading and validation for Relay Bot.
//!
//! Configuration is read once at startup from an optional YAML file,
//! overlaid with environment variables for credentials, and validated
//! before the bot connects to Discord.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
