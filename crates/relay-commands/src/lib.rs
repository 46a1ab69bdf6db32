//! # Relay Commands
//!
//! Discord command implementations using Poise framework for Relay Bot.
//!
//! Every generation command runs the same pipeline: the access gate and
//! the per-user cooldown run as framework checks, the interaction is
//! deferred, the provider call runs off-task, and the result or failure is
//! formatted into a reply.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod access;
pub mod ask;
pub mod checks;
pub mod cooldown;
pub mod error;
pub mod framework;
pub mod generation;
pub mod help;
pub mod image;
pub mod member;
pub mod reply;
pub mod roles;

pub use access::*;
pub use cooldown::*;
pub use error::*;
pub use framework::*;
pub use reply::*;
pub use roles::*;
