//! # Relay OpenAI
//!
//! Text and image generation against the OpenAI API.
//!
//! The [`GenerativeClient`] trait is the seam between command handlers and
//! the provider; [`OpenAiClient`] implements it over HTTP and [`Generator`]
//! runs calls on their own runtime task so a slow provider never stalls
//! interaction handling.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod generator;
pub mod traits;
pub mod types;
mod wire;

pub use client::*;
pub use error::*;
pub use generator::*;
pub use traits::*;
pub use types::*;
