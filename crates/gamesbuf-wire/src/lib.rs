#![warn(clippy::pedantic)]

pub mod error;
pub mod layout;

pub use error::WireError;
