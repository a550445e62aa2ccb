#![warn(clippy::pedantic)]

pub mod error;
pub mod scanner;
pub mod decoder;
pub mod streaming;

pub use decoder::{decode_catalog, decode_entries};
pub use error::DecodeError;
pub use scanner::{ScanStatus, Scanner};
pub use streaming::{CatalogReader, read_catalog};
