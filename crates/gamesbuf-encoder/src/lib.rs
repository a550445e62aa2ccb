#![warn(clippy::pedantic)]

pub mod error;
pub mod writer;
pub mod encoder;

pub use encoder::encode_catalog;
pub use error::EncodeError;
pub use writer::CatalogWriter;
