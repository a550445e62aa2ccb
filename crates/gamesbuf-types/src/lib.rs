#![warn(clippy::pedantic)]

pub mod error;
pub mod hash;
pub mod entry;
pub mod query;

pub use entry::Entry;
pub use error::TypeError;
pub use hash::Md5;
pub use query::Query;
