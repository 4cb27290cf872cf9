// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod corpus;
pub mod error;
pub mod utils;

pub use config::{Config, CorpusConfig};
pub use corpus::{CorpusLoader, CorpusStream, LoadOptions};
pub use error::{CorpusError, Result};
