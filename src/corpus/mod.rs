// file: src/corpus/mod.rs
// description: corpus loading module exports
// reference: internal module structure

pub mod loader;

pub use loader::{CorpusLoader, CorpusStream, LoadOptions};
