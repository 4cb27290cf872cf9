// file: src/corpus/loader.rs
// description: directory enumeration and eager/streaming document loading
// reference: https://docs.rs/walkdir

use crate::config::CorpusConfig;
use crate::error::{CorpusError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::vec;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Options controlling file matching and text normalization.
///
/// The `lowercase` flag applies to eager loads only; streaming loads always
/// lowercase (see [`CorpusLoader::stream`]).
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub suffix: String,
    pub lowercase: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            suffix: ".txt".to_string(),
            lowercase: true,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

impl From<&CorpusConfig> for LoadOptions {
    fn from(config: &CorpusConfig) -> Self {
        Self {
            suffix: config.suffix.clone(),
            lowercase: config.lowercase,
        }
    }
}

/// Loads the text files directly under a directory into an in-memory corpus.
///
/// Each document is the full decoded contents of one file, with no filename
/// or size metadata attached. Enumeration order follows the filesystem and is
/// not guaranteed sorted.
pub struct CorpusLoader {
    options: LoadOptions,
}

impl CorpusLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn with_defaults() -> Self {
        Self::new(LoadOptions::default())
    }

    /// Reads every matching file up front and returns the materialized corpus.
    ///
    /// A missing directory yields an empty corpus. The first file that cannot
    /// be opened or decoded as UTF-8 aborts the whole load; no partial corpus
    /// is returned.
    pub fn load(&self, dir: &Path) -> Result<Vec<String>> {
        info!("Loading corpus from: {}", dir.display());

        let mut corpus = Vec::new();

        for path in self.matching_files(dir) {
            debug!("Reading document: {}", path.display());
            corpus.push(read_document(&path, self.options.lowercase)?);
        }

        info!("Loaded {} documents", corpus.len());
        Ok(corpus)
    }

    /// Returns a one-shot stream that reads each matching file on demand.
    ///
    /// File paths are enumerated immediately; reads and decodes happen as the
    /// iterator advances. Streamed documents are always lowercased regardless
    /// of [`LoadOptions::lowercase`], matching the eager mode's defaults. A
    /// read failure is yielded as an `Err` item, after which the stream is
    /// exhausted.
    pub fn stream(&self, dir: &Path) -> CorpusStream {
        let paths = self.matching_files(dir);
        debug!("Streaming {} documents from: {}", paths.len(), dir.display());

        CorpusStream {
            paths: paths.into_iter(),
            failed: false,
        }
    }

    fn matching_files(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(&self.options.suffix))
            })
            .map(|entry| entry.into_path())
            .collect()
    }
}

/// One-shot iterator over the documents of a corpus.
///
/// Finite and forward-only; once exhausted or failed it keeps returning
/// `None`.
pub struct CorpusStream {
    paths: vec::IntoIter<PathBuf>,
    failed: bool,
}

impl Iterator for CorpusStream {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let path = self.paths.next()?;

        match read_document(&path, true) {
            Ok(document) => Some(Ok(document)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, Some(self.paths.len()))
        }
    }
}

fn read_document(path: &Path, lowercase: bool) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| CorpusError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|source| CorpusError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(if lowercase { text.to_lowercase() } else { text })
}
