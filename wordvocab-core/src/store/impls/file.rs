//! [`VocabStore`](super::super::VocabStore) backed by one JSON file.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::super::{StoreError, VocabStore};
use crate::tokenizer::Vocab;

/// Persists the vocabulary as a pretty-printed `{ token: id }` JSON object.
///
/// A missing file means nothing is stored. Parent directories are created on save.
/// Saves write a sibling `.json.tmp` file and rename it over the target, so an interrupted
/// save leaves the previous vocabulary in place.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for the given path. Nothing is read or written until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Path of the vocabulary file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn write_temp(&self, temp_path: &Path, vocab: &Vocab) -> Result<(), StoreError> {
        let mut writer = BufWriter::new(File::create(temp_path)?);
        serde_json::to_writer_pretty(&mut writer, vocab).map_err(StoreError::Serialize)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }
}

impl VocabStore for FileStore {
    fn load(&self) -> Result<Option<Vocab>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let vocab = serde_json::from_str(&content).map_err(StoreError::malformed)?;
        debug!(path = %self.path.display(), "loaded vocabulary file");
        Ok(Some(vocab))
    }

    fn save(&mut self, vocab: &Vocab) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let temp_path = self.temp_path();
        let written = self
            .write_temp(&temp_path, vocab)
            .and_then(|()| fs::rename(&temp_path, &self.path).map_err(StoreError::from));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        debug!(path = %self.path.display(), tokens = vocab.len(), "saved vocabulary file");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
