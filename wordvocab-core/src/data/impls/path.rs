//! [`CorpusLoader`](super::super::CorpusLoader) implementation that reads from a file path (UTF-8, one text per line).

use std::fs;
use std::path::Path;

use tracing::debug;

use super::super::{Corpus, CorpusLoader, DataError};

/// Loads a corpus from a file path (UTF-8, one text per non-blank line).
#[derive(Clone, Debug)]
pub struct PathLoader<P>(pub P);

impl<P> PathLoader<P>
where
    P: AsRef<Path>,
{
    /// Creates a loader for the given path.
    #[must_use]
    pub fn new(path: P) -> Self {
        PathLoader(path)
    }
}

impl<P> CorpusLoader for PathLoader<P>
where
    P: AsRef<Path>,
{
    fn load(&self) -> Result<Corpus, DataError> {
        let path = self.0.as_ref();
        let content = fs::read_to_string(path)?;
        let corpus = Corpus::from_lines(content.lines());
        debug!(path = %path.display(), texts = corpus.len(), "loaded corpus");
        Ok(corpus)
    }
}

/// Convenience: load a corpus from a path using [`PathLoader`].
///
/// # Errors
///
/// - [`DataError::Io`] when the path cannot be read or content is not valid UTF-8.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus, DataError> {
    PathLoader::new(path).load()
}
