//! [`Corpus`]: the texts of a training batch.

/// Training texts, one per non-blank input line, in file order.
///
/// Lines are kept as read (not trimmed); whitespace splitting happens during training.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus(Vec<String>);

impl Corpus {
    /// Builds a corpus from lines, skipping those that hold only whitespace.
    #[must_use]
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Corpus(
            lines
                .into_iter()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Returns the number of texts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the corpus holds no texts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the texts as string slices, ready for training.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    /// Appends the texts of `other`.
    pub fn extend(&mut self, other: Corpus) {
        self.0.extend(other.0);
    }
}

impl IntoIterator for Corpus {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
