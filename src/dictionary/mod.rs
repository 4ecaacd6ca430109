use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// Candidate word list, kept in file order with its original casing.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load dictionary from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        let dictionary = Self::parse(&content);

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Build a dictionary from word-per-line text. Blank lines are skipped;
    /// short words are kept and left for the solver to filter.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect();

        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
    }

    #[test]
    fn test_parse_keeps_order_and_case() {
        let dict = Dictionary::parse("  Apple\n\nqueue\r\nAB\n");
        assert_eq!(dict.words(), ["Apple", "queue", "AB"]);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("boggle-dict-{}.txt", std::process::id()));
        assert_ok!(fs::write(&path, "tree\nRoot\n").await);

        let dict = assert_ok!(Dictionary::load(&path).await);
        assert_eq!(dict.words(), ["tree", "Root"]);

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        assert_err!(Dictionary::load("/nonexistent/boggle/words.txt").await);
    }
}
