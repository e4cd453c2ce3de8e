use crate::info_log;
use std::cell::OnceCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_WORDS_PATH: &str = "words.txt";

pub const FALLBACK_WORDS: [&str; 3] = ["svenska", "lexicon", "programmering"];

/// A word list that always holds at least one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self {
            words: FALLBACK_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Splits a comma-separated word list. Fields are trimmed and empty ones
/// dropped so a trailing newline or a stray comma never yields an unwinnable
/// or instantly won secret word; case is left alone.
pub fn parse_word_list(data: &str) -> Vec<String> {
    data.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_word_list_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let data = fs::read_to_string(path)?;
    Ok(parse_word_list(&data))
}

/// File-backed word list, read at most once.
///
/// Any failure to produce a usable list (missing file, unreadable file, no
/// words in it) silently yields [`WordList::fallback`].
#[derive(Debug)]
pub struct WordSource {
    path: PathBuf,
    words: OnceCell<WordList>,
}

impl WordSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            words: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn words(&self) -> &WordList {
        self.words.get_or_init(|| self.load())
    }

    fn load(&self) -> WordList {
        match load_word_list_from_file(&self.path) {
            Ok(words) => match WordList::new(words) {
                Some(list) => {
                    info_log!("Loaded {} words from '{}'", list.len(), self.path.display());
                    list
                }
                None => {
                    info_log!(
                        "Word list '{}' has no words, using fallback list",
                        self.path.display()
                    );
                    WordList::fallback()
                }
            },
            Err(_e) => {
                info_log!(
                    "Could not read word list '{}' ({}), using fallback list",
                    self.path.display(),
                    _e
                );
                WordList::fallback()
            }
        }
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PATH)
    }
}
