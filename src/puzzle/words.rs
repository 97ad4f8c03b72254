use std::collections::BTreeSet;
use std::fmt;
use std::fmt::Display;
use std::fs;
use std::ops::Index;
use std::path::Path;

use crate::puzzle::error::{FromFileError, ParseError, ParseErrorType};
use crate::puzzle::parse::parse_word_list;

/// Index of a word in a `WordList`
pub type WordId = usize;

/// A candidate word. Its length and letter positions count `char`s, not bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    fn new(text: String) -> Self {
        let letters = text.chars().collect();
        Self { text, letters }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letter(&self, i: usize) -> char {
        self.letters[i]
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The words available to fill a crossword, without duplicates and in sorted order
#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Creates a word list. Duplicates are removed and the words are sorted.
    pub fn new<I, S>(words: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: BTreeSet<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(ParseError::from_type(ParseErrorType::EmptyWordList));
        }
        if let Some(word) = words
            .iter()
            .find(|word| word.is_empty() || word.contains(char::is_whitespace))
        {
            return Err(ParseError::with_token(ParseErrorType::InvalidWord, word));
        }
        let words = words.into_iter().map(Word::new).collect();
        Ok(Self { words })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FromFileError> {
        let s = fs::read_to_string(path)?;
        let words = Self::parse(&s)?;
        Ok(words)
    }

    /// Parses a word list with one word per line
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_word_list(s)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    /// Finds the ID of a word by its text
    pub fn find(&self, text: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|word| word.as_str().cmp(text))
            .ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate()
    }
}

impl Index<WordId> for WordList {
    type Output = Word;

    fn index(&self, id: WordId) -> &Self::Output {
        &self.words[id]
    }
}
