use crate::collections::Grid;
use crate::puzzle::error::{ParseError, ParseErrorType};
use crate::puzzle::{Crossword, WordList};

pub(crate) const OPEN_CELL: char = '_';
pub(crate) const BLOCKED_CELL: char = '#';

/// Parses a crossword structure with one line per row
pub fn parse_structure(s: &str) -> Result<Crossword, ParseError> {
    let mut lines: Vec<&str> = s.lines().map(str::trim_end).collect();
    while lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(ParseError::from_type(ParseErrorType::EmptyStructure));
    }
    let mut rows: Vec<Vec<bool>> = Vec::with_capacity(lines.len());
    for (i, line) in lines.into_iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(j, c)| match c {
                OPEN_CELL => Ok(true),
                BLOCKED_CELL => Ok(false),
                _ => Err(ParseError::at_cell(
                    ParseErrorType::InvalidCell,
                    c,
                    i + 1,
                    j + 1,
                )),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(ParseError::at_line(ParseErrorType::RaggedRow, line, i + 1));
            }
        } else if row.is_empty() {
            return Err(ParseError::from_type(ParseErrorType::EmptyStructure));
        }
        rows.push(row);
    }
    let structure =
        Grid::from_rows(rows).ok_or_else(|| ParseError::from_type(ParseErrorType::RaggedRow))?;
    Ok(Crossword::new(structure))
}

/// Parses a word list with one word per line
pub fn parse_word_list(s: &str) -> Result<WordList, ParseError> {
    let mut words = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if word.contains(char::is_whitespace) {
            return Err(ParseError::at_line(ParseErrorType::InvalidWord, word, i + 1));
        }
        words.push(word);
    }
    WordList::new(words)
}

#[cfg(test)]
mod test {
    use super::{parse_structure, parse_word_list};
    use crate::puzzle::error::ParseErrorType;

    #[test]
    fn structure() {
        let crossword = parse_structure("__#\r\n___\r\n\n\n").unwrap();
        assert_eq!(3, crossword.width());
        assert_eq!(2, crossword.height());
        assert_eq!(4, crossword.variable_count());
    }

    #[test]
    fn invalid_cell() {
        let error = parse_structure("___\n_x_\n").unwrap_err();
        assert_eq!(ParseErrorType::InvalidCell, error.error_type());
        assert_eq!(Some(2), error.line());
        assert_eq!("Invalid cell: \"x\" at line 2, column 2", error.to_string());
    }

    #[test]
    fn ragged_row() {
        let error = parse_structure("___\n__\n").unwrap_err();
        assert_eq!(ParseErrorType::RaggedRow, error.error_type());
        assert_eq!(Some(2), error.line());
    }

    #[test]
    fn empty_structure() {
        let error = parse_structure("\n\n").unwrap_err();
        assert_eq!(ParseErrorType::EmptyStructure, error.error_type());
    }

    #[test]
    fn word_list() {
        let words = parse_word_list("  world\nhello\n\nhello\r\n").unwrap();
        assert_eq!(2, words.len());
        assert_eq!("hello", words[0].as_str());
        assert_eq!("world", words[1].as_str());
    }

    #[test]
    fn word_with_space() {
        let error = parse_word_list("one\ntwo words\n").unwrap_err();
        assert_eq!(ParseErrorType::InvalidWord, error.error_type());
        assert_eq!(Some(2), error.line());
    }

    #[test]
    fn empty_word_list() {
        let error = parse_word_list("\n  \n").unwrap_err();
        assert_eq!(ParseErrorType::EmptyWordList, error.error_type());
    }
}
