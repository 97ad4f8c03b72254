use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FromFileError {
    #[error("error reading file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// An error in a structure file or a word list
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParseErrorType,
    token: Option<String>,
    line: Option<usize>,
    column: Option<usize>,
}

impl ParseError {
    pub(crate) fn at_line(error_type: ParseErrorType, token: impl Display, line: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            line: Some(line),
            column: None,
        }
    }

    pub(crate) fn at_cell(
        error_type: ParseErrorType,
        token: impl Display,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            column: Some(column),
            ..Self::at_line(error_type, token, line)
        }
    }

    pub(crate) fn with_token(error_type: ParseErrorType, token: impl Display) -> Self {
        Self {
            token: Some(token.to_string()),
            ..Self::from_type(error_type)
        }
    }

    pub(crate) const fn from_type(error_type: ParseErrorType) -> Self {
        Self {
            error_type,
            token: None,
            line: None,
            column: None,
        }
    }

    pub fn error_type(&self) -> ParseErrorType {
        self.error_type
    }

    /// The line number (starting from 1) where the error was found
    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParseErrorType {
    EmptyStructure,
    EmptyWordList,
    InvalidCell,
    InvalidWord,
    RaggedRow,
}

impl Display for ParseErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorType::EmptyStructure => "Empty structure",
            ParseErrorType::EmptyWordList => "Empty word list",
            ParseErrorType::InvalidCell => "Invalid cell",
            ParseErrorType::InvalidWord => "Invalid word",
            ParseErrorType::RaggedRow => "Row width differs from the first row",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        if let Some(column) = self.column {
            write!(f, ", column {}", column)?;
        }
        Ok(())
    }
}
