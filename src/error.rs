use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("no solution for day {0}")]
    UnknownDay(u8),

    #[error("malformed input on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("no answer: {0}")]
    Unsolvable(String),
}

impl Error {
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Error::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub fn unsolvable(reason: impl Into<String>) -> Self {
        Error::Unsolvable(reason.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
