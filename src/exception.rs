use std::error;
use std::fmt;

#[derive(Debug)]
pub enum PuzzleError {
    RandomSource(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleError::RandomSource(message) => {
                write!(f, "Random source failure: {}", message)
            }
        }
    }
}

impl error::Error for PuzzleError {}
