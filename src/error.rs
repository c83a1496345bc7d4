// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error("the following parse error occurred: {0}")]
    ParseError(#[from] ParseError),
    #[error("invalid `{field}`: {error}")]
    InvalidInput {
        field: &'static str,
        error: ParseError,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("the plaintext is not in the plaintext space [0, N)")]
    InvalidPlaintext,
    #[error("the randomness is not in (0, N)")]
    InvalidRandomness,
    #[error("the result does not fit in {bits} bits")]
    Overflow { bits: usize },
    #[error("the following sanity-check error occurred: {0}")]
    SanityCheckError(SanityCheckError),
    #[error("serialization error: {0}")]
    Serialization(String),
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("invalid digit {character:?} at position {position}")]
    InvalidDigit { position: usize, character: char },
    #[error("the value does not fit in {bits} bits")]
    TooLarge { bits: usize },
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SanityCheckError {
    #[error("invalid Params")]
    InvalidParams(),
    #[error("the modulus N must be at least 2")]
    InvalidModulus,
    #[error("the generator g must be in [1, N^2)")]
    InvalidGenerator,
}

impl From<SanityCheckError> for Error {
    fn from(error: SanityCheckError) -> Self {
        Error::SanityCheckError(error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
