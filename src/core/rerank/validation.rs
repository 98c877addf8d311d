//! Ranking validation against the submitted documents

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How strictly a parsed ranking is checked before assembly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingValidation {
    /// The ranking must be a permutation of every document index
    #[default]
    Strict,
    /// Duplicates and omissions pass through; only indices outside the
    /// document list are rejected
    Lenient,
}

impl FromStr for RankingValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!(
                "unknown ranking validation mode '{}', expected 'strict' or 'lenient'",
                other
            )),
        }
    }
}

impl fmt::Display for RankingValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

/// A parsed ranking that does not fit the document list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    #[error("index {id} out of range for {len} documents")]
    OutOfRange { id: i64, len: usize },

    #[error("index {id} ranked more than once")]
    Duplicate { id: usize },

    #[error("ranked {ranked} of {len} documents")]
    Incomplete { ranked: usize, len: usize },
}

/// Check parsed ids against a list of `len` documents and convert them to
/// indices.
pub fn validate_ranking(
    ids: &[i64],
    len: usize,
    mode: RankingValidation,
) -> Result<Vec<usize>, RankingError> {
    let mut seen = vec![false; len];
    let mut indices = Vec::with_capacity(ids.len());

    for &id in ids {
        let index = usize::try_from(id)
            .ok()
            .filter(|&i| i < len)
            .ok_or(RankingError::OutOfRange { id, len })?;

        if mode == RankingValidation::Strict {
            if seen[index] {
                return Err(RankingError::Duplicate { id: index });
            }
            seen[index] = true;
        }
        indices.push(index);
    }

    if mode == RankingValidation::Strict && indices.len() != len {
        return Err(RankingError::Incomplete {
            ranked: indices.len(),
            len,
        });
    }

    Ok(indices)
}
