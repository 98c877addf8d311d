//! Ranking parser
//!
//! Recovers the ordered id list from raw completion text. The grammar inside
//! the markers is `id (">" id)*`, where an id may carry one layer of square
//! brackets (`[2] > [0]` and `2 > 0` are equivalent).

use super::prompt::{RANK_END, RANK_START};
use thiserror::Error;

/// Ranking parse failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing [rankstart] marker")]
    MissingStart,

    #[error("missing [rankend] marker")]
    MissingEnd,

    #[error("[rankend] appears before [rankstart]")]
    MarkersOutOfOrder,

    #[error("ranking between markers is empty")]
    EmptyRanking,

    #[error("token {position} ({token:?}) is not an integer id")]
    InvalidToken { position: usize, token: String },
}

/// Scanner position over the completion text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State<'a> {
    /// Looking for the opening marker
    SeekingStart,
    /// Opening marker consumed; the rest of the text from here
    InRanking(&'a str),
    /// Ranking body isolated
    Done(&'a str),
}

/// Parse the first `[rankstart] ... [rankend]` block into ids, in order.
///
/// Any token that is not an integer fails the whole parse. Ids are not
/// checked against the document count here; see
/// [`validate_ranking`](super::validation::validate_ranking).
pub fn parse_ranking(text: &str) -> Result<Vec<i64>, ParseError> {
    let body = extract_body(text)?;
    let body = body.trim();
    if body.is_empty() {
        return Err(ParseError::EmptyRanking);
    }

    body.split('>')
        .enumerate()
        .map(|(position, raw)| {
            parse_id(raw).ok_or_else(|| ParseError::InvalidToken {
                position,
                token: raw.trim().to_string(),
            })
        })
        .collect()
}

fn extract_body(text: &str) -> Result<&str, ParseError> {
    let mut state = State::SeekingStart;
    loop {
        state = match state {
            State::SeekingStart => match (text.find(RANK_START), text.find(RANK_END)) {
                (None, _) => return Err(ParseError::MissingStart),
                (Some(_), None) => return Err(ParseError::MissingEnd),
                (Some(start), Some(end)) if end < start => {
                    return Err(ParseError::MarkersOutOfOrder);
                }
                (Some(start), Some(_)) => State::InRanking(&text[start + RANK_START.len()..]),
            },
            State::InRanking(rest) => match rest.find(RANK_END) {
                Some(end) => State::Done(&rest[..end]),
                None => return Err(ParseError::MissingEnd),
            },
            State::Done(body) => return Ok(body),
        };
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    let token = raw.trim();
    let token = token.strip_prefix('[').unwrap_or(token);
    let token = token.strip_suffix(']').unwrap_or(token);
    token.trim().parse().ok()
}
