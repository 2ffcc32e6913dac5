//! Parses the `--script` argument of the demo binary.
//!
//! Tokens are comma separated: `inc`, `dec`, `reset`, `click`, and
//! `batch:<n>` for `n` increments applied in one update, up to
//! [`MAX_BATCH`].

use thiserror::Error;

use crate::demo::app::DemoIntent;
use crate::demo::counter::CounterIntent;
use crate::demo::theme::ThemeIntent;

/// Largest `n` accepted by `batch:<n>`.
pub const MAX_BATCH: usize = 10_000;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("Unknown script token '{token}'")]
    UnknownToken { token: String },

    #[error("Invalid batch size in '{token}'")]
    InvalidBatch { token: String },
}

pub fn parse_script(script: &str) -> Result<Vec<DemoIntent>, ScriptError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<DemoIntent, ScriptError> {
    if let Some(size) = token.strip_prefix("batch:") {
        let size = size
            .parse::<usize>()
            .ok()
            .filter(|size| *size <= MAX_BATCH)
            .ok_or_else(|| ScriptError::InvalidBatch {
                token: token.to_string(),
            })?;
        return Ok(DemoIntent::CounterBatch(vec![
            CounterIntent::Increment;
            size
        ]));
    }

    match token {
        "inc" => Ok(DemoIntent::Counter(CounterIntent::Increment)),
        "dec" => Ok(DemoIntent::Counter(CounterIntent::Decrement)),
        "reset" => Ok(DemoIntent::Counter(CounterIntent::Reset)),
        "click" => Ok(DemoIntent::Theme(ThemeIntent::Click)),
        other => Err(ScriptError::UnknownToken {
            token: other.to_string(),
        }),
    }
}
