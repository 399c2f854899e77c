//! Turns a provider's raw completion into `TokenMetadata`.
//!
//! Accepted shapes, tried in order:
//! 1. a JSON object (bare, inside a fenced code block, or embedded in prose)
//! 2. labeled lines: `Name:`, `Symbol:` / `Ticker:`, `Description:`
//!
//! Missing or empty fields fail the run with `MalformedResponse` naming the
//! field. There are no silent defaults.

use serde_json::Value;

use pumpforge_types::error::GenerationError;
use pumpforge_types::llm::{RawCompletion, StopReason};
use pumpforge_types::token::TokenMetadata;

const SYMBOL_MIN_LEN: usize = 2;
const SYMBOL_MAX_LEN: usize = 10;

/// Fields pulled out of the response before validation.
#[derive(Debug, Default)]
struct ExtractedFields {
    name: Option<String>,
    symbol: Option<String>,
    description: Option<String>,
}

impl ExtractedFields {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.symbol.is_none() && self.description.is_none()
    }
}

/// Stateless mapper from `RawCompletion` to `TokenMetadata`.
pub struct ResultAssembler;

impl ResultAssembler {
    /// Parse and validate the completion text.
    ///
    /// The returned metadata never carries an image reference; the pipeline
    /// attaches one after the image generator has run.
    #[tracing::instrument(
        name = "assemble_token",
        skip(raw),
        fields(completion_id = %raw.id, text_len = raw.text.len())
    )]
    pub fn assemble(raw: &RawCompletion) -> Result<TokenMetadata, GenerationError> {
        let text = raw.text.trim();
        if text.is_empty() {
            return Err(GenerationError::MalformedResponse(
                "provider returned an empty completion".to_string(),
            ));
        }

        let fields = match extract_json_fields(text).filter(|f| !f.is_empty()) {
            Some(fields) => fields,
            None => {
                tracing::debug!("no token JSON object in completion; trying labeled lines");
                extract_labeled_fields(text)
            }
        };

        if fields.is_empty() {
            let mut message = "response contains no token fields".to_string();
            if raw.stop_reason == StopReason::MaxTokens {
                message.push_str(" (output was truncated at max_tokens)");
            }
            tracing::warn!(
                content_preview = &text[..floor_char_boundary(text, 200)],
                "Failed to extract token fields from completion"
            );
            return Err(GenerationError::MalformedResponse(message));
        }

        let name = require("name", fields.name)?;
        let symbol = normalize_symbol(&require("symbol", fields.symbol)?)?;
        let description = require("description", fields.description)?;

        Ok(TokenMetadata::new(name, symbol, description))
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, GenerationError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(GenerationError::MalformedResponse(format!(
            "field `{field}` is empty"
        ))),
        None => Err(GenerationError::MalformedResponse(format!(
            "missing required field `{field}`"
        ))),
    }
}

/// Strip a leading `$`, upper-case, and check the 2-10 alphanumeric rule.
fn normalize_symbol(symbol: &str) -> Result<String, GenerationError> {
    let symbol = symbol.trim().trim_start_matches('$').trim().to_ascii_uppercase();
    let valid_len = (SYMBOL_MIN_LEN..=SYMBOL_MAX_LEN).contains(&symbol.len());
    if !valid_len || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(GenerationError::MalformedResponse(format!(
            "invalid symbol '{symbol}': expected {SYMBOL_MIN_LEN}-{SYMBOL_MAX_LEN} letters or digits"
        )));
    }
    Ok(symbol)
}

/// Parse the span from the first `{` to the last `}` as a JSON object.
///
/// Covers bare objects, fenced code blocks and objects wrapped in prose.
fn extract_json_fields(text: &str) -> Option<ExtractedFields> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }

    let value: Value = serde_json::from_str(&text[start..=end]).ok()?;
    let object = value.as_object()?;

    let string_field = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| object.get(*k).and_then(Value::as_str))
            .map(str::to_string)
    };

    Some(ExtractedFields {
        name: string_field(&["name", "tokenName"]),
        symbol: string_field(&["symbol", "ticker"]),
        description: string_field(&["description"]),
    })
}

/// Collect `Label: value` lines. The first occurrence of each label wins.
fn extract_labeled_fields(text: &str) -> ExtractedFields {
    let mut fields = ExtractedFields::default();
    for (field, value) in text.lines().filter_map(parse_labeled_line) {
        let slot = match field {
            "name" => &mut fields.name,
            "symbol" => &mut fields.symbol,
            _ => &mut fields.description,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
    fields
}

fn parse_labeled_line(line: &str) -> Option<(&'static str, String)> {
    // List markers and heading noise: "1.", "-", "*", "##"
    let line = line.trim().trim_start_matches(|c: char| {
        c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '*' | '#' | '.' | ')')
    });
    let (label, value) = line.split_once(':')?;

    let field = match label.trim().trim_matches('*').trim().to_ascii_lowercase().as_str() {
        "name" | "token name" => "name",
        "symbol" | "ticker" | "ticker symbol" | "token symbol" => "symbol",
        "description" | "token description" => "description",
        _ => return None,
    };

    let value = value.trim().trim_matches('*').trim().trim_matches('"').trim();
    Some((field, value.to_string()))
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    (0..=max).rev().find(|i| s.is_char_boundary(*i)).unwrap_or(0)
}
