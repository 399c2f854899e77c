//! Prompt construction for token concept generation.

use pumpforge_types::token::DEFAULT_THEME;

/// System prompt sent alongside every token concept request.
pub const TOKEN_SYSTEM_PROMPT: &str = r#"You are a creative naming assistant for community meme tokens. You invent short, catchy, memorable token concepts.

Always answer with a single JSON object and nothing else. No markdown, no commentary."#;

/// Build the user prompt for a token concept with the given theme.
///
/// Pure and deterministic. The theme is embedded verbatim; a blank theme
/// falls back to [`DEFAULT_THEME`].
pub fn build_token_prompt(theme: &str) -> String {
    let theme = if theme.trim().is_empty() {
        DEFAULT_THEME
    } else {
        theme
    };

    format!(
        r#"Create a unique meme token concept with the following:
1. A theme: {theme}
2. A catchy name
3. A memorable ticker symbol (2-10 uppercase letters or digits, no "$")
4. A brief description (one or two sentences)

Respond with exactly this JSON shape:
{{"name": "<token name>", "symbol": "<TICKER>", "description": "<short description>"}}"#
    )
}
