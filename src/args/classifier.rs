//! Token classifier: raw token → long option, short option or operand.

/// A classified raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--name`: key with the prefix stripped.
    LongOption(&'a str),
    /// `-n`: single-character key with the prefix stripped.
    ShortOption(char),
    /// Anything else, bound positionally.
    Operand(&'a str),
}

impl Token<'_> {
    pub fn is_option(&self) -> bool {
        !matches!(self, Token::Operand(_))
    }
}

/// Classify a single raw token.
///
/// A lone `-` or `--`, negative numbers with more than one digit and
/// tokens like `-abc` are operands.
pub fn classify(token: &str) -> Token<'_> {
    if let Some(rest) = token.strip_prefix("--") {
        if rest.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return Token::LongOption(rest);
        }
        return Token::Operand(token);
    }

    if let Some(rest) = token.strip_prefix('-') {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphanumeric() {
                return Token::ShortOption(c);
            }
        }
    }

    Token::Operand(token)
}

/// Whether `token` would be read as an option key.
pub fn is_option_key(token: &str) -> bool {
    classify(token).is_option()
}
