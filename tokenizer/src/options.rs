// SPDX-License-Identifier: Apache-2.0

/// How quoted values are returned by [`Tokenizer::fetch_value`].
///
/// Keys are always returned without their quotes.
///
/// [`Tokenizer::fetch_value`]: crate::Tokenizer::fetch_value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueQuotes {
    /// `"abc"` is returned as `abc`.
    #[default]
    Strip,
    /// `"abc"` is returned as `"abc"`.
    Keep,
}

/// Runtime knobs for the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub value_quotes: ValueQuotes,
    /// Tokens longer than this many bytes are silently truncated.
    /// `None` means tokens are never truncated.
    pub max_token_len: Option<usize>,
}

impl Options {
    pub fn with_value_quotes(mut self, value_quotes: ValueQuotes) -> Self {
        self.value_quotes = value_quotes;
        self
    }

    pub fn with_max_token_len(mut self, max_token_len: Option<usize>) -> Self {
        self.max_token_len = max_token_len;
        self
    }

    pub(crate) fn strip_value_quotes(&self) -> bool {
        self.value_quotes == ValueQuotes::Strip
    }
}
