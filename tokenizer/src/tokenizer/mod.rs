// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::options::Options;

use log::{debug, trace};

const OPEN_BRACE: u8 = b'{';
const CLOSE_BRACE: u8 = b'}';
const OPEN_BRACKET: u8 = b'[';
const CLOSE_BRACKET: u8 = b']';
const QUOTE: u8 = b'"';
const BACKSLASH: u8 = b'\\';
const COLON: u8 = b':';
const COMMA: u8 = b',';

// Size of the window shown when input turns out to be malformed
const EXCERPT_LEN: usize = 99;

fn is_ws(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r')
}

fn ends_bare_token(c: u8) -> bool {
    is_ws(c) || c == COMMA || c == CLOSE_BRACE || c == CLOSE_BRACKET
}

/// What [`Tokenizer::skip_whitespace`] treats as skippable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// Space, tab, newline and carriage return.
    Whitespace,
    /// Whitespace plus commas, which are pure separators between entries.
    Separators,
}

/// A logical element extracted from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A `{` or `[` in value position.
    Open,
    /// A `}` or `]` in key position.
    Close,
    /// A scalar, borrowed from the input.
    Text(&'a str),
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ErrKind {
    MissingOpenBrace,
    UnexpectedEndOfInput,
    UnterminatedString,
    MalformedInput,
}

impl ErrKind {
    pub fn message(self) -> &'static str {
        match self {
            ErrKind::MissingOpenBrace => "No opening brace found",
            ErrKind::UnexpectedEndOfInput => "unexpected end of JSON data",
            ErrKind::UnterminatedString => "unterminated string",
            ErrKind::MalformedInput => "malformed JSON",
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Error {
    kind: ErrKind,
    character: Option<u8>,
    position: usize,
}

impl Error {
    pub fn new<T>(kind: ErrKind, character: Option<u8>, position: usize) -> Result<T, Self> {
        Err(Self {
            kind,
            character,
            position,
        })
    }

    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    /// The offending byte, or `None` when the input ran out.
    pub fn character(&self) -> Option<u8> {
        self.character
    }

    /// Byte offset into the input where the error was detected.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.character {
            Some(c) => write!(
                f,
                "{:?}({}) at {}",
                self.kind,
                char::from(c).escape_default(),
                self.position
            ),
            None => write!(f, "{:?}(EOF) at {}", self.kind, self.position),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (self.kind, self.character) {
            (ErrKind::MalformedInput, Some(c)) => write!(
                f,
                "{}: unexpected '{}'",
                self.kind.message(),
                char::from(c).escape_default()
            ),
            _ => f.write_str(self.kind.message()),
        }
    }
}

impl core::error::Error for Error {}

/// Extracts keys, values and structural markers from a borrowed text buffer.
///
/// The tokenizer itself is stateless apart from its options; every
/// operation takes the current [`Cursor`] and returns the advanced one.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    text: &'a str,
    options: Options,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_options(text, Options::default())
    }

    pub fn with_options(text: &'a str, options: Options) -> Self {
        Tokenizer { text, options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn byte_at(&self, at: Cursor) -> Option<u8> {
        self.text.as_bytes().get(at.pos()).copied()
    }

    /// Advances past whitespace (and commas, for [`Skip::Separators`]).
    ///
    /// Running off the end of the input is an error: every caller expects
    /// more document to follow.
    pub fn skip_whitespace(&self, at: Cursor, skip: Skip) -> Result<Cursor, Error> {
        let bytes = self.text.as_bytes();
        let mut pos = at.pos();
        loop {
            match bytes.get(pos) {
                Some(&c) if is_ws(c) || (skip == Skip::Separators && c == COMMA) => pos += 1,
                Some(_) => return Ok(Cursor::at(pos)),
                None => return Error::new(ErrKind::UnexpectedEndOfInput, None, pos),
            }
        }
    }

    /// Skips everything up to and including the first `{` of the document.
    pub fn skip_open_brace(&self, at: Cursor) -> Result<Cursor, Error> {
        let rest = self.text.as_bytes().get(at.pos()..).unwrap_or_default();
        match rest.iter().position(|&c| c == OPEN_BRACE) {
            Some(offset) => {
                if rest[..offset].iter().any(|&c| !is_ws(c)) {
                    debug!("Skipped {} bytes of preamble before the opening brace", offset);
                }
                Ok(at.advance(offset + 1))
            }
            None => Error::new(ErrKind::MissingOpenBrace, None, self.text.len()),
        }
    }

    /// Extracts a single token starting exactly at `at`.
    ///
    /// A token starting with `"` runs to the next unescaped `"`; escapes are
    /// skipped over but not decoded. Any other token runs up to whitespace,
    /// a comma or a closing brace/bracket. Trailing whitespace is consumed.
    pub fn fetch_token(&self, at: Cursor, strip_quotes: bool) -> Result<(&'a str, Cursor), Error> {
        let text: &'a str = self.text;
        let bytes = text.as_bytes();
        let start = at.pos();

        let (token, after) = if bytes.get(start) == Some(&QUOTE) {
            let mut pos = start + 1;
            loop {
                match bytes.get(pos) {
                    None => return Error::new(ErrKind::UnterminatedString, Some(QUOTE), start),
                    Some(&BACKSLASH) => pos += 2,
                    Some(&QUOTE) => break,
                    Some(_) => pos += 1,
                }
            }
            let token = if strip_quotes {
                &text[start + 1..pos]
            } else {
                &text[start..=pos]
            };
            (token, pos + 1)
        } else {
            let rest = bytes.get(start..).unwrap_or_default();
            match rest.iter().position(|&c| ends_bare_token(c)) {
                Some(len) => (&text[start..start + len], start + len),
                None => return Error::new(ErrKind::UnexpectedEndOfInput, None, text.len()),
            }
        };

        let token = self.truncate(token);
        trace!("Token {:?} at {}", token, start);
        let next = self.skip_whitespace(Cursor::at(after), Skip::Whitespace)?;
        Ok((token, next))
    }

    /// Fetches the key half of a `"key" : value` entry.
    ///
    /// A `}` or `]` in key position yields [`Token::Close`].
    pub fn fetch_key(&self, at: Cursor) -> Result<(Token<'a>, Cursor), Error> {
        let at = self.skip_whitespace(at, Skip::Separators)?;
        match self.byte_at(at) {
            Some(CLOSE_BRACE | CLOSE_BRACKET) => Ok((Token::Close, at.advance(1))),
            Some(QUOTE) => {
                let (key, next) = self.fetch_token(at, true)?;
                Ok((Token::Text(key), next))
            }
            other => {
                debug!("Malformed input near: {}", self.excerpt(at));
                Error::new(ErrKind::MalformedInput, other, at.pos())
            }
        }
    }

    /// Fetches the value half of a `"key" : value` entry.
    ///
    /// A `{` or `[` yields [`Token::Open`]. Without a `:` there is no value
    /// and an empty token is returned with the cursor left in place.
    pub fn fetch_value(&self, at: Cursor) -> Result<(Token<'a>, Cursor), Error> {
        let at = self.skip_whitespace(at, Skip::Whitespace)?;
        if self.byte_at(at) != Some(COLON) {
            return Ok((Token::Text(""), at));
        }

        let at = self.skip_whitespace(at.advance(1), Skip::Whitespace)?;
        match self.byte_at(at) {
            Some(OPEN_BRACE | OPEN_BRACKET) => Ok((Token::Open, at.advance(1))),
            _ => {
                let (value, next) = self.fetch_token(at, self.options.strip_value_quotes())?;
                Ok((Token::Text(value), next))
            }
        }
    }

    /// Skips a trailing comma if there is one, along with surrounding whitespace.
    pub fn skip_comma(&self, at: Cursor) -> Result<Cursor, Error> {
        let at = self.skip_whitespace(at, Skip::Whitespace)?;
        if self.byte_at(at) == Some(COMMA) {
            return self.skip_whitespace(at.advance(1), Skip::Whitespace);
        }
        Ok(at)
    }

    /// A short window of input starting at `at`, for diagnostics.
    pub fn excerpt(&self, at: Cursor) -> &'a str {
        let text: &'a str = self.text;
        let mut start = at.pos().min(text.len());
        while !text.is_char_boundary(start) {
            start -= 1;
        }
        let mut end = start.saturating_add(EXCERPT_LEN).min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        &text[start..end]
    }

    /// 1-based line and column of a byte offset.
    pub fn line_column(&self, position: usize) -> (usize, usize) {
        let mut end = position.min(self.text.len());
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }
        let before = &self.text[..end];
        let line = before.bytes().filter(|&c| c == b'\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
        (line, before[line_start..].chars().count() + 1)
    }

    fn truncate(&self, token: &'a str) -> &'a str {
        match self.options.max_token_len {
            Some(max) if token.len() > max => {
                let mut end = max;
                while !token.is_char_boundary(end) {
                    end -= 1;
                }
                trace!("Truncating {} byte token to {}", token.len(), end);
                &token[..end]
            }
            _ => token,
        }
    }
}
