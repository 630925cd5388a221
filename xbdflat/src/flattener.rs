// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use bdtok::{Cursor, Options, Token, Tokenizer};
use log::{debug, info, trace};

use crate::hierarchy::HierarchyStack;
use crate::parse_error::ParseError;

/// One flattened scalar: its dotted path and its value text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyValuePair {
    pub path: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        KeyValuePair {
            path: path.into(),
            value: value.into(),
        }
    }
}

impl core::fmt::Display for KeyValuePair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} = {}", self.path, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// The opening brace has not been consumed yet
    Start,
    Running,
    /// Root closed, or an error was reported
    Finished,
}

/// Pull-based flattener over a single document.
///
/// Each call to [`next_pair`](Self::next_pair) drives the tokenizer until the
/// next scalar entry, so pairs come out in document order. Every instance
/// owns its own cursor and hierarchy; nothing is shared between parses.
pub struct Flattener<'a> {
    tokenizer: Tokenizer<'a>,
    cursor: Cursor,
    hierarchy: HierarchyStack,
    state: State,
    emitted: usize,
}

impl<'a> Flattener<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_options(text, Options::default())
    }

    pub fn with_options(text: &'a str, options: Options) -> Self {
        Flattener {
            tokenizer: Tokenizer::with_options(text, options),
            cursor: Cursor::start(),
            hierarchy: HierarchyStack::new(),
            state: State::Start,
            emitted: 0,
        }
    }

    /// The containers open at the current position.
    pub fn hierarchy(&self) -> &HierarchyStack {
        &self.hierarchy
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the next pair, or `None` once the root container is closed.
    ///
    /// After an error has been returned the flattener stays finished.
    pub fn next_pair(&mut self) -> Result<Option<KeyValuePair>, ParseError> {
        match self.step() {
            Ok(Some(pair)) => Ok(Some(pair)),
            Ok(None) => {
                self.state = State::Finished;
                Ok(None)
            }
            Err(e) => {
                self.state = State::Finished;
                Err(ParseError::locate(e, &self.tokenizer))
            }
        }
    }

    fn step(&mut self) -> Result<Option<KeyValuePair>, bdtok::Error> {
        match self.state {
            State::Finished => return Ok(None),
            State::Start => {
                self.cursor = self.tokenizer.skip_open_brace(self.cursor)?;
                self.state = State::Running;
            }
            State::Running => {}
        }

        loop {
            let (key, cursor) = self.tokenizer.fetch_key(self.cursor)?;
            self.cursor = cursor;

            let key = match key {
                Token::Text(key) => key,
                Token::Close => match self.hierarchy.pop() {
                    Some(segment) => {
                        debug!("Closed {:?}, depth {}", segment, self.hierarchy.depth());
                        self.cursor = self.tokenizer.skip_comma(self.cursor)?;
                        continue;
                    }
                    None => {
                        info!(
                            "Flattened {} pairs from {} bytes",
                            self.emitted,
                            self.cursor.pos()
                        );
                        return Ok(None);
                    }
                },
                Token::Open => unreachable!("keys never open a container"),
            };

            let (value, cursor) = self.tokenizer.fetch_value(self.cursor)?;
            self.cursor = cursor;

            match value {
                Token::Open => {
                    self.hierarchy.push(key);
                    debug!("Opened {:?}, depth {}", key, self.hierarchy.depth());
                }
                Token::Text(value) => {
                    let prefix = self.hierarchy.current_path();
                    let mut path = String::with_capacity(prefix.len() + key.len());
                    path.push_str(prefix);
                    path.push_str(key);
                    trace!("{} = {}", path, value);

                    self.cursor = self.tokenizer.skip_comma(self.cursor)?;
                    self.emitted += 1;
                    return Ok(Some(KeyValuePair {
                        path,
                        value: value.into(),
                    }));
                }
                Token::Close => unreachable!("values never close a container"),
            }
        }
    }
}

impl Iterator for Flattener<'_> {
    type Item = Result<KeyValuePair, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_pair().transpose()
    }
}

impl FusedIterator for Flattener<'_> {}

/// Flattens `text` with default options.
pub fn parse(text: &str) -> Result<Vec<KeyValuePair>, ParseError> {
    parse_with_options(text, Options::default())
}

pub fn parse_with_options(text: &str, options: Options) -> Result<Vec<KeyValuePair>, ParseError> {
    Flattener::with_options(text, options).collect()
}

/// Streams each pair to `callback` as soon as it is produced.
///
/// Returns the number of pairs delivered. Pairs delivered before an error
/// are not retracted.
pub fn parse_with(
    text: &str,
    options: Options,
    callback: &mut dyn FnMut(KeyValuePair),
) -> Result<usize, ParseError> {
    let mut count = 0;
    for pair in Flattener::with_options(text, options) {
        callback(pair?);
        count += 1;
    }
    Ok(count)
}
