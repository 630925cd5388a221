// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]

//! Single-pass tokenizer for the relaxed JSON dialect used by block design
//! descriptors.
//!
//! The tokenizer never allocates: every extracted token borrows from the
//! input text, and positions are passed around as [`Cursor`] values.

mod cursor;
pub use cursor::Cursor;

mod options;
pub use options::{Options, ValueQuotes};

mod tokenizer;
pub use tokenizer::{ErrKind, Error, Skip, Token, Tokenizer};
