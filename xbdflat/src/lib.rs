// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]

//! Flattens relaxed JSON block design descriptors into dotted key/value pairs.
//!
//! ```
//! let pairs = xbdflat::parse(r#"{"x": "1", "y": {"z": "2"}}"#).unwrap();
//! assert_eq!(pairs[0].to_string(), "x = 1");
//! assert_eq!(pairs[1].to_string(), "y.z = 2");
//! ```

extern crate alloc;

mod hierarchy;
pub use hierarchy::HierarchyStack;

mod parse_error;
pub use parse_error::ParseError;

mod flattener;
pub use flattener::{parse, parse_with, parse_with_options, Flattener, KeyValuePair};

pub use bdtok::{ErrKind, Options, ValueQuotes};
