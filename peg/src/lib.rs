// pegram. A PEG expression compiler
// Copyright (c) 2026 pegram contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! # pegram
//!
//! The runtime half of the pegram PEG engine: the concrete-syntax-tree
//! model ([`Node`], [`Success`], [`ParseResult`]) and the combinator
//! constructors that compose [`Parser`]s out of smaller [`Parser`]s with
//! standard PEG semantics. Alternatives are ordered choice, repetition is
//! greedy, and lookahead never consumes input.
//!
//! Parsers built here are plain functions from input text to a result;
//! grammars are usually not assembled by hand but compiled from a
//! `pegram_meta` expression tree by `pegram_vm`.
//!
//! ```
//! use pegram::combinator::{choice, repeat_once, string};
//!
//! let bits = repeat_once(choice(vec![string("0"), string("1")]));
//!
//! let success = bits.parse("0110!").unwrap();
//! assert_eq!(success.nodes.len(), 4);
//! assert_eq!(success.remainder, "!");
//! ```

#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod combinator;
pub mod error;
pub mod node;

pub use combinator::Parser;
pub use error::ParseError;
pub use node::{Node, ParseResult, Success};
