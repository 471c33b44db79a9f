// pegram. A PEG expression compiler
// Copyright (c) 2026 pegram contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! # pegram_meta
//!
//! The grammar data model of the pegram PEG engine: the [`Expr`] operator
//! tree, named [`Rule`]s, and the bootstrap grammar of PEG syntax itself.
//! A grammar is an ordered slice of rules; rule references are by name, so
//! a rule may refer to itself or to a rule defined later without any
//! structural cycle in the tree.

#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod ast;
pub mod bootstrap;

pub use ast::{Expr, Rule};
pub use bootstrap::{peg_grammar, PEG_GRAMMAR};
