// pegram. A PEG expression compiler
// Copyright (c) 2026 pegram contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Parse-time errors.

use thiserror::Error;

/// The reasons a [`Parser`] can reject its input.
///
/// Failure is a value, not an exception: combinators surface it through
/// [`ParseResult`] and parent combinators decide what it means (abort for
/// `sequence`, try the next branch for `choice`, succeed anyway for
/// `optional` and `repeat`). Child failures are propagated unchanged except
/// by `choice`, which reports its own tag once every branch has failed.
///
/// [`Parser`]: crate::Parser
/// [`ParseResult`]: crate::ParseResult
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The named combinator's match condition was not met. The tag is the
    /// combinator that failed, nothing finer grained than that.
    #[error("{0} did not match")]
    Mismatch(&'static str),
    /// A rule reference was exercised whose name was never registered.
    ///
    /// Because references are resolved lazily, a grammar with a dangling
    /// reference compiles fine and only fails the first time the reference
    /// is actually reached during a parse.
    #[error("undefined rule `{0}`")]
    UndefinedRule(String),
}
