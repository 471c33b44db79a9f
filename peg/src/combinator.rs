// pegram. A PEG expression compiler
// Copyright (c) 2026 pegram contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Parser constructors implementing the PEG operators.
//!
//! Each constructor takes its configuration up front and returns a
//! [`Parser`], a pure function from input text to a [`ParseResult`]. The
//! combinators differ only in how they compose the results of their
//! children: `sequence` threads the remainder through its children and
//! aborts on the first failure, `choice` tries every branch against the
//! same input and keeps the first success, the predicates run their child
//! and then discard its consumption.
//!
//! Only [`rule`] introduces structure into the tree; every other
//! combinator concatenates the flat node lists its children produced.

use std::rc::Rc;

use crate::error::ParseError;
use crate::node::{Node, ParseResult, Success};

/// A compiled parser: a pure function from input text to a parse result.
///
/// `Parser` is a cheaply clonable handle to one compiled function, so a
/// rule registry and every reference to that rule share a single compiled
/// body. Cloning never copies the underlying closure.
#[derive(Clone)]
pub struct Parser {
    f: Rc<dyn for<'i> Fn(&'i str) -> ParseResult<'i>>,
}

impl Parser {
    /// Wraps a matching function into a `Parser`.
    ///
    /// This is how late-bound parsers (such as rule-reference thunks that
    /// resolve a name at call time) enter the combinator algebra.
    pub fn from_fn<F>(f: F) -> Parser
    where
        F: for<'i> Fn(&'i str) -> ParseResult<'i> + 'static,
    {
        Parser { f: Rc::new(f) }
    }

    /// Runs the parser against `input`.
    pub fn parse<'i>(&self, input: &'i str) -> ParseResult<'i> {
        (self.f)(input)
    }
}

/// Matches `value` exactly at the start of the input, emitting one
/// `Terminal` node and consuming `value.len()` bytes.
pub fn string(value: impl Into<String>) -> Parser {
    let value = value.into();
    Parser::from_fn(move |input: &str| {
        if input.starts_with(value.as_str()) {
            let (matched, remainder) = input.split_at(value.len());
            Ok(Success {
                nodes: vec![Node::Terminal(matched)],
                remainder,
            })
        } else {
            Err(ParseError::Mismatch("string"))
        }
    })
}

/// Matches one character in the inclusive range `start..=end`.
///
/// Empty input is a plain mismatch, never an out-of-bounds read.
pub fn range(start: char, end: char) -> Parser {
    Parser::from_fn(move |input: &str| match input.chars().next() {
        Some(c) if start <= c && c <= end => Ok(consume_char(input, c)),
        _ => Err(ParseError::Mismatch("range")),
    })
}

/// Matches any single character. Fails only on empty input.
pub fn any() -> Parser {
    Parser::from_fn(|input: &str| match input.chars().next() {
        Some(c) => Ok(consume_char(input, c)),
        None => Err(ParseError::Mismatch("any")),
    })
}

/// Matches one character out of a set: an ordered choice over the given
/// inclusive ranges followed by the given single characters.
pub fn class(ranges: Vec<(char, char)>, literals: Vec<char>) -> Parser {
    let mut parsers: Vec<Parser> = ranges
        .into_iter()
        .map(|(start, end)| range(start, end))
        .collect();
    parsers.extend(literals.into_iter().map(|c| string(c.to_string())));
    choice(parsers)
}

/// Applies each parser in order, feeding every parser the remainder left
/// by the one before it and concatenating the nodes they emit.
///
/// The first failing child aborts the whole sequence; its failure is
/// propagated unchanged and none of the partial matches are observable.
///
/// # Panics
///
/// Panics when `parsers` is empty. A sequence of nothing is a grammar
/// construction bug, not a runtime condition.
pub fn sequence(parsers: Vec<Parser>) -> Parser {
    assert!(!parsers.is_empty(), "sequence requires at least one parser");
    Parser::from_fn(move |input: &str| {
        let mut nodes = Vec::new();
        let mut remainder = input;
        for parser in &parsers {
            let success = parser.parse(remainder)?;
            nodes.extend(success.nodes);
            remainder = success.remainder;
        }
        Ok(Success { nodes, remainder })
    })
}

/// Ordered choice: tries each parser against the same input, in order, and
/// returns the first success verbatim.
///
/// There is no longest-match backtracking across branches; branch order
/// decides the outcome whenever several branches could match. Child
/// failures are discarded, a failed choice reports only its own tag.
///
/// # Panics
///
/// Panics when `parsers` is empty, like [`sequence`].
pub fn choice(parsers: Vec<Parser>) -> Parser {
    assert!(!parsers.is_empty(), "choice requires at least one parser");
    Parser::from_fn(move |input: &str| {
        for parser in &parsers {
            if let Ok(success) = parser.parse(input) {
                return Ok(success);
            }
        }
        Err(ParseError::Mismatch("choice"))
    })
}

/// Tries `parser`; on failure succeeds anyway with no nodes and the input
/// untouched. Never fails.
pub fn optional(parser: Parser) -> Parser {
    Parser::from_fn(move |input: &str| match parser.parse(input) {
        Ok(success) => Ok(success),
        Err(_) => Ok(Success {
            nodes: vec![],
            remainder: input,
        }),
    })
}

/// Applies `parser` greedily until it fails, accumulating nodes. Zero
/// repetitions is a valid match, so this never fails.
pub fn repeat(parser: Parser) -> Parser {
    Parser::from_fn(move |input: &str| {
        let mut nodes = Vec::new();
        let mut remainder = input;
        while let Ok(success) = parser.parse(remainder) {
            nodes.extend(success.nodes);
            remainder = success.remainder;
        }
        Ok(Success { nodes, remainder })
    })
}

/// Like [`repeat`], but the first application must succeed; its failure is
/// the combinator's failure.
pub fn repeat_once(parser: Parser) -> Parser {
    Parser::from_fn(move |input: &str| {
        let success = parser.parse(input)?;
        let mut nodes = success.nodes;
        let mut remainder = success.remainder;
        while let Ok(more) = parser.parse(remainder) {
            nodes.extend(more.nodes);
            remainder = more.remainder;
        }
        Ok(Success { nodes, remainder })
    })
}

/// Positive lookahead: `parser` must match, but nothing is consumed and no
/// nodes are kept. A zero-width assertion.
pub fn pos_pred(parser: Parser) -> Parser {
    Parser::from_fn(move |input: &str| {
        parser.parse(input)?;
        Ok(Success {
            nodes: vec![],
            remainder: input,
        })
    })
}

/// Negative lookahead: succeeds with nothing consumed only if `parser`
/// fails.
pub fn neg_pred(parser: Parser) -> Parser {
    Parser::from_fn(move |input: &str| match parser.parse(input) {
        Ok(_) => Err(ParseError::Mismatch("neg_pred")),
        Err(_) => Ok(Success {
            nodes: vec![],
            remainder: input,
        }),
    })
}

/// Wraps everything `parser` produced into a single `NonTerminal` named
/// `name`. The sole combinator that turns the flat node concatenation of
/// its siblings into tree structure.
pub fn rule(name: impl Into<String>, parser: Parser) -> Parser {
    let name = name.into();
    Parser::from_fn(move |input: &str| {
        let success = parser.parse(input)?;
        Ok(Success {
            nodes: vec![Node::NonTerminal {
                name: name.clone(),
                children: success.nodes,
            }],
            remainder: success.remainder,
        })
    })
}

fn consume_char(input: &str, c: char) -> Success<'_> {
    let (matched, remainder) = input.split_at(c.len_utf8());
    Success {
        nodes: vec![Node::Terminal(matched)],
        remainder,
    }
}
