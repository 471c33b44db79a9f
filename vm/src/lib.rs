// pegram. A PEG expression compiler
// Copyright (c) 2026 pegram contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! # pegram_vm
//!
//! Compiles a `pegram_meta` grammar into a [`Collection`] of named
//! [`Parser`]s, one per rule. Rule references are resolved by name when a
//! reference is first exercised during a parse, not while compiling, so a
//! rule may reference itself or a rule defined later in the same grammar:
//!
//! ```
//! use pegram_meta::{Expr, Rule};
//! use pegram_vm::generate;
//!
//! let grammar = vec![
//!     Rule {
//!         name: "Expr".to_owned(),
//!         expr: Expr::Seq(vec![
//!             Expr::Ident("Num".to_owned()),
//!             Expr::Ident("Op".to_owned()),
//!             Expr::Ident("Num".to_owned()),
//!         ]),
//!     },
//!     Rule {
//!         name: "Op".to_owned(),
//!         expr: Expr::Choice(vec![
//!             Expr::Str("+".to_owned()),
//!             Expr::Str("-".to_owned()),
//!         ]),
//!     },
//!     Rule {
//!         name: "Num".to_owned(),
//!         expr: Expr::Range('0', '9'),
//!     },
//! ];
//!
//! let collection = generate(&grammar).unwrap();
//! let success = collection.parse("Expr", "1+2").unwrap();
//! assert_eq!(success.remainder, "");
//! ```

#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::debug;
use thiserror::Error;

use pegram::combinator;
use pegram::{ParseError, ParseResult, Parser};
use pegram_meta::{Expr, Rule};

/// The ways compiling a grammar can fail.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// Two rules in the same grammar share a name.
    #[error("rule `{0}` is defined more than once")]
    DuplicateDefinition(String),
}

/// A set of compiled rules, looked up by name.
///
/// `Ident` thunks resolve against the collection live, at call time, which
/// is what makes forward and mutual recursion work. The flip side is that
/// the registry must be fully populated before the first parse; the
/// collection enforces that by only being mutated inside [`generate`],
/// which registers every rule before returning.
#[derive(Clone, Default)]
pub struct Collection {
    rules: Rc<RefCell<HashMap<String, Parser>>>,
}

impl Collection {
    fn add(&self, name: &str, parser: Parser) -> Result<(), Error> {
        let mut rules = self.rules.borrow_mut();
        if rules.contains_key(name) {
            return Err(Error::DuplicateDefinition(name.to_owned()));
        }
        rules.insert(name.to_owned(), parser);
        Ok(())
    }

    /// Looks up the compiled parser registered under `name`.
    pub fn get(&self, name: &str) -> Result<Parser, ParseError> {
        self.rules
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| ParseError::UndefinedRule(name.to_owned()))
    }

    /// Runs the named rule's parser against `input`.
    ///
    /// The entry point for callers once generation is complete. A name
    /// that was never registered surfaces as
    /// [`ParseError::UndefinedRule`].
    pub fn parse<'i>(&self, name: &str, input: &'i str) -> ParseResult<'i> {
        let parser = self.get(name)?;
        parser.parse(input)
    }
}

/// Lists the registered rule names; the parsers themselves are opaque.
impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules = self.rules.borrow();
        let mut names: Vec<&str> = rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Collection").field("rules", &names).finish()
    }
}

/// Compiles a grammar into a [`Collection`] of named parsers.
///
/// Each rule body is compiled bottom-up into combinators and wrapped so a
/// successful application produces a single `NonTerminal` carrying the
/// rule's name. The only failure mode is a duplicate rule name;
/// compilation is deterministic, so generating the same grammar twice
/// yields collections that parse identically.
pub fn generate(grammar: &[Rule]) -> Result<Collection, Error> {
    let collection = Collection::default();
    for rule in grammar {
        let body = emit(&rule.expr, &collection);
        collection.add(&rule.name, combinator::rule(rule.name.as_str(), body))?;
        debug!("compiled rule `{}`", rule.name);
    }
    Ok(collection)
}

fn emit(expr: &Expr, collection: &Collection) -> Parser {
    match expr {
        Expr::Ident(name) => {
            // The essential late binding: capture the shared registry and
            // look the name up when the parser runs, so the target rule
            // may be registered after this one.
            let collection = collection.clone();
            let name = name.clone();
            Parser::from_fn(move |input: &str| {
                let parser = collection.get(&name)?;
                parser.parse(input)
            })
        }
        Expr::Str(value) => combinator::string(value.clone()),
        Expr::Range(start, end) => combinator::range(*start, *end),
        Expr::Class(ranges, literals) => {
            combinator::class(ranges.clone(), literals.clone())
        }
        Expr::Any => combinator::any(),
        Expr::Seq(children) => combinator::sequence(emit_all(children, collection)),
        Expr::Choice(children) => combinator::choice(emit_all(children, collection)),
        Expr::Opt(child) => combinator::optional(emit(child, collection)),
        Expr::Rep(child) => combinator::repeat(emit(child, collection)),
        Expr::RepOnce(child) => combinator::repeat_once(emit(child, collection)),
        Expr::PosPred(child) => combinator::pos_pred(emit(child, collection)),
        Expr::NegPred(child) => combinator::neg_pred(emit(child, collection)),
    }
}

fn emit_all(children: &[Expr], collection: &Collection) -> Vec<Parser> {
    children
        .iter()
        .map(|child| emit(child, collection))
        .collect()
}
