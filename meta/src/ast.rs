// pegram. A PEG expression compiler
// Copyright (c) 2026 pegram contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! The grammar abstract syntax tree.

use core::fmt;

/// A parsing expression: the body of a grammar rule.
///
/// The tree is finite along every path; recursion is only expressible
/// through [`Expr::Ident`] indirection, never by structural embedding,
/// which is what keeps recursive grammars representable as plain owned
/// data. Composite variants box or collect their children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    /// Matches the rule with the given name, e.g. `a`
    Ident(String),
    /// Matches an exact string, e.g. `'ab'`
    Str(String),
    /// Matches one character in the inclusive range, e.g. `[a-z]`
    Range(char, char),
    /// Matches one character out of an ordered set of inclusive ranges and
    /// single characters, e.g. `[a-zA-Z_]`
    Class(Vec<(char, char)>, Vec<char>),
    /// Matches any one character, e.g. `.`
    Any,
    /// Matches a sequence of expressions, e.g. `e1 e2`
    Seq(Vec<Expr>),
    /// Ordered choice: matches the first expression that succeeds,
    /// e.g. `e1 / e2`
    Choice(Vec<Expr>),
    /// Optionally matches an expression, e.g. `e?`
    Opt(Box<Expr>),
    /// Matches an expression zero or more times, e.g. `e*`
    Rep(Box<Expr>),
    /// Matches an expression one or more times, e.g. `e+`
    RepOnce(Box<Expr>),
    /// Positive lookahead; matches the expression without consuming input,
    /// e.g. `&e`
    PosPred(Box<Expr>),
    /// Negative lookahead; matches if the expression does not match,
    /// without consuming input, e.g. `!e`
    NegPred(Box<Expr>),
}

/// A named grammar rule, pairing an identifier with its body expression.
///
/// A grammar is an ordered `Vec<Rule>` or `&[Rule]`; ordering only matters
/// for printing, resolution is by name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rule {
    /// The rule's name, unique within its grammar.
    pub name: String,
    /// The rule's body.
    pub expr: Expr,
}

/// Renders the expression in PEG notation, as a debugging aid.
///
/// Sequences space-join their children, choices join with ` / `, the
/// repetition operators are postfix on a parenthesized child, lookahead is
/// prefix `&`/`!`, ranges render as `[a-z]`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => write!(f, "{}", name),
            Expr::Str(value) => write!(f, "'{}'", value),
            Expr::Range(start, end) => write!(f, "[{}-{}]", start, end),
            Expr::Class(ranges, literals) => {
                let mut parts: Vec<String> = ranges
                    .iter()
                    .map(|(start, end)| format!("[{}-{}]", start, end))
                    .collect();
                parts.extend(literals.iter().map(|c| format!("'{}'", c)));
                write!(f, "{}", parts.join(" / "))
            }
            Expr::Any => write!(f, "."),
            Expr::Seq(children) => {
                let mut first = true;
                for child in children {
                    if !first {
                        write!(f, " ")?;
                    }
                    first = false;
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
            Expr::Choice(children) => {
                let mut first = true;
                for child in children {
                    if !first {
                        write!(f, " / ")?;
                    }
                    first = false;
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
            Expr::Opt(child) => write!(f, "({})?", child),
            Expr::Rep(child) => write!(f, "({})*", child),
            Expr::RepOnce(child) => write!(f, "({})+", child),
            Expr::PosPred(child) => write!(f, "&{}", child),
            Expr::NegPred(child) => write!(f, "!{}", child),
        }
    }
}

/// Renders the rule as `Name <- body`.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.name, self.expr)
    }
}
