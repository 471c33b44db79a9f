// pegram. A PEG expression compiler
// Copyright (c) 2026 pegram contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! The grammar of PEG syntax itself, as a grammar literal.
//!
//! This is Ford's PEG-of-PEG: compiling it yields a parser collection
//! whose `Grammar` rule turns PEG source text into a concrete syntax
//! tree. Turning that generic tree back into [`Rule`]s would close the
//! self-hosting loop; that transform is an open extension point and is
//! deliberately not part of this crate.

use once_cell::sync::Lazy;

use crate::ast::{Expr, Rule};

/// The PEG-of-PEG, built once on first use.
pub static PEG_GRAMMAR: Lazy<Vec<Rule>> = Lazy::new(peg_grammar);

fn rule(name: &str, expr: Expr) -> Rule {
    Rule {
        name: name.to_owned(),
        expr,
    }
}

fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_owned())
}

fn lit(value: &str) -> Expr {
    Expr::Str(value.to_owned())
}

fn class(ranges: Vec<(char, char)>, literals: Vec<char>) -> Expr {
    Expr::Class(ranges, literals)
}

fn seq(children: Vec<Expr>) -> Expr {
    Expr::Seq(children)
}

fn choice(children: Vec<Expr>) -> Expr {
    Expr::Choice(children)
}

fn opt(child: Expr) -> Expr {
    Expr::Opt(Box::new(child))
}

fn rep(child: Expr) -> Expr {
    Expr::Rep(Box::new(child))
}

fn rep_once(child: Expr) -> Expr {
    Expr::RepOnce(Box::new(child))
}

fn neg(child: Expr) -> Expr {
    Expr::NegPred(Box::new(child))
}

/// Builds the PEG-of-PEG grammar.
///
/// The start rule is `Grammar`; lexical rules carry their own trailing
/// `Spacing`, as in Ford's original formulation.
pub fn peg_grammar() -> Vec<Rule> {
    vec![
        rule(
            "Grammar",
            seq(vec![
                ident("Spacing"),
                rep_once(ident("Definition")),
                ident("EndOfFile"),
            ]),
        ),
        rule(
            "Definition",
            seq(vec![
                ident("Identifier"),
                ident("LEFT_ARROW"),
                ident("Expression"),
            ]),
        ),
        rule(
            "Expression",
            seq(vec![
                ident("Sequence"),
                rep(seq(vec![ident("SLASH"), ident("Sequence")])),
            ]),
        ),
        rule("Sequence", rep(ident("Prefix"))),
        rule(
            "Prefix",
            seq(vec![
                opt(choice(vec![ident("AND"), ident("NOT")])),
                ident("Suffix"),
            ]),
        ),
        rule(
            "Suffix",
            seq(vec![
                ident("Primary"),
                opt(choice(vec![
                    ident("QUESTION"),
                    ident("STAR"),
                    ident("PLUS"),
                ])),
            ]),
        ),
        rule(
            "Primary",
            choice(vec![
                seq(vec![ident("Identifier"), neg(ident("LEFT_ARROW"))]),
                seq(vec![ident("OPEN"), ident("Expression"), ident("CLOSE")]),
                ident("Literal"),
                ident("Class"),
                ident("DOT"),
            ]),
        ),
        rule(
            "Identifier",
            seq(vec![
                ident("IdentStart"),
                rep(ident("IdentCont")),
                ident("Spacing"),
            ]),
        ),
        rule(
            "IdentStart",
            class(vec![('a', 'z'), ('A', 'Z')], vec!['_']),
        ),
        rule(
            "IdentCont",
            choice(vec![ident("IdentStart"), class(vec![('0', '9')], vec![])]),
        ),
        rule(
            "Literal",
            choice(vec![
                seq(vec![
                    class(vec![], vec!['\'']),
                    rep(seq(vec![neg(class(vec![], vec!['\''])), ident("Char")])),
                    class(vec![], vec!['\'']),
                    ident("Spacing"),
                ]),
                seq(vec![
                    class(vec![], vec!['"']),
                    rep(seq(vec![neg(class(vec![], vec!['"'])), ident("Char")])),
                    class(vec![], vec!['"']),
                    ident("Spacing"),
                ]),
            ]),
        ),
        rule(
            "Class",
            seq(vec![
                lit("["),
                rep(seq(vec![neg(lit("]")), ident("Range")])),
                lit("]"),
                ident("Spacing"),
            ]),
        ),
        rule(
            "Range",
            choice(vec![
                seq(vec![ident("Char"), lit("-"), ident("Char")]),
                ident("Char"),
            ]),
        ),
        rule(
            "Char",
            choice(vec![
                seq(vec![
                    lit("\\"),
                    class(
                        vec![],
                        vec!['n', 'r', 't', '\'', '"', '[', ']', '\\'],
                    ),
                ]),
                seq(vec![
                    lit("\\"),
                    class(vec![('0', '2')], vec![]),
                    class(vec![('0', '7')], vec![]),
                    class(vec![('0', '7')], vec![]),
                ]),
                seq(vec![
                    lit("\\"),
                    class(vec![('0', '7')], vec![]),
                    opt(class(vec![('0', '7')], vec![])),
                ]),
                seq(vec![lit("\\"), lit("-")]),
                seq(vec![neg(lit("\\")), Expr::Any]),
            ]),
        ),
        rule("LEFT_ARROW", seq(vec![lit("<-"), ident("Spacing")])),
        rule("SLASH", seq(vec![lit("/"), ident("Spacing")])),
        rule("AND", seq(vec![lit("&"), ident("Spacing")])),
        rule("NOT", seq(vec![lit("!"), ident("Spacing")])),
        rule("QUESTION", seq(vec![lit("?"), ident("Spacing")])),
        rule("STAR", seq(vec![lit("*"), ident("Spacing")])),
        rule("PLUS", seq(vec![lit("+"), ident("Spacing")])),
        rule("OPEN", seq(vec![lit("("), ident("Spacing")])),
        rule("CLOSE", seq(vec![lit(")"), ident("Spacing")])),
        rule("DOT", seq(vec![lit("."), ident("Spacing")])),
        rule(
            "Spacing",
            rep(choice(vec![ident("Space"), ident("Comment")])),
        ),
        rule(
            "Comment",
            seq(vec![
                lit("#"),
                rep(seq(vec![neg(ident("EndOfLine")), Expr::Any])),
            ]),
        ),
        rule(
            "Space",
            choice(vec![lit(" "), lit("\t"), ident("EndOfLine")]),
        ),
        rule(
            "EndOfLine",
            choice(vec![lit("\r\n"), lit("\n"), lit("\r")]),
        ),
        rule("EndOfFile", neg(Expr::Any)),
    ]
}
