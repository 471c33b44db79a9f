// pegram. A PEG expression compiler
// Copyright (c) 2026 pegram contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

use pegram::{Node, ParseError};
use pegram_meta::{Expr, Rule};
use pegram_vm::{generate, Error};

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

fn non_terminal<'i>(name: &str, children: Vec<Node<'i>>) -> Node<'i> {
    Node::NonTerminal {
        name: name.to_owned(),
        children,
    }
}

#[test]
fn empty_grammar_generates_an_empty_collection() {
    let collection = generate(&[]).unwrap();
    assert_eq!(
        collection.parse("Anything", "x"),
        Err(ParseError::UndefinedRule("Anything".to_owned()))
    );
}

#[test]
fn rules_resolve_references_defined_earlier() {
    let grammar = vec![
        rule("Zero", lit("0")),
        rule("One", lit("1")),
        rule("ZeroThenOne", Expr::Seq(vec![ident("Zero"), ident("One")])),
    ];
    let collection = generate(&grammar).unwrap();

    let success = collection.parse("Zero", "0").unwrap();
    assert_eq!(success.remainder, "");
    assert_eq!(success.nodes.len(), 1);

    let success = collection.parse("ZeroThenOne", "01").unwrap();
    assert_eq!(success.remainder, "");
    assert_eq!(
        success.nodes,
        vec![non_terminal(
            "ZeroThenOne",
            vec![
                non_terminal("Zero", vec![Node::Terminal("0")]),
                non_terminal("One", vec![Node::Terminal("1")]),
            ],
        )]
    );
}

#[test]
fn rules_resolve_references_defined_later() {
    // "Bit" is compiled before either rule it references exists.
    let grammar = vec![
        rule("Bit", Expr::Choice(vec![ident("Zero"), ident("One")])),
        rule("Zero", lit("0")),
        rule("One", lit("1")),
    ];
    let collection = generate(&grammar).unwrap();

    let success = collection.parse("Bit", "1").unwrap();
    assert_eq!(success.remainder, "");
    assert_eq!(
        success.nodes,
        vec![non_terminal(
            "Bit",
            vec![non_terminal("One", vec![Node::Terminal("1")])],
        )]
    );
}

#[test]
fn an_arithmetic_grammar_builds_the_expected_tree() {
    let grammar = vec![
        rule(
            "Expr",
            Expr::Seq(vec![ident("Num"), ident("Op"), ident("Num")]),
        ),
        rule("Op", Expr::Choice(vec![lit("+"), lit("-")])),
        rule("Num", Expr::Range('0', '9')),
    ];
    let collection = generate(&grammar).unwrap();

    let success = collection.parse("Expr", "1+2").unwrap();
    assert_eq!(success.remainder, "");
    assert_eq!(
        success.nodes,
        vec![non_terminal(
            "Expr",
            vec![
                non_terminal("Num", vec![Node::Terminal("1")]),
                non_terminal("Op", vec![Node::Terminal("+")]),
                non_terminal("Num", vec![Node::Terminal("2")]),
            ],
        )]
    );

    assert!(collection.parse("Expr", "1*2").is_err());
}

#[test]
fn mutually_recursive_rules_resolve_through_late_binding() {
    // A and B reference each other; both consume input before recursing.
    let grammar = vec![
        rule(
            "A",
            Expr::Seq(vec![lit("a"), Expr::Opt(Box::new(ident("B")))]),
        ),
        rule(
            "B",
            Expr::Seq(vec![lit("b"), Expr::Opt(Box::new(ident("A")))]),
        ),
    ];
    let collection = generate(&grammar).unwrap();

    let success = collection.parse("A", "abab").unwrap();
    assert_eq!(success.remainder, "");

    let success = collection.parse("A", "abba").unwrap();
    assert_eq!(success.remainder, "ba");

    assert!(collection.parse("A", "b").is_err());
}

#[test]
fn self_recursive_rules_resolve_through_late_binding() {
    // Nested <- '(' Nested ')' / ''
    let grammar = vec![rule(
        "Nested",
        Expr::Choice(vec![
            Expr::Seq(vec![lit("("), ident("Nested"), lit(")")]),
            lit(""),
        ]),
    )];
    let collection = generate(&grammar).unwrap();

    let success = collection.parse("Nested", "((()))").unwrap();
    assert_eq!(success.remainder, "");

    let success = collection.parse("Nested", "((]").unwrap();
    assert_eq!(success.remainder, "((]");
}

#[test]
fn lookahead_rules_do_not_consume() {
    // Keyword <- &'let' Word, Word <- [a-z]+
    let grammar = vec![
        rule(
            "Keyword",
            Expr::Seq(vec![
                Expr::PosPred(Box::new(lit("let"))),
                ident("Word"),
            ]),
        ),
        rule(
            "Word",
            Expr::RepOnce(Box::new(Expr::Class(vec![('a', 'z')], vec![]))),
        ),
    ];
    let collection = generate(&grammar).unwrap();

    // The lookahead leaves "let" for Word to consume as part of the word.
    let success = collection.parse("Keyword", "letter").unwrap();
    assert_eq!(success.remainder, "");

    let (_, children) = success.nodes[0].as_non_terminal().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].as_non_terminal().unwrap().0, "Word");

    assert!(collection.parse("Keyword", "otherwise").is_err());
}

#[test]
fn duplicate_rule_names_are_rejected() {
    let grammar = vec![rule("Twice", lit("a")), rule("Twice", lit("b"))];
    assert_eq!(
        generate(&grammar).unwrap_err(),
        Error::DuplicateDefinition("Twice".to_owned())
    );
}

#[test]
fn dangling_references_fail_at_parse_time_not_generation_time() {
    let grammar = vec![rule(
        "Top",
        Expr::Seq(vec![lit("x"), ident("Missing")]),
    )];

    // Generation succeeds; the reference has not been exercised yet.
    let collection = generate(&grammar).unwrap();

    assert_eq!(
        collection.parse("Top", "xy"),
        Err(ParseError::UndefinedRule("Missing".to_owned()))
    );
}

#[test]
fn generation_is_deterministic() {
    let grammar = vec![
        rule(
            "Expr",
            Expr::Seq(vec![ident("Num"), ident("Op"), ident("Num")]),
        ),
        rule("Op", Expr::Choice(vec![lit("+"), lit("-")])),
        rule("Num", Expr::Range('0', '9')),
    ];

    let first = generate(&grammar).unwrap();
    let second = generate(&grammar).unwrap();

    assert_eq!(first.parse("Expr", "9-3"), second.parse("Expr", "9-3"));
    assert_eq!(first.parse("Expr", "9/3"), second.parse("Expr", "9/3"));
}
