// pegram. A PEG expression compiler
// Copyright (c) 2026 pegram contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Parses PEG source text with the compiled PEG-of-PEG grammar.

use pegram::Node;
use pegram_meta::PEG_GRAMMAR;
use pegram_vm::{generate, Collection};

fn bootstrap() -> Collection {
    generate(&PEG_GRAMMAR).unwrap()
}

/// Concatenates every terminal leaf under `node`, in order.
fn text(node: &Node<'_>) -> String {
    match node {
        Node::Terminal(value) => (*value).to_owned(),
        Node::NonTerminal { children, .. } => children.iter().map(text).collect(),
    }
}

#[test]
fn the_peg_grammar_parses_peg_source() {
    let source = "Sum <- Digit ('+' Digit)*\nDigit <- [0-9]\n";

    let success = bootstrap().parse("Grammar", source).unwrap();
    assert_eq!(success.remainder, "");
    assert_eq!(success.nodes.len(), 1);

    let (name, children) = success.nodes[0].as_non_terminal().unwrap();
    assert_eq!(name, "Grammar");

    // Leading Spacing, one Definition per rule, EndOfFile.
    let child_names: Vec<&str> = children
        .iter()
        .map(|c| c.as_non_terminal().unwrap().0)
        .collect();
    assert_eq!(
        child_names,
        vec!["Spacing", "Definition", "Definition", "EndOfFile"]
    );

    // The tree's terminal leaves reassemble the whole input.
    assert_eq!(text(&success.nodes[0]), source);
    assert_eq!(text(&children[1]), "Sum <- Digit ('+' Digit)*\n");
}

#[test]
fn single_definitions_parse_through_the_definition_rule() {
    let success = bootstrap().parse("Definition", "A <- 'a'\n").unwrap();
    assert_eq!(success.remainder, "");

    let (name, _) = success.nodes[0].as_non_terminal().unwrap();
    assert_eq!(name, "Definition");
}

#[test]
fn comments_are_treated_as_spacing() {
    let source = "# digits only\nDigit <- [0-9]\n";

    let success = bootstrap().parse("Grammar", source).unwrap();
    assert_eq!(success.remainder, "");
}

#[test]
fn non_grammar_input_is_rejected() {
    assert!(bootstrap().parse("Grammar", "123").is_err());
    // A stray token the expression syntax cannot absorb trips EndOfFile.
    assert!(bootstrap().parse("Grammar", "A <- )").is_err());
}
