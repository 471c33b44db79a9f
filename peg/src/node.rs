// pegram. A PEG expression compiler
// Copyright (c) 2026 pegram contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! The concrete syntax tree produced by a successful parse.

use core::fmt;

use crate::error::ParseError;

/// A node of the concrete syntax tree.
///
/// Nodes are created by the combinators during a successful parse and never
/// mutated afterwards; parents only ever concatenate the node lists their
/// children produced. `Terminal` text borrows from the parsed input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node<'i> {
    /// Input text consumed by a matching primitive.
    Terminal(&'i str),
    /// The result of applying a named rule: its name and the nodes the rule
    /// body produced, in match order.
    NonTerminal {
        /// The rule's name.
        name: String,
        /// The flattened node list the rule body produced.
        children: Vec<Node<'i>>,
    },
}

impl<'i> Node<'i> {
    /// Returns the matched text of a `Terminal` node.
    pub fn as_terminal(&self) -> Option<&'i str> {
        match self {
            Node::Terminal(value) => Some(value),
            Node::NonTerminal { .. } => None,
        }
    }

    /// Returns the rule name and children of a `NonTerminal` node.
    pub fn as_non_terminal(&self) -> Option<(&str, &[Node<'i>])> {
        match self {
            Node::Terminal(_) => None,
            Node::NonTerminal { name, children } => Some((name, children)),
        }
    }

    fn dump(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        for _ in 0..level {
            write!(f, "  ")?;
        }
        match self {
            Node::Terminal(value) => writeln!(f, "-> Terminal: \"{}\"", value),
            Node::NonTerminal { name, children } => {
                writeln!(f, "NonTerminal: {}", name)?;
                for child in children {
                    child.dump(f, level + 1)?;
                }
                Ok(())
            }
        }
    }
}

/// Renders the node as an indented tree, one line per node.
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(f, 0)
    }
}

/// A successful parse: the nodes produced and the unconsumed input.
///
/// `remainder` is always a suffix of the input the outermost parser was
/// invoked on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Success<'i> {
    /// The nodes produced, in match order.
    pub nodes: Vec<Node<'i>>,
    /// The suffix of the input that was not consumed.
    pub remainder: &'i str,
}

/// What every parser returns. Failure is atomic: an `Err` carries no
/// partially constructed nodes.
pub type ParseResult<'i> = Result<Success<'i>, ParseError>;
