// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Error codes
//!

use thiserror::Error;

///
/// Error codes produced by automaton construction and regex compilation
///
/// Two families:
/// - structural errors: a malformed automaton construction request
///   ([UndefinedState](Self::UndefinedState))
/// - syntax errors: a malformed regex pattern (everything else)
///
/// Both are reported at the point of detection. There is no partial result:
/// construction either succeeds and returns a well-formed automaton or
/// fails with one of these codes. Matching itself never fails.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum Error {
    /// The start state or an accepting state of an automaton under
    /// construction is not an endpoint of any transition rule.
    ///
    /// The only state that may be absent from the rules is the start state
    /// of an automaton with no rules at all (the one-state automaton).
    #[error("state is not an endpoint of any transition rule")]
    UndefinedState,

    /// An operator was applied with too few operands on the value stack.
    ///
    /// The character names the operator: `'*'`, `'+'` (implicit
    /// concatenation), or `'|'`.
    #[error("missing operand for operator '{0}'")]
    MissingOperand(char),

    /// A `(` with no matching `)` was left on the operator stack at the
    /// end of the pattern.
    #[error("missing right parenthesis ')'")]
    UnmatchedLeftParenthesis,

    /// A `)` was read with no matching `(` on the operator stack.
    #[error("missing left parenthesis '('")]
    UnmatchedRightParenthesis,

    /// An operator token that the evaluator does not recognize.
    #[error("undefined operator '{0}'")]
    UndefinedOperator(char),

    /// The pattern did not reduce to a single automaton.
    #[error("pattern did not reduce to a single automaton")]
    MalformedPattern,
}
