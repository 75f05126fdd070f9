// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Regular expressions compiled to finite-state automata
//!
//! # Overview
//!
//! This crate converts regular-expression patterns into deterministic
//! finite-state automata and uses these automata to decide whether an
//! input sequence matches a pattern.
//!
//! The [automata](crate::automata) module defines the automaton
//! representation. The same structure describes both nondeterministic and
//! deterministic automata: a transition rule is labeled by either an input
//! character or the epsilon marker (an empty-string transition).
//! Nondeterministic automata are converted to deterministic ones by the
//! subset construction ([Automaton::from_nfa](crate::automata::Automaton::from_nfa)).
//! The module also provides the regular operations on automata: Kleene star,
//! concatenation, and union. All three determinize their result, so the
//! algebra is closed over deterministic automata and matching costs a
//! constant number of rule lookups per input character no matter how many
//! operators were composed.
//!
//! The [regular_expressions](crate::regular_expressions) module compiles a
//! pattern string to an automaton. The pattern syntax supports literal
//! characters, grouping with parentheses, alternation with `|`, implicit
//! concatenation, and the Kleene star `*`. There are no character classes,
//! anchors, or backreferences. Matching always consumes the full input
//! sequence: there is no partial-match or streaming interface.
//!

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod automata;
pub mod errors;
pub mod regular_expressions;
pub mod state_sets;

mod determinize;
mod matcher;
