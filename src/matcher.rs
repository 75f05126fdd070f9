// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Run a deterministic automaton over an input sequence
//!

use crate::automata::Automaton;

//
// Run state of a match: the current state index and a trapped flag.
// Reset at the start of each match and discarded afterward; the automaton
// itself is read-only during a run.
//
#[derive(Debug)]
struct MatchState<'a> {
    automaton: &'a Automaton,
    state: usize,
    trapped: bool,
}

impl<'a> MatchState<'a> {
    fn new(automaton: &'a Automaton) -> Self {
        MatchState {
            automaton,
            state: automaton.initial_state(),
            trapped: false,
        }
    }

    // consume one character; trap if the current state has no rule for it
    fn advance(&mut self, c: char) {
        match self.automaton.next(self.state, c) {
            Some(q) => self.state = q,
            None => self.trapped = true,
        }
    }
}

///
/// Drive the automaton over the input
///
/// True iff the whole input is consumed without trapping and the run ends
/// in an accepting state. Once trapped, no suffix can lead to a match, so
/// the rest of the input is not scanned.
///
pub(crate) fn run<I: IntoIterator<Item = char>>(automaton: &Automaton, input: I) -> bool {
    let mut m = MatchState::new(automaton);
    for c in input {
        m.advance(c);
        if m.trapped {
            return false;
        }
    }
    automaton.is_final(m.state)
}
