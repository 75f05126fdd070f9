// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! NFA determinization by the subset construction
//!
//! A state of the resulting DFA is a set of source-automaton state indices:
//! the epsilon closure of some reachable configuration. Two subset states
//! are equal iff their underlying sets are equal. Once all reachable subset
//! states are known, they are renumbered into a fresh dense automaton.
//!

use log::debug;

use crate::automata::{Automaton, Symbol, Transition};
use crate::errors::Error;
use crate::state_sets::StateSet;

///
/// Epsilon closure of a set of states
///
/// The smallest superset of `states` closed under "if p is in the set and
/// (p, epsilon, q) is a rule then q is in the set". Fixpoint iteration with
/// a no-progress stopping condition, so epsilon cycles terminate.
///
pub(crate) fn closure(rules: &[Transition], states: &StateSet) -> StateSet {
    let mut reachable = states.clone();
    let mut done = false;
    while !done {
        done = true;
        for r in rules {
            if r.symbol.is_epsilon() && reachable.contains(r.source) && reachable.insert(r.dest) {
                done = false;
            }
        }
    }
    reachable
}

///
/// Subset construction
///
/// - `start`, `accepting`, and the rule endpoints are state indices of the
///   source automaton; the rules may contain epsilon and several rules per
///   (state, symbol) pair.
/// - The result is deterministic: no epsilon rules, at most one rule per
///   (state, symbol).
///
pub(crate) fn determinize(
    start: usize,
    accepting: &StateSet,
    rules: &[Transition],
) -> Result<Automaton, Error> {
    let initial = closure(rules, &StateSet::singleton(start));

    let mut done: Vec<StateSet> = Vec::new();
    let mut worklist: Vec<StateSet> = vec![initial.clone()];
    let mut subset_rules: Vec<(StateSet, Symbol, StateSet)> = Vec::new();

    while let Some(p) = worklist.pop() {
        // partition the non-epsilon rules leaving p by symbol
        let mut by_symbol: Vec<(char, StateSet)> = Vec::new();
        for r in rules {
            if let Symbol::Char(c) = r.symbol {
                if p.contains(r.source) {
                    match by_symbol.iter_mut().find(|(a, _)| *a == c) {
                        Some((_, q)) => {
                            q.insert(r.dest);
                        }
                        None => by_symbol.push((c, StateSet::singleton(r.dest))),
                    }
                }
            }
        }
        for (c, q) in by_symbol {
            let q = closure(rules, &q);
            // a subset equal to p is a self-loop, not a new state
            let is_new = q != p && !done.contains(&q) && !worklist.contains(&q);
            subset_rules.push((p.clone(), Symbol::Char(c), q.clone()));
            if is_new {
                worklist.push(q);
            }
        }
        done.push(p);
    }

    // a subset state is accepting iff it intersects the original accepting set
    let final_subsets: Vec<StateSet> = done
        .iter()
        .filter(|s| s.intersects(accepting))
        .cloned()
        .collect();

    debug!(
        "subset construction: {} subset states, {} accepting",
        done.len(),
        final_subsets.len()
    );

    Automaton::from_transition_rules(&initial, &final_subsets, &subset_rules)
}
