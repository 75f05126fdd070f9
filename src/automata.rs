// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Finite-state automata
//!
//! States are indexed by an integer from 0 to N-1 where N is the number of
//! states. A transition rule is a triple (source, symbol, destination) where
//! the symbol is either an input character or the epsilon marker. The same
//! representation covers nondeterministic and deterministic automata: an
//! automaton is deterministic iff it has no epsilon rule and at most one
//! rule per (state, symbol) pair.
//!
//! Automata are immutable once constructed. The regular operations
//! [star](Automaton::star), [concat](Automaton::concat), and
//! [union](Automaton::union) build a new automaton from their operands and
//! always determinize the result, so every automaton these return can be
//! matched against in a single pass over the input.
//!
//! Construction goes through [from_transition_rules](Automaton::from_transition_rules),
//! which accepts rules over arbitrary state labels and normalizes them to
//! dense indices, or through [from_nfa](Automaton::from_nfa), which applies
//! the subset construction to rules that may contain epsilon.
//!

use std::fmt::Display;

use crate::determinize;
use crate::errors::Error;
use crate::matcher;
use crate::state_sets::StateSet;

///
/// Transition label: a single input character or the epsilon marker
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Empty-string transition: consumes no input
    Epsilon,
    /// A single input character
    Char(char),
}

impl Symbol {
    /// Check whether this is the epsilon marker
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Epsilon => write!(f, "\u{03B5}"),
            Symbol::Char(c) => write!(f, "{}", c),
        }
    }
}

///
/// Transition rule over dense state indices
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Source state
    pub source: usize,
    /// Symbol read, possibly epsilon
    pub symbol: Symbol,
    /// Destination state
    pub dest: usize,
}

///
/// Finite-state automaton
///
/// Invariant: the initial state, all accepting states, and all rule
/// endpoints are indices less than `num_states`.
///
#[derive(Debug)]
pub struct Automaton {
    // number of states
    num_states: usize,
    // index of the initial state
    initial_state: usize,
    // set of accepting states
    final_states: StateSet,
    // transition rules
    rules: Vec<Transition>,
}

//
// Dense numbering of arbitrary state labels.
//
// Indices are assigned in order of first occurrence. Lookup is a linear
// scan so the labels only need structural equality: the subset construction
// uses sets of indices as labels and these are not hashable by contract.
//
#[derive(Debug)]
struct StateNumbering<T> {
    states: Vec<T>,
}

impl<T: Eq + Clone> StateNumbering<T> {
    fn new() -> Self {
        StateNumbering { states: Vec::new() }
    }

    fn len(&self) -> usize {
        self.states.len()
    }

    fn index_of(&self, s: &T) -> Option<usize> {
        self.states.iter().position(|x| x == s)
    }

    fn get_or_insert(&mut self, s: &T) -> usize {
        match self.index_of(s) {
            Some(i) => i,
            None => {
                self.states.push(s.clone());
                self.states.len() - 1
            }
        }
    }

    // resolve a label that must already be numbered
    fn resolve(&self, s: &T) -> Result<usize, Error> {
        self.index_of(s).ok_or(Error::UndefinedState)
    }
}

impl Automaton {
    ///
    /// Automaton that accepts only the empty sequence
    ///
    /// One state, no rules, the initial state is accepting.
    ///
    pub fn epsilon() -> Automaton {
        Automaton {
            num_states: 1,
            initial_state: 0,
            final_states: StateSet::singleton(0),
            rules: Vec::new(),
        }
    }

    ///
    /// Automaton that accepts the one-character sequence `c`
    ///
    pub fn symbol(c: char) -> Automaton {
        Automaton {
            num_states: 2,
            initial_state: 0,
            final_states: StateSet::singleton(1),
            rules: vec![Transition {
                source: 0,
                symbol: Symbol::Char(c),
                dest: 1,
            }],
        }
    }

    ///
    /// Construct an automaton from rules over arbitrary state labels
    ///
    /// The labels are normalized to dense indices assigned by first
    /// occurrence while scanning the rule endpoints. The start and accepting
    /// labels are then resolved against the numbering. If there are no rules
    /// at all, the automaton has exactly one state: the start state.
    ///
    /// The rules are kept as given; in particular they may contain epsilon
    /// and duplicate (source, symbol) pairs, in which case the result is
    /// nondeterministic and should go through [from_nfa](Self::from_nfa)
    /// before matching.
    ///
    /// # Errors
    ///
    /// Produces [Error::UndefinedState] if the start label or an accepting
    /// label is not an endpoint of any rule (and is not the lone start state
    /// of a rule-free automaton).
    ///
    pub fn from_transition_rules<T: Eq + Clone>(
        start: &T,
        accepting: &[T],
        rules: &[(T, Symbol, T)],
    ) -> Result<Automaton, Error> {
        let mut numbering = StateNumbering::new();
        let mut dense = Vec::with_capacity(rules.len());
        for (p, a, q) in rules {
            let source = numbering.get_or_insert(p);
            let dest = numbering.get_or_insert(q);
            dense.push(Transition {
                source,
                symbol: *a,
                dest,
            });
        }
        if numbering.len() == 0 {
            // no rules: the automaton still has its start state
            numbering.get_or_insert(start);
        }
        let initial_state = numbering.resolve(start)?;
        let final_states = accepting
            .iter()
            .map(|s| numbering.resolve(s))
            .collect::<Result<StateSet, Error>>()?;
        Ok(Automaton {
            num_states: numbering.len(),
            initial_state,
            final_states,
            rules: dense,
        })
    }

    ///
    /// Construct a deterministic automaton from a possibly nondeterministic one
    ///
    /// The rules may contain epsilon transitions and several rules per
    /// (state, symbol) pair. The result is built by the subset construction:
    /// it has no epsilon rule and at most one rule per (state, symbol).
    ///
    /// An accepting set that no reachable configuration intersects is legal;
    /// the resulting automaton then has no accepting state and never matches.
    ///
    /// # Errors
    ///
    /// Produces [Error::UndefinedState] if the renumbering of subset states
    /// fails. This cannot happen when `start` and the rule endpoints are
    /// well-formed state indices.
    ///
    pub fn from_nfa(
        start: usize,
        accepting: &StateSet,
        rules: &[Transition],
    ) -> Result<Automaton, Error> {
        determinize::determinize(start, accepting, rules)
    }

    /// Number of states
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Index of the initial state
    pub fn initial_state(&self) -> usize {
        self.initial_state
    }

    /// Set of accepting states
    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    /// Transition rules
    pub fn rules(&self) -> &[Transition] {
        &self.rules
    }

    /// Check whether state s is accepting
    pub fn is_final(&self, s: usize) -> bool {
        self.final_states.contains(s)
    }

    ///
    /// Successor of state s on character c
    ///
    /// Returns None if no rule from s is labeled with c. For a matcher this
    /// means the run is trapped: no continuation can reach an accepting
    /// state.
    ///
    pub fn next(&self, s: usize, c: char) -> Option<usize> {
        self.rules
            .iter()
            .find(|r| r.source == s && r.symbol == Symbol::Char(c))
            .map(|r| r.dest)
    }

    ///
    /// Check determinism
    ///
    /// True iff the automaton has no epsilon rule and at most one rule per
    /// (state, symbol) pair. Every automaton returned by
    /// [from_nfa](Self::from_nfa), [star](Self::star), [concat](Self::concat),
    /// or [union](Self::union) satisfies this.
    ///
    pub fn is_deterministic(&self) -> bool {
        self.rules.iter().enumerate().all(|(i, r)| {
            !r.symbol.is_epsilon()
                && self.rules[..i]
                    .iter()
                    .all(|p| p.source != r.source || p.symbol != r.symbol)
        })
    }

    ///
    /// Run the automaton over a sequence of input characters
    ///
    /// Returns true iff the full sequence is consumed without trapping and
    /// the run ends in an accepting state. A character with no outgoing rule
    /// from the current state traps the run: the remaining input is skipped
    /// and the result is false. Matching never fails; characters outside the
    /// automaton's alphabet simply trap.
    ///
    pub fn run<I: IntoIterator<Item = char>>(&self, input: I) -> bool {
        matcher::run(self, input)
    }

    /// Check whether a string is accepted
    pub fn accepts(&self, input: &str) -> bool {
        self.run(input.chars())
    }

    // Copy the rules with all state indices shifted by offset.
    // Used to make two automata's index spaces disjoint before combining.
    fn shift_rules_into(&self, offset: usize, rules: &mut Vec<Transition>) {
        for r in &self.rules {
            rules.push(Transition {
                source: r.source + offset,
                symbol: r.symbol,
                dest: r.dest + offset,
            });
        }
    }

    ///
    /// Kleene star
    ///
    /// The result accepts every concatenation of zero or more sequences
    /// accepted by `self`; in particular it accepts the empty sequence.
    ///
    /// Construction: a fresh accepting start state with an epsilon rule into
    /// `self`'s start, plus an epsilon rule from every accepting state back
    /// to `self`'s start. The resulting NFA is determinized.
    ///
    /// # Errors
    ///
    /// Propagates errors from [from_nfa](Self::from_nfa).
    ///
    pub fn star(&self) -> Result<Automaton, Error> {
        let fresh = self.num_states;
        let mut accepting = self.final_states.clone();
        accepting.insert(fresh);
        let mut rules = self.rules.clone();
        for f in accepting.iter() {
            rules.push(Transition {
                source: f,
                symbol: Symbol::Epsilon,
                dest: self.initial_state,
            });
        }
        Automaton::from_nfa(fresh, &accepting, &rules)
    }

    ///
    /// Concatenation
    ///
    /// The result accepts a sequence iff it splits into a prefix accepted by
    /// `self` and a suffix accepted by `other`.
    ///
    /// `other`'s states are renumbered by an offset equal to `self`'s state
    /// count so the two index spaces are disjoint. Every accepting state of
    /// `self` gets an epsilon rule to `other`'s start; the accepting states
    /// are `other`'s. The resulting NFA is determinized.
    ///
    /// # Errors
    ///
    /// Propagates errors from [from_nfa](Self::from_nfa).
    ///
    pub fn concat(&self, other: &Automaton) -> Result<Automaton, Error> {
        let offset = self.num_states;
        let other_start = other.initial_state + offset;
        let mut rules = self.rules.clone();
        other.shift_rules_into(offset, &mut rules);
        for f in self.final_states.iter() {
            rules.push(Transition {
                source: f,
                symbol: Symbol::Epsilon,
                dest: other_start,
            });
        }
        let accepting: StateSet = other.final_states.iter().map(|f| f + offset).collect();
        Automaton::from_nfa(self.initial_state, &accepting, &rules)
    }

    ///
    /// Union (alternation)
    ///
    /// The result accepts a sequence iff `self` accepts it or `other`
    /// accepts it.
    ///
    /// `other`'s states are renumbered as in [concat](Self::concat); a fresh
    /// start state gets epsilon rules to both starts; the accepting set is
    /// the union of both accepting sets. The resulting NFA is determinized.
    ///
    /// # Errors
    ///
    /// Propagates errors from [from_nfa](Self::from_nfa).
    ///
    pub fn union(&self, other: &Automaton) -> Result<Automaton, Error> {
        let offset = self.num_states;
        let fresh = offset + other.num_states;
        let mut rules = self.rules.clone();
        other.shift_rules_into(offset, &mut rules);
        rules.push(Transition {
            source: fresh,
            symbol: Symbol::Epsilon,
            dest: self.initial_state,
        });
        rules.push(Transition {
            source: fresh,
            symbol: Symbol::Epsilon,
            dest: other.initial_state + offset,
        });
        let mut accepting = self.final_states.clone();
        for f in other.final_states.iter() {
            accepting.insert(f + offset);
        }
        Automaton::from_nfa(fresh, &accepting, &rules)
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} states", self.num_states)?;
        writeln!(f, "initial state: s{}", self.initial_state)?;
        write!(f, "final states:")?;
        for s in self.final_states.iter() {
            write!(f, " s{}", s)?;
        }
        writeln!(f)?;
        writeln!(f, "transitions:")?;
        for r in &self.rules {
            writeln!(f, "  \u{03B4}(s{}, {}) = s{}", r.source, r.symbol, r.dest)?;
        }
        Ok(())
    }
}
