// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! StateSets: sets of automaton state indices
//!
//! A [StateSet] is stored as a sorted vector without duplicates, so two
//! sets are equal iff they contain the same indices. Structural equality is
//! what the subset construction needs: during determinization a DFA state
//! is a set of NFA state indices, and these sets are themselves used as
//! state labels before renumbering.
//!

use std::cmp::Ordering;
use std::fmt::Display;
use std::iter::FromIterator;

///
/// A set of state indices
///
// Invariant: elem is sorted in increasing order and has no duplicates.
//
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateSet {
    elem: Vec<usize>,
}

impl Display for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for x in &self.elem {
            write!(f, " {}", x)?;
        }
        write!(f, " }}")
    }
}

impl StateSet {
    ///
    /// Create an empty set
    ///
    pub fn new() -> Self {
        StateSet { elem: Vec::new() }
    }

    ///
    /// Create a set with a single element
    ///
    pub fn singleton(x: usize) -> Self {
        StateSet { elem: vec![x] }
    }

    ///
    /// Set cardinality
    ///
    pub fn card(&self) -> usize {
        self.elem.len()
    }

    ///
    /// Check whether the set is empty
    ///
    pub fn is_empty(&self) -> bool {
        self.elem.is_empty()
    }

    ///
    /// Check whether element x is in the set
    ///
    pub fn contains(&self, x: usize) -> bool {
        self.elem.binary_search(&x).is_ok()
    }

    ///
    /// Add element x to the set
    ///
    /// Return true if x was not already present
    ///
    pub fn insert(&mut self, x: usize) -> bool {
        match self.elem.binary_search(&x) {
            Ok(_) => false,
            Err(i) => {
                self.elem.insert(i, x);
                true
            }
        }
    }

    ///
    /// Check whether this set and other have a common element
    ///
    pub fn intersects(&self, other: &StateSet) -> bool {
        let mut i = 0;
        let mut j = 0;
        while i < self.elem.len() && j < other.elem.len() {
            match self.elem[i].cmp(&other.elem[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => return true,
            }
        }
        false
    }

    ///
    /// Iterator
    ///
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.elem.iter().copied()
    }
}

impl FromIterator<usize> for StateSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut elem: Vec<usize> = iter.into_iter().collect();
        elem.sort_unstable();
        elem.dedup();
        StateSet { elem }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test() {
        let set = &mut StateSet::new();
        assert!(set.is_empty());

        set.insert(10);
        set.insert(20);
        assert!(set.insert(40));
        assert!(!set.insert(40));

        println!("After adding 10, 20, 40: {}", set);
        assert!(set.contains(10));
        assert!(set.contains(20));
        assert!(set.contains(40));
        assert!(!set.contains(30));
        assert_eq!(set.card(), 3);

        for x in set.iter() {
            assert!(set.contains(x));
        }
    }

    #[test]
    fn test_structural_equality() {
        // order of insertion does not matter
        let a: StateSet = vec![3, 1, 2, 1].into_iter().collect();
        let mut b = StateSet::singleton(2);
        b.insert(1);
        b.insert(3);
        assert_eq!(a, b);
        assert_eq!(a.card(), 3);

        let c: StateSet = vec![1, 2].into_iter().collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_intersects() {
        let a: StateSet = vec![0, 2, 4, 6].into_iter().collect();
        let b: StateSet = vec![1, 3, 5].into_iter().collect();
        let c: StateSet = vec![5, 6].into_iter().collect();
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
        assert!(!a.intersects(&StateSet::new()));
    }
}
