// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Regular expression compiler
//!
//! [compile] turns a pattern string into a deterministic automaton in a
//! single left-to-right scan, without building a syntax tree. The scan
//! maintains an operator stack and an automaton value stack; whenever two
//! value-producing tokens are adjacent it synthesizes an implicit
//! concatenation operator.
//!
//! Pattern syntax: a literal character stands for itself; `(` and `)`
//! group; `|` is alternation; `*` is the postfix Kleene star; adjacency is
//! concatenation. Precedence, highest to lowest: `*`, concatenation, `|`.
//! The empty pattern and the empty group `()` both denote the language
//! containing only the empty sequence.
//!
//! Every intermediate value on the stack is already a deterministic
//! automaton, so the compiler's result needs no separate determinization
//! pass.
//!

use log::debug;

use crate::automata::Automaton;
use crate::errors::Error;

//
// Operators on the operator stack. LeftParenthesis is a barrier: it is
// never evaluated, only popped by its matching ')'.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Star,
    Concat,
    Union,
    LeftParenthesis,
}

impl Op {
    fn token(self) -> char {
        match self {
            Op::Star => '*',
            Op::Concat => '+',
            Op::Union => '|',
            Op::LeftParenthesis => '(',
        }
    }
}

// pop one operand for op
fn pop_operand(values: &mut Vec<Automaton>, op: Op) -> Result<Automaton, Error> {
    values.pop().ok_or_else(|| Error::MissingOperand(op.token()))
}

// apply an operator to the top of the value stack
fn eval(op: Op, values: &mut Vec<Automaton>) -> Result<(), Error> {
    match op {
        Op::Star => {
            let arg = pop_operand(values, op)?;
            values.push(arg.star()?);
        }
        Op::Concat => {
            let rhs = pop_operand(values, op)?;
            let lhs = pop_operand(values, op)?;
            values.push(lhs.concat(&rhs)?);
        }
        Op::Union => {
            let rhs = pop_operand(values, op)?;
            let lhs = pop_operand(values, op)?;
            values.push(lhs.union(&rhs)?);
        }
        Op::LeftParenthesis => return Err(Error::UndefinedOperator(op.token())),
    }
    Ok(())
}

// Synthesize the implicit concatenation operator. Pending stars bind
// tighter than concatenation so they are applied first.
fn push_concat(ops: &mut Vec<Op>, values: &mut Vec<Automaton>) -> Result<(), Error> {
    while ops.last() == Some(&Op::Star) {
        ops.pop();
        eval(Op::Star, values)?;
    }
    ops.push(Op::Concat);
    Ok(())
}

///
/// Compile a pattern into a deterministic automaton
///
/// # Errors
///
/// - [Error::UnmatchedRightParenthesis] for a `)` with no matching `(`
/// - [Error::UnmatchedLeftParenthesis] for a `(` with no matching `)`
/// - [Error::MissingOperand] for an operator with too few operands,
///   e.g. `compile("|a")`
/// - [Error::MalformedPattern] if the scan does not reduce to exactly one
///   automaton
///
pub fn compile(pattern: &str) -> Result<Automaton, Error> {
    if pattern.is_empty() {
        return Ok(Automaton::epsilon());
    }

    let mut ops: Vec<Op> = Vec::new();
    let mut values: Vec<Automaton> = Vec::new();
    // true when the previous token produced a value (a literal or a ')'),
    // so the next value-producing token needs an implicit concatenation
    let mut after_value = false;

    for c in pattern.chars() {
        match c {
            '(' => {
                if after_value {
                    push_concat(&mut ops, &mut values)?;
                }
                ops.push(Op::LeftParenthesis);
                after_value = false;
            }
            ')' => {
                if !after_value && ops.last() == Some(&Op::LeftParenthesis) {
                    // empty group: '()' denotes the empty sequence
                    values.push(Automaton::epsilon());
                }
                loop {
                    match ops.pop() {
                        Some(Op::LeftParenthesis) => break,
                        Some(op) => eval(op, &mut values)?,
                        None => return Err(Error::UnmatchedRightParenthesis),
                    }
                }
                after_value = true;
            }
            '|' => {
                // resolve pending higher-precedence operators first
                while let Some(&op) = ops.last() {
                    if op != Op::Star && op != Op::Concat {
                        break;
                    }
                    ops.pop();
                    eval(op, &mut values)?;
                }
                ops.push(Op::Union);
                after_value = false;
            }
            '*' => {
                // postfix: binds to the most recently completed value
                ops.push(Op::Star);
            }
            _ => {
                if after_value {
                    push_concat(&mut ops, &mut values)?;
                }
                values.push(Automaton::symbol(c));
                after_value = true;
            }
        }
    }

    while let Some(op) = ops.pop() {
        if op == Op::LeftParenthesis {
            return Err(Error::UnmatchedLeftParenthesis);
        }
        eval(op, &mut values)?;
    }

    match (values.pop(), values.is_empty()) {
        (Some(result), true) => {
            debug!(
                "compiled pattern {:?}: {} states, {} rules",
                pattern,
                result.num_states(),
                result.rules().len()
            );
            Ok(result)
        }
        _ => Err(Error::MalformedPattern),
    }
}

///
/// Compile a pattern and match it against an input string
///
/// Convenience for [compile] followed by [Automaton::accepts].
///
/// # Errors
///
/// Propagates the errors of [compile]. Matching itself never fails.
///
pub fn matches(pattern: &str, input: &str) -> Result<bool, Error> {
    let dfa = compile(pattern)?;
    Ok(dfa.accepts(input))
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn check(pattern: &str, cases: &[(&str, bool)]) {
        let dfa = compile(pattern).unwrap();
        assert!(dfa.is_deterministic());
        for &(input, expected) in cases {
            assert_eq!(
                dfa.accepts(input),
                expected,
                "pattern {:?} on input {:?}",
                pattern,
                input
            );
        }
    }

    #[test]
    fn test_literals_and_star() {
        check(
            "b(a|b)*b",
            &[
                ("", false),
                ("b", false),
                ("bb", true),
                ("bab", true),
                ("ba", false),
                ("ab", false),
                ("bababbaab", true),
            ],
        );
    }

    #[test]
    fn test_empty_pattern() {
        check("", &[("", true), ("a", false)]);
        check("()", &[("", true), ("a", false)]);
    }

    #[test]
    fn test_optional_via_union_with_empty_group() {
        // emulates 'abc?' at the pattern level ('(|abc)' is not legal)
        check(
            "(()|abc)",
            &[("", true), ("abc", true), ("abcabc", false), ("ab", false)],
        );
    }

    #[test]
    fn test_groups() {
        // single-atom and adjacent groups
        check("(b)", &[("b", true), ("", false), ("bb", false)]);
        check("a(b)", &[("ab", true), ("a", false), ("b", false)]);
        check("(a)(b)", &[("ab", true), ("a", false), ("ba", false)]);
        check("()a", &[("a", true), ("", false)]);
        check("(ab)c", &[("abc", true), ("ab", false)]);
    }

    #[test]
    fn test_precedence() {
        // star binds tighter than concatenation, including before a group
        check(
            "a*(b)",
            &[("b", true), ("ab", true), ("aaab", true), ("abab", false)],
        );
        check(
            "a*b",
            &[("b", true), ("ab", true), ("aaab", true), ("abab", false)],
        );
        // concatenation binds tighter than alternation
        check(
            "ab|ba",
            &[
                ("ab", true),
                ("ba", true),
                ("", false),
                ("aa", false),
                ("abba", false),
            ],
        );
    }

    #[test]
    fn test_star_matches_empty() {
        check("(ab)*", &[("", true), ("ab", true), ("ababab", true), ("aba", false)]);
        // star of star
        check("(a*)*", &[("", true), ("a", true), ("aaaa", true), ("b", false)]);
    }

    #[test]
    fn test_divisible_by_three() {
        // binary representations of multiples of 3
        let div3 = compile("(1(01*0)*1|0)*").unwrap();
        assert!(div3.is_deterministic());
        for i in 0..100u32 {
            let bits = format!("{:b}", i);
            assert_eq!(
                div3.accepts(&bits),
                i % 3 == 0,
                "binary of {} is {:?}",
                i,
                bits
            );
        }
    }

    #[test]
    fn test_matches() {
        assert_eq!(matches("b(a|b)*b", "bab"), Ok(true));
        assert_eq!(matches("b(a|b)*b", "ba"), Ok(false));
        assert_eq!(matches("", ""), Ok(true));
        assert_eq!(matches("(", ""), Err(Error::UnmatchedLeftParenthesis));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(compile("(ab").unwrap_err(), Error::UnmatchedLeftParenthesis);
        assert_eq!(compile("((a)").unwrap_err(), Error::UnmatchedLeftParenthesis);
        assert_eq!(compile("ab)").unwrap_err(), Error::UnmatchedRightParenthesis);
        assert_eq!(compile(")").unwrap_err(), Error::UnmatchedRightParenthesis);
        assert_eq!(compile("|a").unwrap_err(), Error::MissingOperand('|'));
        assert_eq!(compile("a|").unwrap_err(), Error::MissingOperand('|'));
        assert_eq!(compile("*").unwrap_err(), Error::MissingOperand('*'));
        assert_eq!(compile("(|abc)").unwrap_err(), Error::MissingOperand('|'));
    }

    #[test]
    fn test_compiled_equals_composed() {
        // compile("ab|ba") agrees with the algebra composition
        let compiled = compile("ab|ba").unwrap();
        let composed = compile("a")
            .unwrap()
            .concat(&compile("b").unwrap())
            .unwrap()
            .union(&compile("b").unwrap().concat(&compile("a").unwrap()).unwrap())
            .unwrap();
        for s in &["", "a", "ab", "ba", "aa", "bb", "abba", "abab"] {
            assert_eq!(compiled.accepts(s), composed.accepts(s), "input {:?}", s);
        }
    }
}
