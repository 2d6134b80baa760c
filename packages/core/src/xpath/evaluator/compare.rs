//! Comparison semantics and scalar conversions

use super::{Evaluator, PathValue};
use crate::xpath::ast::ComparisonOp;

/// Scalar operand of a comparison
#[derive(Debug, Clone)]
enum Atom {
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl Atom {
    fn number(&self) -> f64 {
        match self {
            Atom::Text(text) => text_to_number(text),
            Atom::Number(number) => *number,
            Atom::Boolean(flag) => f64::from(u8::from(*flag)),
        }
    }

    fn boolean(&self) -> bool {
        match self {
            Atom::Text(text) => !text.is_empty(),
            Atom::Number(number) => *number != 0.0 && !number.is_nan(),
            Atom::Boolean(flag) => *flag,
        }
    }
}

impl Evaluator<'_> {
    /// Compare two values
    ///
    /// Node-like operands compare existentially over their members' string
    /// values. Two strings that both parse as numbers compare numerically.
    pub(crate) fn compare(&self, left: &PathValue, op: ComparisonOp, right: &PathValue) -> bool {
        match (self.member_texts(left), self.member_texts(right)) {
            (Some(lefts), Some(rights)) => lefts.iter().any(|l| {
                rights
                    .iter()
                    .any(|r| compare_atoms(&Atom::Text(l.clone()), op, &Atom::Text(r.clone())))
            }),
            (Some(lefts), None) => match right {
                PathValue::Boolean(flag) => {
                    compare_atoms(&Atom::Boolean(!lefts.is_empty()), op, &Atom::Boolean(*flag))
                }
                _ => {
                    let right = self.atom(right);
                    lefts
                        .into_iter()
                        .any(|l| compare_atoms(&Atom::Text(l), op, &right))
                }
            },
            (None, Some(rights)) => match left {
                PathValue::Boolean(flag) => {
                    compare_atoms(&Atom::Boolean(*flag), op, &Atom::Boolean(!rights.is_empty()))
                }
                _ => {
                    let left = self.atom(left);
                    rights
                        .into_iter()
                        .any(|r| compare_atoms(&left, op, &Atom::Text(r)))
                }
            },
            (None, None) => compare_atoms(&self.atom(left), op, &self.atom(right)),
        }
    }

    fn atom(&self, value: &PathValue) -> Atom {
        match value {
            PathValue::Number(number) => Atom::Number(*number),
            PathValue::Boolean(flag) => Atom::Boolean(*flag),
            other => Atom::Text(self.to_text(other)),
        }
    }
}

fn compare_atoms(left: &Atom, op: ComparisonOp, right: &Atom) -> bool {
    match op {
        ComparisonOp::Equal | ComparisonOp::NotEqual => {
            let equal = match (left, right) {
                (Atom::Boolean(_), _) | (_, Atom::Boolean(_)) => left.boolean() == right.boolean(),
                (Atom::Number(_), _) | (_, Atom::Number(_)) => {
                    numbers_equal(left.number(), right.number())
                }
                (Atom::Text(l), Atom::Text(r)) => {
                    let (ln, rn) = (text_to_number(l), text_to_number(r));
                    if ln.is_nan() || rn.is_nan() {
                        l == r
                    } else {
                        numbers_equal(ln, rn)
                    }
                }
            };
            if op == ComparisonOp::Equal {
                equal
            } else {
                !equal
            }
        }
        ComparisonOp::Less => left.number() < right.number(),
        ComparisonOp::LessEq => left.number() <= right.number(),
        ComparisonOp::Greater => left.number() > right.number(),
        ComparisonOp::GreaterEq => left.number() >= right.number(),
    }
}

#[allow(clippy::float_cmp)]
fn numbers_equal(left: f64, right: f64) -> bool {
    left == right
}

/// Parse text the way `number()` does: trimmed decimal, otherwise NaN
#[must_use]
pub(crate) fn text_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    let well_formed = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !well_formed {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a number the way `string()` does
#[must_use]
pub(crate) fn number_to_text(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number.is_infinite() {
        let sign = if number > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{number:.0}")
    } else {
        number.to_string()
    }
}
