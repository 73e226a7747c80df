//! Comparator
//!
//! Equality, ordering and emptiness across dynamically typed values. Each
//! operand is classified once ([`Kind`]) and the pair of kinds selects the
//! comparison:
//!
//! | Pair | Equality | Ordering |
//! |---|---|---|
//! | number / number | numeric | numeric |
//! | text / text | numeric if both parse, else code point | same |
//! | text / number | numeric if the text parses, else unequal | numeric if the text parses, else none |
//! | anything else | structural | none |
//!
//! References are followed before classification. Only [`identical`]
//! looks at reference identity.

use crate::value::{Kind, Number, Value};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap());

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

/// Parse text with the strict whole-string numeric grammar.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Surrounding whitespace, `inf`, `NaN`, digit
/// separators and values outside the `f64` range are rejected.
///
/// ```
/// use assay_validation::compare::parse_number;
/// use assay_validation::Number;
///
/// assert_eq!(parse_number("-12"), Some(Number::Int(-12)));
/// assert_eq!(parse_number("1.5e2"), Some(Number::Float(150.0)));
/// assert_eq!(parse_number(" 1"), None);
/// assert_eq!(parse_number("1_000"), None);
/// assert_eq!(parse_number("1e400"), None);
/// ```
pub fn parse_number(text: &str) -> Option<Number> {
    if !NUMBER_REGEX.is_match(text) {
        return None;
    }
    if INTEGER_REGEX.is_match(text) {
        if let Ok(n) = text.parse::<i128>() {
            return Some(Number::Int(n));
        }
    }
    text.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Number::Float)
}

fn compare_numbers(a: Number, b: Number) -> Option<Ordering> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => Some(x.cmp(&y)),
        (Number::BigUint(x), Number::BigUint(y)) => Some(x.cmp(&y)),
        (Number::BigUint(_), Number::Int(_)) => Some(Ordering::Greater),
        (Number::Int(_), Number::BigUint(_)) => Some(Ordering::Less),
        (Number::Int(x), Number::Float(y)) => compare_int_float(x, y),
        (Number::Float(x), Number::Int(y)) => compare_int_float(y, x).map(Ordering::reverse),
        (Number::BigUint(x), Number::Float(y)) => compare_big_float(x, y),
        (Number::Float(x), Number::BigUint(y)) => compare_big_float(y, x).map(Ordering::reverse),
        (Number::Float(x), Number::Float(y)) => x.partial_cmp(&y),
    }
}

// Exact for every float: values outside the i128 range order by sign, the
// rest compare against their floor.
fn compare_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    // i128::MIN as f64 is exactly -2^127
    let bound = -(i128::MIN as f64);
    if float >= bound {
        return Some(Ordering::Less);
    }
    if float < -bound {
        return Some(Ordering::Greater);
    }
    Some(against_floor(int.cmp(&(float.floor() as i128)), float))
}

// Same for u128, whose range is `0..2^128`.
fn compare_big_float(big: u128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    // u128::MAX as f64 rounds up to exactly 2^128
    if float >= u128::MAX as f64 {
        return Some(Ordering::Less);
    }
    if float < 0.0 {
        return Some(Ordering::Greater);
    }
    Some(against_floor(big.cmp(&(float.floor() as u128)), float))
}

// An integer equal to the floor of a fractional float is below it.
fn against_floor(ordering: Ordering, float: f64) -> Ordering {
    match ordering {
        Ordering::Equal if float.fract() != 0.0 => Ordering::Less,
        other => other,
    }
}

fn as_number(value: &Value) -> Option<Number> {
    match value {
        Value::Text(text) => parse_number(text),
        other => other.as_number(),
    }
}

/// Ordering of two values, `None` when the pair is not orderable.
///
/// ```
/// use assay_validation::compare::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare(&"2".into(), &"11".into()), Some(Ordering::Less));
/// assert_eq!(compare(&"b".into(), &"a".into()), Some(Ordering::Greater));
/// assert_eq!(compare(&"x".into(), &1.into()), None);
/// assert_eq!(compare(&vec![1].into(), &vec![2].into()), None);
/// ```
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    let (a, b) = (a.resolved(), b.resolved());

    match (a.kind(), b.kind()) {
        (Kind::Number, Kind::Number) | (Kind::Text, Kind::Number) | (Kind::Number, Kind::Text) => {
            compare_numbers(as_number(a)?, as_number(b)?)
        }
        (Kind::Text, Kind::Text) => {
            let (x, y) = (a.as_text()?, b.as_text()?);
            match (parse_number(x), parse_number(y)) {
                (Some(x), Some(y)) => compare_numbers(x, y),
                _ => Some(x.cmp(y)),
            }
        }
        _ => None,
    }
}

/// Value equality, following references.
///
/// ```
/// use assay_validation::{Value, compare::equal};
///
/// assert!(equal(&10.into(), &10.0.into()));
/// assert!(equal(&1i8.into(), &1i64.into()));
/// assert!(equal(&"10".into(), &10.into()));
/// assert!(equal(&Value::reference(5), &5.into()));
/// assert!(!equal(&"ten".into(), &10.into()));
/// ```
pub fn equal(a: &Value, b: &Value) -> bool {
    let (a, b) = (a.resolved(), b.resolved());

    match (a.kind(), b.kind()) {
        (Kind::Number, Kind::Number) | (Kind::Text, Kind::Number) | (Kind::Number, Kind::Text) => {
            match (as_number(a), as_number(b)) {
                (Some(x), Some(y)) => compare_numbers(x, y) == Some(Ordering::Equal),
                _ => false,
            }
        }
        (Kind::Text, Kind::Text) => compare(a, b) == Some(Ordering::Equal),
        _ => structural_equal(a, b),
    }
}

fn structural_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Seq(x), Value::Seq(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| equal(x, y))
        }
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, value)| y.get(key).is_some_and(|other| equal(value, other)))
        }
        (
            Value::Record { name: n1, fields: f1 },
            Value::Record { name: n2, fields: f2 },
        ) => {
            n1 == n2
                && f1.len() == f2.len()
                && f1
                    .iter()
                    .zip(f2)
                    .all(|((k1, v1), (k2, v2))| k1 == k2 && equal(v1, v2))
        }
        _ => false,
    }
}

/// `a < b`; false for pairs that are not orderable.
pub fn less(a: &Value, b: &Value) -> bool {
    compare(a, b) == Some(Ordering::Less)
}

/// `a <= b`; false for pairs that are not orderable.
pub fn less_or_equal(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Less | Ordering::Equal))
}

/// `a > b`; false for pairs that are not orderable.
pub fn greater(a: &Value, b: &Value) -> bool {
    compare(a, b) == Some(Ordering::Greater)
}

/// `a >= b`; false for pairs that are not orderable.
pub fn greater_or_equal(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Greater | Ordering::Equal))
}

/// Identity: same concrete representation and value, or references to the
/// same storage. Aggregates outside a shared reference are never identical.
///
/// ```
/// use assay_validation::{Value, compare::identical};
///
/// let shared = Value::reference(vec![1, 2]);
/// assert!(identical(&shared, &shared.clone()));
/// assert!(!identical(&shared, &Value::reference(vec![1, 2])));
/// assert!(!identical(&1i32.into(), &1i64.into()));
/// assert!(identical(&"a".into(), &"a".into()));
/// ```
pub fn identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Ref(_), _) | (_, Value::Ref(_)) => a.same_storage(b),
        _ if std::mem::discriminant(a) != std::mem::discriminant(b) => false,
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Text(x), Value::Text(y)) => x == y,
        _ if a.kind() == Kind::Number => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => compare_numbers(x, y) == Some(Ordering::Equal),
            _ => false,
        },
        _ => false,
    }
}

/// Zero value of its category: nil, `false`, `0`, empty text, empty
/// sequence or map, or a record whose fields are all empty. References are
/// followed.
pub fn is_empty(value: &Value) -> bool {
    match value.resolved() {
        Value::Nil => true,
        Value::Bool(b) => !b,
        Value::Text(s) => s.is_empty(),
        Value::Seq(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        Value::Record { fields, .. } => fields.iter().all(|(_, v)| is_empty(v)),
        other => is_zero(other),
    }
}

/// Numeric zero, following references.
pub fn is_zero(value: &Value) -> bool {
    match value.resolved().as_number() {
        Some(Number::Int(n)) => n == 0,
        Some(Number::BigUint(_)) => false,
        Some(Number::Float(n)) => n == 0.0,
        None => false,
    }
}

/// Nil, or text that is empty once surrounding whitespace is removed.
/// References are followed.
pub fn is_blank(value: &Value) -> bool {
    match value.resolved() {
        Value::Nil => true,
        Value::Text(s) => s.trim().is_empty(),
        _ => false,
    }
}
