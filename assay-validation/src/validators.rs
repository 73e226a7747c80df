// Per-type validators built on the `Rule` extension point

use crate::value::{Kind, Value};
use crate::{Context, Rule};
use assay_i18n::keys;
use regex::Regex;

/// Text matching a regular expression.
///
/// ```
/// use assay_validation::{MatchingTo, value};
/// use regex::Regex;
///
/// let zip = Regex::new(r"^\d{5}$").unwrap();
/// assert!(value("12345").apply(MatchingTo(zip.clone())).valid());
/// assert!(!value("1234").apply(MatchingTo(zip)).valid());
/// ```
#[derive(Debug, Clone)]
pub struct MatchingTo(pub Regex);

impl Rule for MatchingTo {
    fn apply(self, ctx: &mut Context, template: Option<&str>) {
        let passed = ctx
            .value()
            .resolved()
            .as_text()
            .is_some_and(|text| self.0.is_match(text));
        let params = [("pattern", self.0.as_str().to_string())];
        ctx.check(passed, keys::MATCHING_TO, &params, template);
    }
}

/// Exact length: characters for text, elements for aggregates.
#[derive(Debug, Clone, Copy)]
pub struct Length(pub usize);

impl Rule for Length {
    fn apply(self, ctx: &mut Context, template: Option<&str>) {
        let passed = ctx.value().len() == Some(self.0);
        ctx.check(passed, keys::LENGTH, &[("length", self.0.to_string())], template);
    }
}

/// Length within `min..=max`.
#[derive(Debug, Clone, Copy)]
pub struct LengthBetween {
    pub min: usize,
    pub max: usize,
}

impl Rule for LengthBetween {
    fn apply(self, ctx: &mut Context, template: Option<&str>) {
        let passed = ctx
            .value()
            .len()
            .is_some_and(|len| (self.min..=self.max).contains(&len));
        let params = [("min", self.min.to_string()), ("max", self.max.to_string())];
        ctx.check(passed, keys::LENGTH_BETWEEN, &params, template);
    }
}

/// Value is a number of any width.
#[derive(Debug, Clone, Copy)]
pub struct IsNumber;

impl Rule for IsNumber {
    fn apply(self, ctx: &mut Context, template: Option<&str>) {
        let passed = ctx.value().resolved().kind() == Kind::Number;
        ctx.check(passed, keys::A_NUMBER, &[], template);
    }
}

/// Value is text.
#[derive(Debug, Clone, Copy)]
pub struct IsText;

impl Rule for IsText {
    fn apply(self, ctx: &mut Context, template: Option<&str>) {
        let passed = matches!(ctx.value().resolved(), Value::Text(_));
        ctx.check(passed, keys::A_TEXT, &[], template);
    }
}
