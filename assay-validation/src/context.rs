// Field Context and rule application

use crate::compare;
use crate::value::{Kind, Value};
use assay_i18n::{Catalog, LocaleCode, default_catalog, humanize, keys, render};
use assay_log::trace;

/// Name given to a value validated without an explicit name.
pub(crate) fn positional_name(index: usize) -> String {
    format!("value_{}", index)
}

/// Extension point for rules defined outside this crate.
///
/// A rule receives the context and the per-call template override, if one
/// was set with [`Context::template`]. It reports its outcome through
/// [`Context::check`] or [`Context::invalidate`]. Plain closures are rules:
///
/// ```
/// use assay_validation::{Context, value};
///
/// let even = |ctx: &mut Context, template: Option<&str>| {
///     let passed = ctx.value_as::<i64>().is_some_and(|n| n % 2 == 0);
///     ctx.check(passed, "even", &[], template);
/// };
///
/// let ctx = value(3).template("{{title}} must be even").apply(even);
/// assert_eq!(ctx.messages(), vec!["Value 0 must be even"]);
/// ```
pub trait Rule {
    /// Evaluate the rule against the context.
    fn apply(self, ctx: &mut Context, template: Option<&str>);
}

impl<F> Rule for F
where
    F: FnOnce(&mut Context, Option<&str>),
{
    fn apply(self, ctx: &mut Context, template: Option<&str>) {
        self(ctx, template)
    }
}

/// A failed rule application, waiting for the field title.
#[derive(Debug, Clone)]
struct Failure {
    template: String,
    params: Vec<(String, String)>,
}

/// Validation state of one value.
///
/// Rules are chained by value: each call consumes the context and returns
/// it. Every failing rule adds one message; validity never recovers once a
/// rule failed.
///
/// The context resolves its locale catalog when created, so later changes
/// to the message store do not alter its messages.
///
/// ```
/// use assay_validation::named;
///
/// let ctx = named("", "first_name").not().blank().not().empty();
/// assert!(!ctx.valid());
/// assert_eq!(ctx.messages(), vec![
///     "First name can't be blank",
///     "First name can't be empty",
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    value: Value,
    name: Option<String>,
    title: Option<String>,
    catalog: Catalog,
    negated: bool,
    template: Option<String>,
    valid: bool,
    failures: Vec<Failure>,
}

impl Context {
    /// Start validating a value with the default locale.
    pub fn new(value: impl Into<Value>) -> Self {
        Self::with_catalog(value, default_catalog())
    }

    /// Start validating a value with a specific catalog.
    pub fn with_catalog(value: impl Into<Value>, catalog: Catalog) -> Self {
        Self {
            value: value.into(),
            name: None,
            title: None,
            catalog,
            negated: false,
            template: None,
            valid: true,
            failures: Vec::new(),
        }
    }

    /// Set the field name used as key in the validation result.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the display title used in messages instead of the humanized name.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The value under validation.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The value converted to a concrete type, following references.
    pub fn value_as<T>(&self) -> Option<T>
    where
        T: for<'a> TryFrom<&'a Value>,
    {
        T::try_from(&self.value).ok()
    }

    /// Explicit field name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Display title: explicit title, humanized name, or `Value 0`.
    pub fn title(&self) -> String {
        self.title_at(0)
    }

    /// Locale the messages render in.
    pub fn locale(&self) -> &LocaleCode {
        self.catalog.code()
    }

    /// Whether the next rule runs negated.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// False once any rule failed.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Rendered failure messages in application order.
    pub fn messages(&self) -> Vec<String> {
        let name = self.name_at(0);
        self.render(&name, &self.title_at(0))
    }

    pub(crate) fn name_at(&self, index: usize) -> String {
        self.name.clone().unwrap_or_else(|| positional_name(index))
    }

    pub(crate) fn title_at(&self, index: usize) -> String {
        match (&self.title, &self.name) {
            (Some(title), _) => title.clone(),
            (None, Some(name)) => humanize(name),
            (None, None) => humanize(&positional_name(index)),
        }
    }

    pub(crate) fn render(&self, name: &str, title: &str) -> Vec<String> {
        self.failures
            .iter()
            .map(|failure| {
                let mut args: Vec<(&str, &str)> = vec![("title", title), ("name", name)];
                args.extend(failure.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                render(&failure.template, &args)
            })
            .collect()
    }

    // ========================================================================
    // Rule application primitives
    // ========================================================================

    /// Negate the next rule. Calling it twice cancels out.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Replace the catalog template for the next rule only.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Apply a rule. Negation and the template override are consumed.
    pub fn apply<R: Rule>(mut self, rule: R) -> Self {
        let template = self.template.take();
        rule.apply(&mut self, template.as_deref());
        self.negated = false;
        self
    }

    /// Record the outcome of a predicate, honoring negation.
    ///
    /// Returns the effective outcome. On failure the message key is
    /// prefixed with `not_` when the rule ran negated.
    pub fn check(
        &mut self,
        passed: bool,
        key: &str,
        params: &[(&str, String)],
        template: Option<&str>,
    ) -> bool {
        let effective = passed != self.negated;
        if !effective {
            let key = if self.negated && !key.trim().is_empty() {
                format!("{}{}", keys::NOT_PREFIX, key)
            } else {
                key.to_string()
            };
            self.invalidate(&key, params, template);
        }
        effective
    }

    /// Mark the field invalid with the message for `key`, or `template`
    /// when given. Negation is not consulted.
    pub fn invalidate(&mut self, key: &str, params: &[(&str, String)], template: Option<&str>) {
        trace!(
            target: "assay::validation",
            "Rule {:?} failed for {} ({})",
            key,
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.value.type_name()
        );
        self.failures.push(Failure {
            template: self.catalog.resolve(key, template),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
        self.valid = false;
    }

    fn compare_rule(
        self,
        target: impl Into<Value>,
        key: &'static str,
        predicate: fn(&Value, &Value) -> bool,
    ) -> Self {
        let target = target.into();
        self.apply(move |ctx: &mut Context, template: Option<&str>| {
            let passed = predicate(ctx.value(), &target);
            ctx.check(passed, key, &[("value", target.to_string())], template);
        })
    }

    fn predicate_rule(self, key: &'static str, predicate: impl FnOnce(&Value) -> bool) -> Self {
        self.apply(move |ctx: &mut Context, template: Option<&str>| {
            let passed = predicate(ctx.value());
            ctx.check(passed, key, &[], template);
        })
    }

    // ========================================================================
    // Built-in rules
    // ========================================================================

    /// Equal to `target` (see [`compare::equal`]).
    pub fn equal_to(self, target: impl Into<Value>) -> Self {
        self.compare_rule(target, keys::EQUAL_TO, compare::equal)
    }

    /// Strictly greater than `target`.
    pub fn greater_than(self, target: impl Into<Value>) -> Self {
        self.compare_rule(target, keys::GREATER_THAN, compare::greater)
    }

    /// Greater than or equal to `target`.
    pub fn greater_or_equal_to(self, target: impl Into<Value>) -> Self {
        self.compare_rule(target, keys::GREATER_OR_EQUAL_TO, compare::greater_or_equal)
    }

    /// Strictly less than `target`.
    pub fn less_than(self, target: impl Into<Value>) -> Self {
        self.compare_rule(target, keys::LESS_THAN, compare::less)
    }

    /// Less than or equal to `target`.
    pub fn less_or_equal_to(self, target: impl Into<Value>) -> Self {
        self.compare_rule(target, keys::LESS_OR_EQUAL_TO, compare::less_or_equal)
    }

    /// Within `min..=max`.
    pub fn between(self, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        let (min, max) = (min.into(), max.into());
        self.apply(move |ctx: &mut Context, template: Option<&str>| {
            let passed = compare::greater_or_equal(ctx.value(), &min)
                && compare::less_or_equal(ctx.value(), &max);
            let params = [("min", min.to_string()), ("max", max.to_string())];
            ctx.check(passed, keys::BETWEEN, &params, template);
        })
    }

    /// Same representation and value, or same reference (see
    /// [`compare::identical`]).
    pub fn identical_to(self, target: impl Into<Value>) -> Self {
        self.compare_rule(target, keys::IDENTICAL_TO, compare::identical)
    }

    /// Equal to one of `candidates`.
    pub fn in_slice<I, T>(self, candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let candidates: Vec<Value> = candidates.into_iter().map(Into::into).collect();
        self.predicate_rule(keys::IN, move |value| {
            candidates.iter().any(|candidate| compare::equal(value, candidate))
        })
    }

    /// Zero value of its category (see [`compare::is_empty`]).
    pub fn empty(self) -> Self {
        self.predicate_rule(keys::EMPTY, compare::is_empty)
    }

    /// Nil or whitespace-only text.
    pub fn blank(self) -> Self {
        self.predicate_rule(keys::BLANK, compare::is_blank)
    }

    /// Numeric zero.
    pub fn zero(self) -> Self {
        self.predicate_rule(keys::ZERO, compare::is_zero)
    }

    /// Absent value.
    pub fn nil(self) -> Self {
        self.predicate_rule(keys::NIL, |value| value.resolved().kind() == Kind::Nil)
    }

    /// Boolean `true`.
    pub fn is_true(self) -> Self {
        self.predicate_rule(keys::TRUE, |value| matches!(value.resolved(), Value::Bool(true)))
    }

    /// Boolean `false`.
    pub fn is_false(self) -> Self {
        self.predicate_rule(keys::FALSE, |value| matches!(value.resolved(), Value::Bool(false)))
    }

    /// Arbitrary predicate over the value.
    pub fn passing(self, predicate: impl FnOnce(&Value) -> bool) -> Self {
        self.predicate_rule(keys::PASSING, predicate)
    }
}
