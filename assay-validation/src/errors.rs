// Validation results

use crate::Context;
use assay_i18n::humanize;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Failure messages of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name, the key in the result
    pub name: String,

    /// Display title used in the messages
    pub title: String,

    /// Rendered messages in the order the rules failed
    pub messages: Vec<String>,
}

impl FieldError {
    /// Create an empty error entry.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            messages: Vec::new(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.messages.join("; "))
    }
}

/// Result of validating one or more values.
///
/// Contexts are folded in as they are added, so [`valid`](Self::valid) and
/// [`errors`](Self::errors) can be read at any point. Values added without
/// a name are keyed by position: `value_0`, `value_1`, ...
///
/// ```
/// use assay_validation::{is, named, value};
///
/// let result = is(value(" ").not().blank())
///     .is(named(17, "age").greater_or_equal_to(18))
///     .is(named("ok", "status").not().blank());
///
/// assert!(!result.valid());
/// assert_eq!(result.errors().len(), 2);
/// assert_eq!(result.error("value_0").unwrap().messages, vec!["Value 0 can't be blank"]);
/// assert!(result.error("status").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Validation {
    valid: bool,
    fields: usize,
    errors: Vec<FieldError>,
    index: HashMap<String, usize>,
}

impl Validation {
    /// Create an empty, valid result.
    pub fn new() -> Self {
        Self {
            valid: true,
            fields: 0,
            errors: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a validated value.
    pub fn is(mut self, ctx: Context) -> Self {
        self.push(ctx);
        self
    }

    /// Add a validated value in place.
    pub fn push(&mut self, ctx: Context) {
        let position = self.fields;
        self.fields += 1;

        if ctx.valid() {
            return;
        }
        self.valid = false;

        let name = ctx.name_at(position);
        let title = ctx.title_at(position);
        let messages = ctx.render(&name, &title);
        self.entry(name, title).messages.extend(messages);
    }

    /// Add an error that no rule produced, e.g. from another layer.
    pub fn add_error(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.push_error(name, message);
        self
    }

    /// Add an error in place.
    pub fn push_error(&mut self, name: impl Into<String>, message: impl Into<String>) {
        let name = name.into();
        let title = humanize(&name);
        self.valid = false;
        self.entry(name, title).messages.push(message.into());
    }

    /// Fold another result into this one.
    pub fn merge(mut self, other: Validation) -> Self {
        self.valid &= other.valid;
        self.fields += other.fields;
        for error in other.errors {
            self.entry(error.name, error.title)
                .messages
                .extend(error.messages);
        }
        self
    }

    fn entry(&mut self, name: String, title: String) -> &mut FieldError {
        let position = match self.index.get(&name) {
            Some(&position) => position,
            None => {
                self.index.insert(name.clone(), self.errors.len());
                self.errors.push(FieldError::new(name, title));
                self.errors.len() - 1
            }
        };
        &mut self.errors[position]
    }

    /// True when every added value passed and no error was injected.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Failing fields in the order they were first added.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Errors of one field.
    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.index.get(name).map(|&position| &self.errors[position])
    }

    /// Errors keyed by field name.
    pub fn error_map(&self) -> HashMap<&str, &FieldError> {
        self.errors
            .iter()
            .map(|error| (error.name.as_str(), error))
            .collect()
    }

    /// `Ok(())` when valid, the result itself otherwise.
    pub fn into_result(self) -> Result<(), Validation> {
        if self.valid { Ok(()) } else { Err(self) }
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.valid,
            "errors": self.errors,
        })
    }
}

impl Default for Validation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            for message in &error.messages {
                writeln!(f, "{}: {}", error.name, message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Validation {}

impl From<Context> for Validation {
    fn from(ctx: Context) -> Self {
        Validation::new().is(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store_guard;
    use assay_i18n::catalog;

    fn en(value: impl Into<crate::Value>) -> Context {
        Context::with_catalog(value, catalog("en").unwrap())
    }

    #[test]
    fn test_empty_result_is_valid() {
        let result = Validation::new();
        assert!(result.valid());
        assert!(result.errors().is_empty());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_positional_names() {
        let _guard = store_guard();
        let result = Validation::new()
            .is(en(1).equal_to(1))
            .is(en(2).equal_to(1))
            .is(en(3).equal_to(1));

        let names: Vec<&str> = result.errors().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["value_1", "value_2"]);
        assert_eq!(
            result.error("value_2").unwrap().messages,
            vec!["Value 2 must be equal to \"1\""]
        );
        assert_eq!(result.error("value_1").unwrap().title, "Value 1");
    }

    #[test]
    fn test_same_name_merges() {
        let _guard = store_guard();
        let result = Validation::new()
            .is(en("").named("email").not().blank())
            .is(en(1).named("other").equal_to(2))
            .is(en("").named("email").not().empty());

        assert_eq!(result.errors().len(), 2);
        assert_eq!(
            result.error("email").unwrap().messages,
            vec!["Email can't be blank", "Email can't be empty"]
        );
        assert_eq!(result.errors()[0].name, "email");
    }

    #[test]
    fn test_injected_errors_keep_call_order() {
        let _guard = store_guard();
        let result = Validation::new()
            .is(en(1).named("a").equal_to(2))
            .add_error("session", "session expired")
            .is(en(1).named("b").equal_to(2));

        assert!(!result.valid());
        let names: Vec<&str> = result.errors().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "session", "b"]);
        assert_eq!(result.error("session").unwrap().messages, vec!["session expired"]);

        let map = result.error_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["session"].title, "Session");
    }

    #[test]
    fn test_injected_error_alone_invalidates() {
        let result = Validation::new().add_error("token", "missing");
        assert!(!result.valid());
        assert!(result.into_result().is_err());
    }

    #[test]
    fn test_merge() {
        let _guard = store_guard();
        let left = Validation::new().is(en(1).named("x").equal_to(2));
        let right = Validation::new()
            .is(en(1).named("x").less_than(0))
            .is(en(1).named("y").equal_to(1));

        let merged = left.merge(right);
        assert!(!merged.valid());
        assert_eq!(merged.errors().len(), 1);
        assert_eq!(merged.error("x").unwrap().messages.len(), 2);
    }

    #[test]
    fn test_to_json_and_display() {
        let _guard = store_guard();
        let result = Validation::new().is(en(" ").named("name").not().blank());
        let json = result.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["name"], "name");
        assert_eq!(json["errors"][0]["messages"][0], "Name can't be blank");
        assert_eq!(result.to_string(), "name: Name can't be blank\n");
    }
}
