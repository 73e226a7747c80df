//! Value validation for assay
//!
//! Chain rules on a value, collect the failures per field, and render the
//! messages in the locale of your choice.
//!
//! # Examples
//!
//! ## Basic Validation
//!
//! ```
//! use assay_validation::{is, named};
//!
//! let result = is(named("", "username").not().blank())
//!     .is(named(15, "age").greater_or_equal_to(18));
//!
//! assert!(!result.valid());
//! assert_eq!(result.error("username").unwrap().messages, vec!["Username can't be blank"]);
//! assert_eq!(
//!     result.error("age").unwrap().messages,
//!     vec!["Age must be greater than or equal to \"18\""]
//! );
//! ```
//!
//! ## Mixed types
//!
//! Numbers of any width compare numerically, and text that parses as a
//! number compares against numbers:
//!
//! ```
//! use assay_validation::value;
//!
//! assert!(value("1.1").greater_or_equal_to(1).valid());
//! assert!(value(10u8).equal_to(10.0).valid());
//! assert!(!value("abc").greater_than(1).valid());
//! ```
//!
//! ## Localized messages
//!
//! ```
//! use assay_validation::localized;
//!
//! let es = localized("es").unwrap();
//! let ctx = es.named(" ", "nombre").not().blank();
//! assert_eq!(ctx.messages(), vec!["Nombre no puede estar en blanco"]);
//!
//! assert!(localized("xx").is_err());
//! ```

mod context;
mod errors;
mod traits;
mod validators;
mod value;

pub mod compare;

pub use context::{Context, Rule};
pub use errors::{FieldError, Validation};
pub use traits::Validate;
pub use validators::{IsNumber, IsText, Length, LengthBetween, MatchingTo};
pub use value::{Kind, Number, Value};

use assay_i18n::{Catalog, LocaleCode};

/// Start validating a value with the process-wide default locale.
pub fn value(value: impl Into<Value>) -> Context {
    Context::new(value)
}

/// Start validating a named value with the process-wide default locale.
pub fn named(value: impl Into<Value>, name: impl Into<String>) -> Context {
    Context::new(value).named(name)
}

/// Start a result from one validated value.
pub fn is(ctx: Context) -> Validation {
    Validation::new().is(ctx)
}

/// Start a result from an error that no rule produced.
pub fn add_error(name: impl Into<String>, message: impl Into<String>) -> Validation {
    Validation::new().add_error(name, message)
}

/// Entry point bound to one locale.
///
/// The catalog is resolved once; the process-wide default is untouched.
#[derive(Debug, Clone)]
pub struct Localized {
    catalog: Catalog,
}

impl Localized {
    /// Locale this entry point renders with.
    pub fn locale(&self) -> &LocaleCode {
        self.catalog.code()
    }

    /// Start validating a value in this locale.
    pub fn value(&self, value: impl Into<Value>) -> Context {
        Context::with_catalog(value, self.catalog.clone())
    }

    /// Start validating a named value in this locale.
    pub fn named(&self, value: impl Into<Value>, name: impl Into<String>) -> Context {
        self.value(value).named(name)
    }
}

/// Bind an entry point to a configured locale.
///
/// Unknown locales are an error rather than a silent fallback.
pub fn localized(code: &str) -> assay_i18n::Result<Localized> {
    Ok(Localized {
        catalog: assay_i18n::catalog(code)?,
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use once_cell::sync::Lazy;
    use parking_lot::{Mutex, MutexGuard};

    static STORE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    /// Serializes tests that touch the process-wide message store and
    /// restores the built-in catalogs around them.
    pub(crate) struct StoreGuard {
        _lock: MutexGuard<'static, ()>,
    }

    impl Drop for StoreGuard {
        fn drop(&mut self) {
            assay_i18n::reset();
        }
    }

    pub(crate) fn store_guard() -> StoreGuard {
        let lock = STORE_LOCK.lock();
        assay_i18n::reset();
        StoreGuard { _lock: lock }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store_guard;

    #[test]
    fn test_localized_does_not_touch_default() {
        let _guard = store_guard();
        assay_i18n::set_default_locale("en").unwrap();

        let es = localized("ES").unwrap();
        assert_eq!(es.locale().as_str(), "es");
        let spanish = es.value(" ").not().blank();
        assert_eq!(spanish.messages(), vec!["Value 0 no puede estar en blanco"]);

        let english = value(" ").not().blank();
        assert_eq!(english.messages(), vec!["Value 0 can't be blank"]);
        assert_eq!(assay_i18n::default_locale().as_str(), "en");
    }

    #[test]
    fn test_localized_unknown_locale() {
        let _guard = store_guard();
        let err = localized("fr").unwrap_err();
        assert!(matches!(err, assay_i18n::I18nError::UnknownLocale(_)));
    }

    #[test]
    fn test_add_error_entry_point() {
        let result = add_error("form", "rejected upstream");
        assert!(!result.valid());
        assert_eq!(result.errors()[0].title, "Form");
    }
}
