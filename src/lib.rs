// Assay - inline value validation with localized messages
//
// This library re-exports the validation engine, the message store and the
// logger under one name.

pub use assay_validation::*;

/// Locale message store and template rendering
pub use assay_i18n as i18n;

/// Leveled logging used across the assay crates
pub use assay_log as log;

pub use assay_i18n::{
    I18nError, LocaleCode, Messages, add_messages, add_messages_json, default_locale, messages,
    set_default_locale,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use assay_i18n::{LocaleCode, Messages, add_messages, set_default_locale};
    pub use assay_validation::{
        Context, FieldError, IsNumber, IsText, Length, LengthBetween, MatchingTo, Rule, Validate,
        Validation, Value, add_error, is, localized, named, value,
    };
}
