//! Locale catalogs and message rendering for assay
//!
//! - **Message Store**: process-wide locale table with built-in `en`, `es`
//!   and `de` catalogs, guarded by a single-writer/many-readers lock
//! - **Catalog snapshots**: immutable per-locale views that validation
//!   contexts hold for their whole lifetime
//! - **Template rendering**: `{{placeholder}}` substitution and title
//!   humanization
//!
//! # Quick Start
//!
//! ```
//! use assay_i18n::{catalog, render};
//!
//! let es = catalog("ES").unwrap();
//! let template = es.resolve("not_blank", None);
//! assert_eq!(render(&template, &[("title", "Nombre")]), "Nombre no puede estar en blanco");
//! ```
//!
//! # Customizing messages
//!
//! ```
//! use assay_i18n::{Messages, add_messages, messages};
//!
//! add_messages("x-pirate", Messages::from([
//!     ("not_blank".to_string(), "{{title}} be empty, matey".to_string()),
//! ])).unwrap();
//!
//! // Copies are detached from the store
//! let mut copy = messages("x-pirate").unwrap();
//! copy.clear();
//! assert!(messages("x-pirate").unwrap().contains_key("not_blank"));
//! ```

mod builtin;
mod error;
mod locale;
mod messages;
mod template;

pub use builtin::{BUILTIN_LOCALES, DEFAULT_LOCALE, builtin_messages, keys};
pub use error::I18nError;
pub use locale::LocaleCode;
pub use messages::{
    Catalog, LOCALE_ENV, MessageStore, Messages, add_messages, add_messages_json, catalog,
    default_catalog, default_locale, locales, messages, parse_messages_json, reset,
    set_default_locale,
};
pub use template::{MISSING_KEY_SENTINEL, humanize, missing_message_sentinel, render};

/// Result type for locale configuration
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Catalog, I18nError, LocaleCode, Messages, Result, add_messages, catalog, default_locale,
        messages, render, reset, set_default_locale,
    };
}
