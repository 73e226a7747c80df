//! Message Store
//!
//! Process-wide table of locale catalogs. Readers take the lock only long
//! enough to clone an `Arc` snapshot ([`Catalog`]) or deep-copy a catalog;
//! writers mutate through `Arc::make_mut`, so snapshots already handed out
//! keep the content they were taken with.

use crate::builtin::{BUILTIN_LOCALES, DEFAULT_LOCALE, builtin_messages};
use crate::template::{MISSING_KEY_SENTINEL, missing_message_sentinel};
use crate::{I18nError, LocaleCode, Result};
use assay_log::{debug, info, warn};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

/// Templates of one locale keyed by message key.
pub type Messages = HashMap<String, String>;

/// Environment variable selecting the initial default locale.
pub const LOCALE_ENV: &str = "ASSAY_LOCALE";

static STORE: Lazy<RwLock<MessageStore>> = Lazy::new(|| RwLock::new(MessageStore::builtin()));

/// Immutable snapshot of one locale's catalog.
///
/// Cheap to clone; later store mutations are not visible through it.
#[derive(Debug, Clone)]
pub struct Catalog {
    code: LocaleCode,
    messages: Arc<Messages>,
}

impl Catalog {
    /// Build a standalone catalog that is not registered in the store.
    pub fn new(code: LocaleCode, messages: Messages) -> Self {
        Self {
            code,
            messages: Arc::new(messages),
        }
    }

    /// Locale code of this catalog.
    pub fn code(&self) -> &LocaleCode {
        &self.code
    }

    /// Raw template for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Check if the catalog has a template for the key.
    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Pick the template a failing rule renders.
    ///
    /// A non-empty `template` override wins. Otherwise the key is looked up;
    /// an empty key or a key without a template yields the matching sentinel
    /// string, never an error.
    pub fn resolve(&self, key: &str, template: Option<&str>) -> String {
        if let Some(template) = template.filter(|t| !t.is_empty()) {
            return template.to_string();
        }

        if key.trim().is_empty() {
            warn!(target: "assay::i18n", "Rule without message key or template");
            return MISSING_KEY_SENTINEL.to_string();
        }

        match self.get(key) {
            Some(template) => template.to_string(),
            None => {
                warn!(
                    target: "assay::i18n",
                    "No message for key {:?} in locale {}",
                    key,
                    self.code
                );
                missing_message_sentinel(key)
            }
        }
    }
}

/// The locale table behind the process-wide store.
///
/// Exposed so callers can build isolated stores; the free functions of this
/// module operate on the shared instance.
#[derive(Debug, Clone)]
pub struct MessageStore {
    default_locale: LocaleCode,
    locales: HashMap<LocaleCode, Arc<Messages>>,
}

impl MessageStore {
    /// A store seeded with the built-in catalogs.
    ///
    /// The default locale comes from `ASSAY_LOCALE` when it names a
    /// built-in catalog, `en` otherwise.
    pub fn builtin() -> Self {
        let mut locales = HashMap::new();
        for code in BUILTIN_LOCALES {
            if let (Ok(locale), Some(messages)) = (LocaleCode::parse(code), builtin_messages(code)) {
                locales.insert(locale, Arc::new(messages));
            }
        }

        let fallback = LocaleCode(DEFAULT_LOCALE.to_string());
        let default_locale = env::var(LOCALE_ENV)
            .ok()
            .and_then(|code| LocaleCode::parse(&code).ok())
            .filter(|code| locales.contains_key(code))
            .unwrap_or(fallback);

        Self {
            default_locale,
            locales,
        }
    }

    /// Current default locale.
    pub fn default_locale(&self) -> &LocaleCode {
        &self.default_locale
    }

    /// Make `code` the default. Fails if no catalog exists for it.
    pub fn set_default_locale(&mut self, code: &str) -> Result<()> {
        let locale = self.known(code)?;
        self.default_locale = locale;
        Ok(())
    }

    /// Create the locale or merge `messages` into it, overwriting keys.
    pub fn add_messages(&mut self, code: &str, messages: Messages) -> Result<()> {
        let locale = LocaleCode::parse(code)?;
        let entry = self.locales.entry(locale).or_default();
        Arc::make_mut(entry).extend(messages);
        Ok(())
    }

    /// Independent copy of a locale's templates.
    pub fn messages(&self, code: &str) -> Result<Messages> {
        let locale = self.known(code)?;
        Ok(self.locales[&locale].as_ref().clone())
    }

    /// Snapshot of a locale, or of the default when `code` is `None`.
    pub fn catalog(&self, code: Option<&str>) -> Result<Catalog> {
        let locale = match code {
            Some(code) => self.known(code)?,
            None => self.default_locale.clone(),
        };
        let messages = self
            .locales
            .get(&locale)
            .cloned()
            .unwrap_or_default();
        Ok(Catalog {
            code: locale,
            messages,
        })
    }

    /// Codes of all configured locales, sorted.
    pub fn locales(&self) -> Vec<LocaleCode> {
        let mut codes: Vec<_> = self.locales.keys().cloned().collect();
        codes.sort();
        codes
    }

    fn known(&self, code: &str) -> Result<LocaleCode> {
        let locale = LocaleCode::parse(code)?;
        if self.locales.contains_key(&locale) {
            Ok(locale)
        } else {
            Err(I18nError::UnknownLocale(locale.to_string()))
        }
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parse a JSON catalog document.
///
/// String members become templates; nested objects flatten into dotted keys
/// (`{"user": {"name": "..."}}` defines `user.name`).
pub fn parse_messages_json(json: &str) -> Result<Messages> {
    let data: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Object(object) = data else {
        return Err(I18nError::ParseError(
            "catalog root must be a JSON object".to_string(),
        ));
    };

    let mut messages = Messages::new();
    flatten_json(None, object, &mut messages)?;
    Ok(messages)
}

fn flatten_json(
    prefix: Option<&str>,
    object: serde_json::Map<String, serde_json::Value>,
    out: &mut Messages,
) -> Result<()> {
    for (key, value) in object {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key,
        };
        match value {
            serde_json::Value::String(template) => {
                out.insert(key, template);
            }
            serde_json::Value::Object(nested) => flatten_json(Some(&key), nested, out)?,
            other => {
                return Err(I18nError::ParseError(format!(
                    "template for {:?} must be a string, found {}",
                    key, other
                )));
            }
        }
    }
    Ok(())
}

// ============================================================================
// Process-wide store
// ============================================================================

/// Current process-wide default locale.
pub fn default_locale() -> LocaleCode {
    STORE.read().default_locale().clone()
}

/// Switch the process-wide default locale.
///
/// Contexts created afterwards render with the new locale; contexts
/// created before keep theirs.
pub fn set_default_locale(code: &str) -> Result<()> {
    let result = STORE.write().set_default_locale(code);
    match &result {
        Ok(()) => info!(target: "assay::i18n", "Default locale set to {}", code),
        Err(e) => warn!(target: "assay::i18n", "Cannot set default locale: {}", e),
    }
    result
}

/// Add or replace templates for a locale, creating it if absent.
pub fn add_messages(code: &str, messages: Messages) -> Result<()> {
    let count = messages.len();
    STORE.write().add_messages(code, messages)?;
    debug!(target: "assay::i18n", "Merged {} templates into locale {}", count, code);
    Ok(())
}

/// Parse a JSON catalog and merge it into a locale.
pub fn add_messages_json(code: &str, json: &str) -> Result<()> {
    add_messages(code, parse_messages_json(json)?)
}

/// Deep copy of a locale's templates, taken under the read lock.
///
/// Mutating the returned map never affects the store.
pub fn messages(code: &str) -> Result<Messages> {
    STORE.read().messages(code)
}

/// Snapshot of the default locale's catalog.
pub fn default_catalog() -> Catalog {
    let store = STORE.read();
    store.catalog(None).unwrap_or_else(|_| Catalog {
        code: store.default_locale().clone(),
        messages: Arc::default(),
    })
}

/// Snapshot of a specific locale's catalog. Unknown locales are an error.
pub fn catalog(code: &str) -> Result<Catalog> {
    let result = STORE.read().catalog(Some(code));
    if let Err(e) = &result {
        warn!(target: "assay::i18n", "Cannot resolve locale: {}", e);
    }
    result
}

/// Codes of all configured locales.
pub fn locales() -> Vec<LocaleCode> {
    STORE.read().locales()
}

/// Restore the built-in catalogs and default locale.
pub fn reset() {
    *STORE.write() = MessageStore::builtin();
    debug!(target: "assay::i18n", "Message store reset to built-in catalogs");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MessageStore {
        let mut store = MessageStore::builtin();
        store.set_default_locale("en").unwrap();
        store
    }

    #[test]
    fn test_builtin_locales() {
        let store = store();
        let codes: Vec<String> = store.locales().iter().map(ToString::to_string).collect();
        assert_eq!(codes, vec!["de", "en", "es"]);
    }

    #[test]
    fn test_set_default_locale_case_insensitive() {
        let mut store = store();
        store.set_default_locale("ES").unwrap();
        assert_eq!(store.default_locale().as_str(), "es");
    }

    #[test]
    fn test_set_unknown_default_locale() {
        let mut store = store();
        let err = store.set_default_locale("fr").unwrap_err();
        assert!(matches!(err, I18nError::UnknownLocale(ref code) if code == "fr"));
        assert_eq!(store.default_locale().as_str(), "en");
    }

    #[test]
    fn test_add_messages_creates_and_merges() {
        let mut store = store();
        store
            .add_messages("fr", Messages::from([("blank".into(), "{{title}} vide".into())]))
            .unwrap();
        store
            .add_messages("FR", Messages::from([("empty".into(), "{{title}} vide!".into())]))
            .unwrap();

        let fr = store.messages("fr").unwrap();
        assert_eq!(fr.len(), 2);

        store
            .add_messages("en", Messages::from([("blank".into(), "custom".into())]))
            .unwrap();
        let en = store.catalog(Some("en")).unwrap();
        assert_eq!(en.get("blank"), Some("custom"));
        assert!(en.has("not_blank"));
    }

    #[test]
    fn test_messages_copy_is_independent() {
        let store = store();
        let mut copy = store.messages("en").unwrap();
        copy.insert("blank".into(), "changed".into());
        copy.clear();
        assert_eq!(store.catalog(Some("en")).unwrap().get("blank"), Some("{{title}} must be blank"));
    }

    #[test]
    fn test_snapshot_survives_mutation() {
        let mut store = store();
        let before = store.catalog(Some("en")).unwrap();
        store
            .add_messages("en", Messages::from([("blank".into(), "changed".into())]))
            .unwrap();
        assert_eq!(before.get("blank"), Some("{{title}} must be blank"));
        assert_eq!(store.catalog(Some("en")).unwrap().get("blank"), Some("changed"));
    }

    #[test]
    fn test_resolve_sentinels() {
        let catalog = store().catalog(Some("en")).unwrap();
        assert_eq!(
            catalog.resolve("nope", None),
            "ERROR: THERE IS NOT A MESSAGE WITH THE KEY \"nope\"!"
        );
        assert_eq!(catalog.resolve("", None), MISSING_KEY_SENTINEL);
        assert_eq!(catalog.resolve("  ", Some("")), MISSING_KEY_SENTINEL);
        assert_eq!(catalog.resolve("", Some("custom")), "custom");
        assert_eq!(catalog.resolve("blank", Some("custom")), "custom");
        assert_eq!(catalog.resolve("blank", None), "{{title}} must be blank");
    }

    #[test]
    fn test_parse_messages_json() {
        let json = r#"{
            "blank": "{{title}} vide",
            "user": { "name": "Nom" }
        }"#;
        let messages = parse_messages_json(json).unwrap();
        assert_eq!(messages.get("blank").map(String::as_str), Some("{{title}} vide"));
        assert_eq!(messages.get("user.name").map(String::as_str), Some("Nom"));
    }

    #[test]
    fn test_parse_messages_json_rejects_non_strings() {
        assert!(matches!(parse_messages_json("[]"), Err(I18nError::ParseError(_))));
        assert!(matches!(parse_messages_json(r#"{"a": 1}"#), Err(I18nError::ParseError(_))));
        assert!(matches!(parse_messages_json("{"), Err(I18nError::JsonError(_))));
    }
}
