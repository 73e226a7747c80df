//! Locale codes
//!
//! Catalogs are keyed by a normalized code: lower case, `-` as the
//! separator. `"ES"`, `"es"` and `" es "` all name the same catalog, as do
//! `"pt_BR"` and `"pt-br"`.

use crate::{I18nError, Result};
use std::fmt;
use std::str::FromStr;

/// A normalized locale code.
///
/// # Examples
///
/// ```
/// use assay_i18n::LocaleCode;
///
/// let code = LocaleCode::parse("pt_BR").unwrap();
/// assert_eq!(code.as_str(), "pt-br");
/// assert_eq!(code.language(), "pt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleCode(pub(crate) String);

impl LocaleCode {
    /// Normalize a code, rejecting empty input and unexpected characters.
    pub fn parse(code: &str) -> Result<Self> {
        let trimmed = code.trim();

        if trimmed.is_empty()
            || !trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(I18nError::InvalidLocale(code.to_string()));
        }

        let normalized: String = trimmed
            .chars()
            .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
            .collect();

        if normalized.split('-').any(str::is_empty) {
            return Err(I18nError::InvalidLocale(code.to_string()));
        }

        Ok(Self(normalized))
    }

    /// The normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language subtag (everything before the first `-`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        LocaleCode::parse(s)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(LocaleCode::parse("EN").unwrap(), LocaleCode::parse("en").unwrap());
        assert_eq!(LocaleCode::parse(" Es ").unwrap().as_str(), "es");
    }

    #[test]
    fn test_separator_normalized() {
        let code: LocaleCode = "zh_Hant_TW".parse().unwrap();
        assert_eq!(code.as_str(), "zh-hant-tw");
        assert_eq!(code.language(), "zh");
    }

    #[test]
    fn test_invalid_codes() {
        assert!(matches!(LocaleCode::parse(""), Err(I18nError::InvalidLocale(_))));
        assert!(matches!(LocaleCode::parse("   "), Err(I18nError::InvalidLocale(_))));
        assert!(matches!(LocaleCode::parse("en US"), Err(I18nError::InvalidLocale(_))));
        assert!(matches!(LocaleCode::parse("en--us"), Err(I18nError::InvalidLocale(_))));
    }
}
