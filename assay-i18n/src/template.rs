//! Template rendering
//!
//! Templates use double-brace placeholders: `{{title}}`, `{{value}}`, or any
//! rule parameter such as `{{min}}`. Whitespace inside the braces is
//! allowed. Placeholders without a matching argument are kept verbatim.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap());

/// Rendered when a rule names an empty key and supplies no template.
pub const MISSING_KEY_SENTINEL: &str = "ERROR: MISSING MESSAGE KEY OR TEMPLATE STRING!";

/// Rendered when the active locale has no template for a key.
pub fn missing_message_sentinel(key: &str) -> String {
    format!("ERROR: THERE IS NOT A MESSAGE WITH THE KEY \"{}\"!", key)
}

/// Substitute `{{name}}` placeholders with the matching argument.
///
/// # Example
///
/// ```
/// use assay_i18n::render;
///
/// let msg = render("{{title}} must be between {{min}} and {{ max }}", &[
///     ("title", "Age"),
///     ("min", "18"),
///     ("max", "65"),
/// ]);
/// assert_eq!(msg, "Age must be between 18 and 65");
/// assert_eq!(render("{{unknown}} stays", &[]), "{{unknown}} stays");
/// ```
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Turn a field name into a display title.
///
/// Underscores, dashes and lower-to-upper camel-case boundaries become
/// spaces, words after the first are lower-cased unless they are acronyms,
/// and the first letter is capitalized.
///
/// # Example
///
/// ```
/// use assay_i18n::humanize;
///
/// assert_eq!(humanize("value_0"), "Value 0");
/// assert_eq!(humanize("firstName"), "First name");
/// assert_eq!(humanize("user_ID"), "User ID");
/// ```
pub fn humanize(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
            && !current.is_empty()
        {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut title = String::with_capacity(name.len());
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            title.push(' ');
        }
        let acronym = word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase());
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                title.extend(first.to_uppercase());
                title.push_str(chars.as_str());
            }
        } else if acronym {
            title.push_str(word);
        } else {
            title.push_str(&word.to_lowercase());
        }
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_repeats_and_spaces() {
        let out = render("{{ title }} / {{title}} = {{value}}", &[("title", "X"), ("value", "1")]);
        assert_eq!(out, "X / X = 1");
    }

    #[test]
    fn test_render_keeps_unknown() {
        assert_eq!(render("{{a}} {{b}}", &[("a", "1")]), "1 {{b}}");
        assert_eq!(render("{single} {{}}", &[("single", "x")]), "{single} {{}}");
    }

    #[test]
    fn test_render_argument_with_braces_is_not_reexpanded() {
        assert_eq!(render("{{value}}", &[("value", "{{title}}"), ("title", "T")]), "{{title}}");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("name"), "Name");
        assert_eq!(humanize("first_name"), "First name");
        assert_eq!(humanize("createdAt"), "Created at");
        assert_eq!(humanize("HTTPStatus"), "HTTPStatus");
        assert_eq!(humanize("value_12"), "Value 12");
        assert_eq!(humanize("__x__"), "X");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(
            missing_message_sentinel("blank"),
            "ERROR: THERE IS NOT A MESSAGE WITH THE KEY \"blank\"!"
        );
        assert_eq!(MISSING_KEY_SENTINEL, "ERROR: MISSING MESSAGE KEY OR TEMPLATE STRING!");
    }
}
