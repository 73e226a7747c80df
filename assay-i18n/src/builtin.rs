//! Built-in message catalogs
//!
//! Every rule shipped by `assay-validation` has a key here plus its `not_`
//! counterpart, used when the rule runs negated.

use crate::Messages;

/// Message keys used by the built-in rules.
pub mod keys {
    pub const BLANK: &str = "blank";
    pub const EMPTY: &str = "empty";
    pub const EQUAL_TO: &str = "equal_to";
    pub const GREATER_THAN: &str = "greater_than";
    pub const GREATER_OR_EQUAL_TO: &str = "greater_or_equal_to";
    pub const LESS_THAN: &str = "less_than";
    pub const LESS_OR_EQUAL_TO: &str = "less_or_equal_to";
    pub const BETWEEN: &str = "between";
    pub const IDENTICAL_TO: &str = "identical_to";
    pub const IN: &str = "in";
    pub const ZERO: &str = "zero";
    pub const NIL: &str = "nil";
    pub const TRUE: &str = "true";
    pub const FALSE: &str = "false";
    pub const PASSING: &str = "passing";
    pub const MATCHING_TO: &str = "matching_to";
    pub const LENGTH: &str = "length";
    pub const LENGTH_BETWEEN: &str = "length_between";
    pub const A_NUMBER: &str = "a_number";
    pub const A_TEXT: &str = "a_text";

    /// Prefix applied to a key when the rule was negated with `not()`.
    pub const NOT_PREFIX: &str = "not_";
}

/// Default locale when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Codes of the catalogs shipped with the crate.
pub const BUILTIN_LOCALES: [&str; 3] = ["en", "es", "de"];

const EN: &[(&str, &str)] = &[
    ("blank", "{{title}} must be blank"),
    ("not_blank", "{{title}} can't be blank"),
    ("empty", "{{title}} must be empty"),
    ("not_empty", "{{title}} can't be empty"),
    ("equal_to", "{{title}} must be equal to \"{{value}}\""),
    ("not_equal_to", "{{title}} can't be equal to \"{{value}}\""),
    ("greater_than", "{{title}} must be greater than \"{{value}}\""),
    ("not_greater_than", "{{title}} can't be greater than \"{{value}}\""),
    ("greater_or_equal_to", "{{title}} must be greater than or equal to \"{{value}}\""),
    ("not_greater_or_equal_to", "{{title}} can't be greater than or equal to \"{{value}}\""),
    ("less_than", "{{title}} must be less than \"{{value}}\""),
    ("not_less_than", "{{title}} can't be less than \"{{value}}\""),
    ("less_or_equal_to", "{{title}} must be less than or equal to \"{{value}}\""),
    ("not_less_or_equal_to", "{{title}} can't be less than or equal to \"{{value}}\""),
    ("between", "{{title}} must be between \"{{min}}\" and \"{{max}}\""),
    ("not_between", "{{title}} can't be a value between \"{{min}}\" and \"{{max}}\""),
    ("identical_to", "{{title}} must be identical to \"{{value}}\""),
    ("not_identical_to", "{{title}} can't be identical to \"{{value}}\""),
    ("in", "{{title}} is not valid"),
    ("not_in", "{{title}} is not valid"),
    ("zero", "{{title}} must be zero"),
    ("not_zero", "{{title}} can't be zero"),
    ("nil", "{{title}} must be nil"),
    ("not_nil", "{{title}} can't be nil"),
    ("true", "{{title}} must be true"),
    ("not_true", "{{title}} must not be true"),
    ("false", "{{title}} must be false"),
    ("not_false", "{{title}} must not be false"),
    ("passing", "{{title}} is not valid"),
    ("not_passing", "{{title}} is not valid"),
    ("matching_to", "{{title}} must match to \"{{pattern}}\""),
    ("not_matching_to", "{{title}} can't match to \"{{pattern}}\""),
    ("length", "{{title}} must have a length equal to \"{{length}}\""),
    ("not_length", "{{title}} must not have a length equal to \"{{length}}\""),
    ("length_between", "{{title}} must have a length between \"{{min}}\" and \"{{max}}\""),
    ("not_length_between", "{{title}} must not have a length between \"{{min}}\" and \"{{max}}\""),
    ("a_number", "{{title}} must be a number"),
    ("not_a_number", "{{title}} can't be a number"),
    ("a_text", "{{title}} must be a text"),
    ("not_a_text", "{{title}} can't be a text"),
];

const ES: &[(&str, &str)] = &[
    ("blank", "{{title}} debe estar en blanco"),
    ("not_blank", "{{title}} no puede estar en blanco"),
    ("empty", "{{title}} debe estar vacío"),
    ("not_empty", "{{title}} no puede estar vacío"),
    ("equal_to", "{{title}} debe ser igual a \"{{value}}\""),
    ("not_equal_to", "{{title}} no puede ser igual a \"{{value}}\""),
    ("greater_than", "{{title}} debe ser mayor que \"{{value}}\""),
    ("not_greater_than", "{{title}} no puede ser mayor que \"{{value}}\""),
    ("greater_or_equal_to", "{{title}} debe ser mayor o igual a \"{{value}}\""),
    ("not_greater_or_equal_to", "{{title}} no puede ser mayor o igual a \"{{value}}\""),
    ("less_than", "{{title}} debe ser menor que \"{{value}}\""),
    ("not_less_than", "{{title}} no puede ser menor que \"{{value}}\""),
    ("less_or_equal_to", "{{title}} debe ser menor o igual a \"{{value}}\""),
    ("not_less_or_equal_to", "{{title}} no puede ser menor o igual a \"{{value}}\""),
    ("between", "{{title}} debe estar entre \"{{min}}\" y \"{{max}}\""),
    ("not_between", "{{title}} no puede ser un valor entre \"{{min}}\" y \"{{max}}\""),
    ("identical_to", "{{title}} debe ser idéntico a \"{{value}}\""),
    ("not_identical_to", "{{title}} no puede ser idéntico a \"{{value}}\""),
    ("in", "{{title}} no es válido"),
    ("not_in", "{{title}} no es válido"),
    ("zero", "{{title}} debe ser cero"),
    ("not_zero", "{{title}} no puede ser cero"),
    ("nil", "{{title}} debe ser nulo"),
    ("not_nil", "{{title}} no puede ser nulo"),
    ("true", "{{title}} debe ser verdadero"),
    ("not_true", "{{title}} no debe ser verdadero"),
    ("false", "{{title}} debe ser falso"),
    ("not_false", "{{title}} no debe ser falso"),
    ("passing", "{{title}} no es válido"),
    ("not_passing", "{{title}} no es válido"),
    ("matching_to", "{{title}} debe coincidir con \"{{pattern}}\""),
    ("not_matching_to", "{{title}} no puede coincidir con \"{{pattern}}\""),
    ("length", "{{title}} debe tener una longitud igual a \"{{length}}\""),
    ("not_length", "{{title}} no debe tener una longitud igual a \"{{length}}\""),
    ("length_between", "{{title}} debe tener una longitud entre \"{{min}}\" y \"{{max}}\""),
    ("not_length_between", "{{title}} no debe tener una longitud entre \"{{min}}\" y \"{{max}}\""),
    ("a_number", "{{title}} debe ser un número"),
    ("not_a_number", "{{title}} no puede ser un número"),
    ("a_text", "{{title}} debe ser un texto"),
    ("not_a_text", "{{title}} no puede ser un texto"),
];

const DE: &[(&str, &str)] = &[
    ("blank", "{{title}} darf nur Leerzeichen enthalten"),
    ("not_blank", "{{title}} darf nicht nur aus Leerzeichen bestehen"),
    ("empty", "{{title}} muss leer sein"),
    ("not_empty", "{{title}} darf nicht leer sein"),
    ("equal_to", "{{title}} muss gleich \"{{value}}\" sein"),
    ("not_equal_to", "{{title}} darf nicht gleich \"{{value}}\" sein"),
    ("greater_than", "{{title}} muss größer als \"{{value}}\" sein"),
    ("not_greater_than", "{{title}} darf nicht größer als \"{{value}}\" sein"),
    ("greater_or_equal_to", "{{title}} muss größer oder gleich \"{{value}}\" sein"),
    ("not_greater_or_equal_to", "{{title}} darf nicht größer oder gleich \"{{value}}\" sein"),
    ("less_than", "{{title}} muss kleiner als \"{{value}}\" sein"),
    ("not_less_than", "{{title}} darf nicht kleiner als \"{{value}}\" sein"),
    ("less_or_equal_to", "{{title}} muss kleiner oder gleich \"{{value}}\" sein"),
    ("not_less_or_equal_to", "{{title}} darf nicht kleiner oder gleich \"{{value}}\" sein"),
    ("between", "{{title}} muss zwischen \"{{min}}\" und \"{{max}}\" liegen"),
    ("not_between", "{{title}} darf nicht zwischen \"{{min}}\" und \"{{max}}\" liegen"),
    ("identical_to", "{{title}} muss identisch mit \"{{value}}\" sein"),
    ("not_identical_to", "{{title}} darf nicht identisch mit \"{{value}}\" sein"),
    ("in", "{{title}} ist ungültig"),
    ("not_in", "{{title}} ist ungültig"),
    ("zero", "{{title}} muss null sein"),
    ("not_zero", "{{title}} darf nicht null sein"),
    ("nil", "{{title}} muss nil sein"),
    ("not_nil", "{{title}} darf nicht nil sein"),
    ("true", "{{title}} muss wahr sein"),
    ("not_true", "{{title}} darf nicht wahr sein"),
    ("false", "{{title}} muss falsch sein"),
    ("not_false", "{{title}} darf nicht falsch sein"),
    ("passing", "{{title}} ist ungültig"),
    ("not_passing", "{{title}} ist ungültig"),
    ("matching_to", "{{title}} muss \"{{pattern}}\" entsprechen"),
    ("not_matching_to", "{{title}} darf nicht \"{{pattern}}\" entsprechen"),
    ("length", "{{title}} muss eine Länge von \"{{length}}\" haben"),
    ("not_length", "{{title}} darf keine Länge von \"{{length}}\" haben"),
    ("length_between", "{{title}} muss eine Länge zwischen \"{{min}}\" und \"{{max}}\" haben"),
    ("not_length_between", "{{title}} darf keine Länge zwischen \"{{min}}\" und \"{{max}}\" haben"),
    ("a_number", "{{title}} muss eine Zahl sein"),
    ("not_a_number", "{{title}} darf keine Zahl sein"),
    ("a_text", "{{title}} muss ein Text sein"),
    ("not_a_text", "{{title}} darf kein Text sein"),
];

/// Fresh copy of a built-in catalog, `None` for codes not shipped.
pub fn builtin_messages(code: &str) -> Option<Messages> {
    let table = match code {
        "en" => EN,
        "es" => ES,
        "de" => DE,
        _ => return None,
    };

    Some(
        table
            .iter()
            .map(|(key, template)| (key.to_string(), template.to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_share_keys() {
        let en = builtin_messages("en").unwrap();
        for code in BUILTIN_LOCALES {
            let catalog = builtin_messages(code).unwrap();
            assert_eq!(catalog.len(), en.len(), "catalog {code}");
            for key in en.keys() {
                assert!(catalog.contains_key(key), "{code} is missing {key}");
            }
        }
    }

    #[test]
    fn test_every_key_has_negation() {
        let en = builtin_messages("en").unwrap();
        for key in en.keys().filter(|k| !k.starts_with(keys::NOT_PREFIX)) {
            assert!(en.contains_key(&format!("{}{}", keys::NOT_PREFIX, key)));
        }
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(builtin_messages("fr").is_none());
    }
}
