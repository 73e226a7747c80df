//! Integration tests for common assay workflows.
//!
//! These tests go through the facade crate the way an application would.

use assay::prelude::*;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};

static LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct Guard(#[allow(dead_code)] MutexGuard<'static, ()>);

impl Drop for Guard {
    fn drop(&mut self) {
        assay::i18n::reset();
    }
}

fn guard() -> Guard {
    let lock = LOCK.lock();
    assay::i18n::reset();
    set_default_locale("en").unwrap();
    Guard(lock)
}

// =============================================================================
// Locale Switching
// =============================================================================

#[test]
fn test_blank_message_follows_default_locale() {
    let _guard = guard();
    let ctx = value("").not().blank();
    assert!(!ctx.valid());
    assert_eq!(ctx.messages(), vec!["Value 0 can't be blank"]);

    set_default_locale("es").unwrap();
    let ctx = value("").not().blank();
    assert_eq!(ctx.messages(), vec!["Value 0 no puede estar en blanco"]);
}

#[test]
fn test_localized_does_not_touch_default() {
    let _guard = guard();
    let es = localized("es").unwrap();
    let result = is(es.named("", "nombre").not().blank()).is(named("", "name").not().blank());

    assert_eq!(
        result.error("nombre").unwrap().messages,
        vec!["Nombre no puede estar en blanco"]
    );
    assert_eq!(result.error("name").unwrap().messages, vec!["Name can't be blank"]);
    assert_eq!(assay::default_locale().as_str(), "en");
}

// =============================================================================
// Heterogeneous Comparison
// =============================================================================

#[test]
fn test_greater_or_equal_across_types() {
    let _guard = guard();
    assert!(value("1.1").greater_or_equal_to(1).valid());
    assert!(!value(1).greater_or_equal_to(vec![1]).valid());
    assert!(!value(vec![1]).less_or_equal_to(1).valid());

    // Negating an incomparable pair passes
    assert!(value(1).not().greater_or_equal_to(vec![1]).valid());
}

// =============================================================================
// Message Resolution
// =============================================================================

#[test]
fn test_missing_message_sentinels() {
    let _guard = guard();
    let unknown = value(1).apply(|ctx: &mut Context, template: Option<&str>| {
        ctx.check(false, "no_such_key", &[], template);
    });
    assert_eq!(
        unknown.messages(),
        vec!["ERROR: THERE IS NOT A MESSAGE WITH THE KEY \"no_such_key\"!"]
    );

    let keyless = value(1).apply(|ctx: &mut Context, template: Option<&str>| {
        ctx.check(false, "", &[], template);
    });
    assert_eq!(
        keyless.messages(),
        vec!["ERROR: MISSING MESSAGE KEY OR TEMPLATE STRING!"]
    );

    let custom = value(1)
        .template("{{title}} is odd")
        .apply(|ctx: &mut Context, template: Option<&str>| {
            ctx.check(false, "", &[], template);
        });
    assert_eq!(custom.messages(), vec!["Value 0 is odd"]);
}

#[test]
fn test_catalog_copies_are_isolated() {
    let _guard = guard();
    let mut copy = assay::messages("en").unwrap();
    copy.insert("not_blank".into(), "changed".into());

    assert_eq!(value("").not().blank().messages(), vec!["Value 0 can't be blank"]);

    add_messages("en", Messages::from([("not_blank".into(), "{{title}} is required".into())]))
        .unwrap();
    assert_eq!(value("").not().blank().messages(), vec!["Value 0 is required"]);
}

// =============================================================================
// Full Form
// =============================================================================

#[test]
fn test_form_validation() {
    let _guard = guard();

    struct Order {
        sku: String,
        quantity: i64,
        coupon: Option<String>,
    }

    impl Validate for Order {
        fn validation(&self) -> Validation {
            let result = is(named(&self.sku, "sku")
                .titled("SKU")
                .not()
                .blank()
                .apply(LengthBetween { min: 4, max: 12 }))
            .is(named(self.quantity, "quantity").between(1, 99));

            match &self.coupon {
                Some(code) if code != "WELCOME" => result.add_error("coupon", "Coupon expired"),
                _ => result,
            }
        }
    }

    let order = Order {
        sku: "AB".into(),
        quantity: 0,
        coupon: Some("OLD".into()),
    };
    let err = order.validate().unwrap_err();
    assert_eq!(err.to_string(), concat!(
        "sku: SKU must have a length between \"4\" and \"12\"\n",
        "quantity: Quantity must be between \"1\" and \"99\"\n",
        "coupon: Coupon expired\n",
    ));

    let order = Order {
        sku: "ABCD-1".into(),
        quantity: 2,
        coupon: Some("WELCOME".into()),
    };
    assert!(order.validate().is_ok());
}
