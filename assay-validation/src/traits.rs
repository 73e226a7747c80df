// Validation traits

use crate::Validation;

/// Types that know how to validate themselves.
///
/// ```
/// use assay_validation::{Validate, Validation, named};
///
/// struct Signup {
///     email: String,
///     age: u8,
/// }
///
/// impl Validate for Signup {
///     fn validation(&self) -> Validation {
///         Validation::new()
///             .is(named(&self.email, "email").not().blank())
///             .is(named(self.age, "age").between(18, 120))
///     }
/// }
///
/// let signup = Signup { email: "a@b.c".into(), age: 30 };
/// assert!(signup.validate().is_ok());
/// ```
pub trait Validate {
    /// Run every rule and collect the outcome.
    fn validation(&self) -> Validation;

    /// `Ok(())` when valid, the failing result otherwise.
    fn validate(&self) -> Result<(), Validation> {
        self.validation().into_result()
    }
}
