//! Credential validation seam.
//!
//! The login handler does not know how credentials are checked — it holds
//! a [`Validator`] and asks. The binary injects a demo validator; tests
//! inject closures. No session or token comes out of a successful check:
//! every request stands alone.

use std::sync::Arc;

/// Checks a username/password pair.
///
/// Implemented automatically for any `Fn(&str, &str) -> bool`, so a
/// closure is a validator:
///
/// ```rust
/// use std::sync::Arc;
/// use skillet::auth::Validator;
///
/// let validator: Validator =
///     Arc::new(|username: &str, password: &str| username == "chef" && password == "butter");
/// assert!(validator.validate("chef", "butter"));
/// ```
pub trait CredentialValidator: Send + Sync {
    fn validate(&self, username: &str, password: &str) -> bool;
}

/// A shared, type-erased validator, cloneable into the login handler.
pub type Validator = Arc<dyn CredentialValidator>;

impl<F> CredentialValidator for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn validate(&self, username: &str, password: &str) -> bool {
        self(username, password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_closure_is_a_validator() {
        let validator: Validator = Arc::new(|u: &str, p: &str| u == "chef" && p == "butter");
        assert!(validator.validate("chef", "butter"));
        assert!(!validator.validate("chef", "margarine"));
    }
}
