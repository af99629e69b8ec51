//! CVV/CVC/CID length checks.
//!
//! - American Express: 4 digits (printed on front)
//! - All other issuers: 3 digits (printed on back)
//!
//! Length is the only criterion. A code such as `"12a"` passes for a Visa
//! card; the form layer is expected to restrict input to digits.
//!
//! # Example
//!
//! ```
//! use cardform::cvv::is_valid_cvv;
//! use cardform::Issuer;
//!
//! assert!(is_valid_cvv(Issuer::Visa, "123"));
//! assert!(is_valid_cvv(Issuer::AmericanExpress, "1234"));
//! assert!(!is_valid_cvv(Issuer::Visa, "1234"));
//! ```

use crate::Issuer;

/// Returns true if `cvv` has the length required by `issuer`.
///
/// Length is counted in characters.
#[inline]
pub fn is_valid_cvv(issuer: Issuer, cvv: &str) -> bool {
    cvv.chars().count() == issuer.cvv_length()
}
