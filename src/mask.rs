//! Masking of raw card numbers for display and logging.
//!
//! Only the last four characters of a card number are ever shown. Inputs of
//! four characters or fewer are masked entirely.

/// Masks a card number, showing only its last four characters.
///
/// Format: `****-****-****-1234`
///
/// # Example
///
/// ```
/// use cardform::mask::mask_number;
///
/// assert_eq!(mask_number("4111111145551142"), "****-****-****-1142");
/// assert_eq!(mask_number("371449635398431"), "****-****-***8431");
/// assert_eq!(mask_number("123"), "***");
/// ```
pub fn mask_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    let len = chars.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + len / 4);

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    if masked_count % 4 == 0 {
        result.push('-');
    }

    result.extend(&chars[masked_count..]);
    result
}

/// Masks a short secret such as a CVV, keeping only its length visible.
#[inline]
pub fn mask_secret(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
