//! Card number format and Luhn checksum checks.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! The string helpers ([`contains_only_numbers`], [`is_luhn_valid`]) are what the
//! validation engine calls on raw form input. The slice helpers work on
//! pre-parsed digit values (0-9, not ASCII).

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns true if `input` is non-empty and made only of ASCII digits.
///
/// # Example
///
/// ```
/// use cardform::luhn::contains_only_numbers;
///
/// assert!(contains_only_numbers("1234567891234567"));
/// assert!(!contains_only_numbers("123212AXXXA @"));
/// assert!(!contains_only_numbers(""));
/// ```
#[inline]
pub fn contains_only_numbers(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Checks a digit string against the Luhn checksum.
///
/// Callers are expected to run [`contains_only_numbers`] first. Any non-digit
/// character makes the result `false`; an empty string has a sum of zero and
/// passes, matching the checksum definition.
///
/// # Example
///
/// ```
/// use cardform::luhn::is_luhn_valid;
///
/// assert!(is_luhn_valid("4111111145551142"));
/// assert!(!is_luhn_valid("4888556622578475"));
/// ```
pub fn is_luhn_valid(number: &str) -> bool {
    let mut sum: u32 = 0;

    for (i, byte) in number.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return false;
        }
        let digit = byte - b'0';

        if i % 2 == 1 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
    }

    sum % 10 == 0
}

/// Validates a slice of digit values using the Luhn algorithm.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// Returns `false` for an empty slice.
///
/// # Example
///
/// ```
/// use cardform::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a slice of digit values.
///
/// Values above 9 are not valid digits and are clamped into the table range.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            let digit = digit.min(9);
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation.
///
/// # Example
///
/// ```
/// use cardform::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Appending a check digit shifts every existing digit one position left,
    // so the doubled positions are the even ones from the right here.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            let digit = digit.min(9);
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

/// Converts an ASCII digit string into digit values.
///
/// Returns `None` if any character is not an ASCII digit.
pub fn to_digits(number: &str) -> Option<Vec<u8>> {
    number
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}
