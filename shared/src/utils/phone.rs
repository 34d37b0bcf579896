//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is valid")
});

/// Number of trailing characters left visible by [`mask_phone_number`]
const VISIBLE_SUFFIX: usize = 4;

/// Check if a phone number is in international E.164 format.
///
/// The input is matched as given; no formatting characters are stripped.
pub fn is_valid_international_phone(phone: &str) -> bool {
    INTERNATIONAL_PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for display and logs (e.g. `********1234`).
///
/// Every character except the last four becomes `*`. Inputs of four
/// characters or fewer are returned unchanged.
pub fn mask_phone_number(phone: &str) -> String {
    let len = phone.chars().count();
    if len <= VISIBLE_SUFFIX {
        return phone.to_string();
    }

    let hidden = len - VISIBLE_SUFFIX;
    phone
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { '*' } else { c })
        .collect()
}
