//! Keystroke masks for the phone, postal-code and date inputs.
//!
//! Masks only reshape; they never reject. Each one keeps the ASCII digits of
//! its input, caps them and lays them out progressively, so applying a mask
//! to its own output is a no-op.

const PHONE_DIGITS: usize = 11;
const CEP_DIGITS: usize = 8;
const DATE_DIGITS: usize = 8;

/// Remove all non-digit characters.
pub fn unmask(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn capped_digits(value: &str, max: usize) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// `(DD) DDDDD-DDDD`, built up as the user types.
pub fn mask_phone(value: &str) -> String {
    let digits = capped_digits(value, PHONE_DIGITS);
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// `DDDDD-DDD`
pub fn mask_cep(value: &str) -> String {
    let digits = capped_digits(value, CEP_DIGITS);
    if digits.len() <= 5 {
        return digits;
    }
    format!("{}-{}", &digits[..5], &digits[5..])
}

/// `DD/MM/DDDD`
pub fn mask_date(value: &str) -> String {
    let digits = capped_digits(value, DATE_DIGITS);
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Canonical form of a submitted field value: masked for the masked inputs,
/// trimmed for everything else.
pub fn normalize_field(field: &str, value: &str) -> String {
    match field {
        "whatsapp" => mask_phone(value),
        "cep" => mask_cep(value),
        "nascimento" => mask_date(value),
        _ => value.trim().to_string(),
    }
}
