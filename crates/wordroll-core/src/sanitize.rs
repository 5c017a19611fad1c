//! Word-count sanitization for untrusted request input.
//!
//! Negatives count as their absolute value and fractions are floored.
//! Values above [`MAX_WORD_COUNT`] are capped; zero and not-a-number become
//! [`DEFAULT_WORD_COUNT`].

/// Word count used when the request does not supply a usable one.
pub const DEFAULT_WORD_COUNT: usize = 6;

/// Largest word count served per request.
pub const MAX_WORD_COUNT: usize = 1000;

/// Smallest word count served per request.
pub const MIN_WORD_COUNT: usize = 1;

/// Sanitize a numeric word count: `min(floor(|x|), 1000)`, or 6 for 0/NaN.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn sanitize_count(raw: f64) -> usize {
    // `f64::min` would swallow NaN, so it is handled first.
    if raw.is_nan() {
        return DEFAULT_WORD_COUNT;
    }
    let capped = raw.abs().floor().min(MAX_WORD_COUNT as f64);
    if capped < 1.0 {
        return DEFAULT_WORD_COUNT;
    }
    // 1.0 <= capped <= 1000.0, so the cast is exact.
    capped as usize
}

/// Sanitize a word count taken from a URL path segment.
///
/// Surrounding whitespace is ignored and an empty segment counts as zero.
/// Decimal and exponent forms, `0x`/`0o`/`0b` integer literals and the
/// exact spelling `Infinity` are numbers; anything else (including `inf`
/// or `nan`) counts as NaN.
#[must_use]
pub fn parse_count(raw: &str) -> usize {
    sanitize_count(parse_number(raw.trim()))
}

fn parse_number(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    if let Some((radix, digits)) = radix_literal(text) {
        return parse_radix_digits(digits, radix);
    }
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

/// Split an unsigned `0x`/`0o`/`0b` literal into its radix and digits.
fn radix_literal(text: &str) -> Option<(u32, &str)> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    text.get(2..).map(|digits| (radix, digits))
}

fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
        })
        .unwrap_or(f64::NAN)
}
