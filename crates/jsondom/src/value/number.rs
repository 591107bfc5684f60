//! Number helpers shared by the lenient accessors and the serializer.
use core::fmt;

/// Largest magnitude below which every integral `f64` is exactly representable.
pub(crate) const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

#[inline]
fn skip_whitespace(input: &str) -> &str {
    // Same set as C `isspace`: includes vertical tab.
    input.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}

#[inline]
fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

#[inline]
fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse the leading integer of `input`, ignoring trailing text.
///
/// Returns `None` when there is no leading integer or it does not fit into `i64`.
pub(crate) fn parse_integer_prefix(input: &str) -> Option<i64> {
    let input = skip_whitespace(input);
    let bytes = input.as_bytes();
    let sign = sign_len(bytes);
    let digits = digits_len(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    input[..sign + digits].parse().ok()
}

/// Magnitude of a hexadecimal floating literal like `0x1.8p3` at the start of `input`.
///
/// Returns `None` unless `0x` is followed by at least one hex digit.
fn parse_hex_prefix(input: &str) -> Option<f64> {
    let bytes = input.as_bytes();
    if !matches!(bytes, [b'0', b'x' | b'X', ..]) {
        return None;
    }
    let mut mantissa = 0.0_f64;
    let mut exponent: i32 = 0;
    let mut digits = 0;
    let mut position = 2;
    let mut fraction = false;
    while let Some(&byte) = bytes.get(position) {
        position += 1;
        if byte == b'.' && !fraction {
            fraction = true;
            continue;
        }
        let Some(digit) = char::from(byte).to_digit(16) else {
            position -= 1;
            break;
        };
        mantissa = mantissa * 16.0 + f64::from(digit);
        if fraction {
            exponent = exponent.saturating_sub(4);
        }
        digits += 1;
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(position), Some(b'p' | b'P')) {
        let tail = &input[position + 1..];
        let sign = sign_len(tail.as_bytes());
        let count = digits_len(&tail.as_bytes()[sign..]);
        if count > 0 {
            let power = tail[..sign + count].parse().unwrap_or(if tail.starts_with('-') {
                i32::MIN
            } else {
                i32::MAX
            });
            exponent = exponent.saturating_add(power);
        }
    }
    Some(mantissa * 2.0_f64.powi(exponent))
}

/// Parse the leading floating-point number of `input`, ignoring trailing text.
///
/// Accepts hexadecimal literals (`0x1A`, `0x1.8p3`), and `inf`, `infinity` or `nan` in any
/// case. Returns `None` when there is no leading number or a finite literal overflows `f64`.
pub(crate) fn parse_decimal_prefix(input: &str) -> Option<f64> {
    let input = skip_whitespace(input);
    let bytes = input.as_bytes();
    let sign = sign_len(bytes);
    let negative = bytes.first() == Some(&b'-');
    let rest = &input[sign..];

    for (literal, value) in [
        ("infinity", f64::INFINITY),
        ("inf", f64::INFINITY),
        ("nan", f64::NAN),
    ] {
        if rest
            .get(..literal.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(literal))
        {
            return Some(if negative { -value } else { value });
        }
    }

    if let Some(magnitude) = parse_hex_prefix(rest) {
        return magnitude
            .is_finite()
            .then_some(if negative { -magnitude } else { magnitude });
    }

    let bytes = rest.as_bytes();
    let integral = digits_len(bytes);
    let mut end = integral;
    let mut fractional = 0;
    if bytes.get(end) == Some(&b'.') {
        fractional = digits_len(&bytes[end + 1..]);
        end += 1 + fractional;
    }
    if integral + fractional == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent_sign = sign_len(&bytes[end + 1..]);
        let exponent = digits_len(&bytes[end + 1 + exponent_sign..]);
        if exponent > 0 {
            end += 1 + exponent_sign + exponent;
        }
    }
    let parsed: f64 = input[..sign + end].parse().ok()?;
    if parsed.is_finite() {
        Some(parsed)
    } else {
        None
    }
}

/// Write `number` as a JSON number literal.
///
/// Integral values within the exactly representable range have no fraction, non-finite values
/// are written as `null`.
pub(crate) fn write_number<W: fmt::Write>(writer: &mut W, number: f64) -> fmt::Result {
    if !number.is_finite() {
        return writer.write_str("null");
    }
    if number.fract() == 0.0 && number.abs() < MAX_SAFE_INTEGER {
        // NOTE: Exact, the check above keeps the value within `i64`
        #[allow(clippy::cast_possible_truncation)]
        let integer = number as i64;
        let mut buffer = itoa::Buffer::new();
        return writer.write_str(buffer.format(integer));
    }
    write!(writer, "{number:?}")
}
