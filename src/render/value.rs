//! Fixed-width scientific notation value strings.

/// Fraction digits past which an `f64` mantissa is all zeros (its exact
/// decimal expansion has at most 767 significant digits).
const EXACT_FRACTION_DIGITS: usize = 800;

/// `d.ddde±XX`: `sf` fraction digits and at least two exponent digits.
/// Non-finite values print as `nan`, `inf` and `-inf`.
#[must_use]
pub fn scientific(value: f64, sf: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    // Runtime precision is capped at u16; beyond the exact digits only
    // zeros follow, so append them by hand.
    let precision = sf.min(EXACT_FRACTION_DIGITS);
    // std gives `1.20e1` / `1.20e-5`; pad the exponent out.
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            let mut out = String::with_capacity(sf + 8);
            out.push_str(mantissa);
            out.extend(std::iter::repeat_n('0', sf - precision));
            out.push('e');
            out.push(sign);
            if digits.len() < 2 {
                out.push('0');
            }
            out.push_str(digits);
            out
        }
        None => raw,
    }
}

/// [`scientific`] left-padded with `pad` to `width` chars.
#[must_use]
pub fn value_string(value: f64, sf: usize, width: usize, pad: char) -> String {
    let text = scientific(value, sf);
    let len = text.chars().count();
    let mut out = String::with_capacity(width.max(len));
    out.extend(std::iter::repeat_n(pad, width.saturating_sub(len)));
    out.push_str(&text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_has_sign_and_two_digits() {
        assert_eq!(scientific(12.0, 2), "1.20e+01");
        assert_eq!(scientific(-0.000_314, 2), "-3.14e-04");
        assert_eq!(scientific(0.0, 2), "0.00e+00");
        assert_eq!(scientific(1e100, 1), "1.0e+100");
        assert_eq!(scientific(6.0, 0), "6e+00");
    }

    #[test]
    fn huge_precision_is_exact() {
        let s = scientific(0.1, 70_000);
        assert_eq!(s.len(), "0.".len() + 70_000 + "e-01".len());
        assert!(s.starts_with("1.000000000000000055511151231257827"));
        assert!(s.ends_with("000e-01"));
        assert_eq!(scientific(-2.0, 1_000), format!("-2.{}e+00", "0".repeat(1_000)));
    }

    #[test]
    fn specials() {
        assert_eq!(scientific(f64::NAN, 2), "nan");
        assert_eq!(scientific(f64::INFINITY, 2), "inf");
        assert_eq!(scientific(f64::NEG_INFINITY, 2), "-inf");
    }

    #[test]
    fn padded_to_width() {
        assert_eq!(value_string(12.0, 2, 9, ' '), " 1.20e+01");
        assert_eq!(value_string(-12.0, 2, 9, ' '), "-1.20e+01");
        assert_eq!(value_string(1.0, 2, 9, '+'), "+1.00e+00");
        assert_eq!(value_string(f64::NAN, 2, 9, 'X'), "XXXXXXnan");
        assert_eq!(value_string(1e100, 2, 9, ' '), "1.00e+100");
    }
}
