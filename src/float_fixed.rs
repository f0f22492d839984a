//! `%f` / `%F` — fixed-point decimal rendering.
//!
//! Gated behind the `float` feature (see `config`); `#[cfg(not(feature =
//! "exponential"))]` on the out-of-range branch mirrors the reference's own
//! `PRINTF_DISABLE_SUPPORT_EXPONENTIAL` fallback: when exponential support
//! is compiled out, a magnitude too large for the fixed-point path simply
//! renders as nothing rather than pulling in the exponential renderer.

use crate::config;
use crate::numeric;
use crate::sink::Sink;
use crate::spec::FormatSpec;

/// Magnitudes at or above this render as nothing (or fall back to
/// exponential form) rather than fixed-point — beyond this point the
/// integer part would outgrow the `u64` scratch decomposition in
/// `numeric::split_rounded` (spec §4.3).
const FIXED_EXP_THRESHOLD: f64 = 1e17;

/// Reciprocal of `FIXED_EXP_THRESHOLD`. Nonzero magnitudes below this round
/// away to nothing once scaled to `MAX_FLOAT_PRECISION` digits, so they fall
/// back to exponential the same way magnitudes at or above the upper
/// threshold do (`TEST_CASE("various large exponents")` exercises both
/// directions, down to `1e-307`).
const FIXED_EXP_LOWER_THRESHOLD: f64 = 1e-17;

pub(crate) fn render(sink: &mut Sink, spec: &FormatSpec, value: f64) {
    if value.is_nan() {
        render_special(sink, spec, b"nan", false);
        return;
    }
    if value.is_infinite() {
        render_special(sink, spec, b"inf", value.is_sign_negative());
        return;
    }

    let negative = value.is_sign_negative();
    let abs_value = value.abs();
    let out_of_range = abs_value >= FIXED_EXP_THRESHOLD
        || (abs_value != 0.0 && abs_value < FIXED_EXP_LOWER_THRESHOLD);

    let precision = if spec.flags.precision_given {
        spec.precision
    } else {
        6
    };

    if out_of_range {
        #[cfg(feature = "exponential")]
        {
            crate::float_exp::render_e_core(sink, spec, negative, abs_value, precision);
        }
        return;
    }

    render_fixed_core(sink, spec, negative, abs_value, precision);
}

/// Render `abs_value` in fixed-point with exactly `precision` fractional
/// digits. Shared with `%g`'s fixed-form branch (`float_exp::render_g`),
/// which computes its own effective precision from the significant-digit
/// count before calling in here.
pub(crate) fn render_fixed_core(
    sink: &mut Sink,
    spec: &FormatSpec,
    negative: bool,
    abs_value: f64,
    precision: usize,
) {
    let clamped_precision = precision.min(config::MAX_FLOAT_PRECISION);
    let trailing_zero_pad = precision - clamped_precision;

    let (int_part, frac_value) = numeric::split_rounded(abs_value, clamped_precision);

    let mut int_buf = [0u8; config::FLOAT_DIGITS_BUF_LEN];
    let int_start = numeric::render_uint(int_part, 10, false, &mut int_buf);
    let int_digit_count = int_buf.len() - int_start;

    let mut frac_buf = [0u8; config::FLOAT_DIGITS_BUF_LEN];
    let mut frac_len = numeric::fill_decimal(&mut frac_buf, frac_value, clamped_precision);
    let zero_tail = trailing_zero_pad.min(frac_buf.len() - frac_len);
    for b in &mut frac_buf[frac_len..frac_len + zero_tail] {
        *b = b'0';
    }
    frac_len += zero_tail;

    let want_point = frac_len > 0 || spec.flags.hash;

    let sign = sign_byte(spec, negative);
    let content_len =
        sign.is_some() as usize + int_digit_count + want_point as usize + frac_len;
    let pad_total = spec.width.saturating_sub(content_len);
    let zero_pad = spec.flags.zero_pad && !spec.flags.left_justify;

    if !spec.flags.left_justify && !zero_pad {
        sink.emit_n(b' ', pad_total);
    }
    if let Some(b) = sign {
        sink.emit(b);
    }
    if !spec.flags.left_justify && zero_pad {
        sink.emit_n(b'0', pad_total);
    }
    for k in 0..int_digit_count {
        sink.emit(int_buf[int_start + k]);
    }
    if want_point {
        sink.emit(b'.');
    }
    for k in 0..frac_len {
        sink.emit(frac_buf[k]);
    }
    if spec.flags.left_justify {
        sink.emit_n(b' ', pad_total);
    }
}

fn sign_byte(spec: &FormatSpec, negative: bool) -> Option<u8> {
    if negative {
        Some(b'-')
    } else if spec.flags.plus {
        Some(b'+')
    } else if spec.flags.space {
        Some(b' ')
    } else {
        None
    }
}

/// Shared `nan`/`inf` rendering for `%f`/`%F`/`%e`/`%E`/`%g`/`%G`. Never
/// zero-padded, per spec §7 — a zero-fill before "nan" would be nonsensical.
pub(crate) fn render_special(sink: &mut Sink, spec: &FormatSpec, word: &[u8], negative: bool) {
    let sign = sign_byte(spec, negative);
    let content_len = sign.is_some() as usize + word.len();
    let pad_total = spec.width.saturating_sub(content_len);

    if !spec.flags.left_justify {
        sink.emit_n(b' ', pad_total);
    }
    if let Some(b) = sign {
        sink.emit(b);
    }
    for &b in word {
        sink.emit(if spec.flags.uppercase {
            b.to_ascii_uppercase()
        } else {
            b
        });
    }
    if spec.flags.left_justify {
        sink.emit_n(b' ', pad_total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Flags, Kind};

    fn spec(flags: Flags, width: usize, precision: usize) -> FormatSpec {
        FormatSpec {
            flags,
            width,
            precision,
            base: 10,
            kind: Kind::FloatFixed,
            raw_specifier: b'f',
        }
    }

    fn render_to_string(value: f64, s: &FormatSpec) -> std::string::String {
        let mut storage = [0u8; 64];
        let mut out = std::string::String::new();
        {
            let mut sink = Sink::buffer(&mut storage);
            render(&mut sink, s, value);
            let n = sink.position().min(storage.len());
            out.push_str(core::str::from_utf8(&storage[..n]).unwrap());
        }
        out
    }

    #[test]
    fn default_precision_is_six() {
        let s = spec(Flags::default(), 0, 0);
        assert_eq!(render_to_string(42167.0, &s), "42167.000000");
    }

    #[test]
    fn precision_clamp_pads_with_zeros_beyond_nine() {
        let flags = Flags { precision_given: true, ..Flags::default() };
        let s = spec(flags, 0, 12);
        assert_eq!(render_to_string(42.89522312345678, &s), "42.895223123000");
    }

    #[test]
    fn width_and_precision_three() {
        let flags = Flags { precision_given: true, ..Flags::default() };
        let s = spec(flags, 10, 3);
        assert_eq!(render_to_string(42167.0, &s), " 42167.000");
    }

    #[test]
    fn out_of_range_falls_back_to_exponential() {
        let flags = Flags { precision_given: true, ..Flags::default() };
        let s = spec(flags, 0, 1);
        assert_eq!(render_to_string(1e20, &s), "1.0e+20");
    }

    #[test]
    fn small_magnitude_falls_back_to_exponential() {
        // TEST_CASE("various large exponents") exercises this down to
        // 1e-307 for plain %f, not just %g.
        let flags = Flags { precision_given: true, ..Flags::default() };
        let s = spec(flags, 9, 3);
        assert_eq!(render_to_string(1e-17, &s), "1.000e-17");
        assert_eq!(render_to_string(1e-307, &s), "1.000e-307");
    }

    #[test]
    fn nan_and_infinity() {
        let s = spec(Flags::default(), 0, 0);
        assert_eq!(render_to_string(f64::NAN, &s), "nan");
        assert_eq!(render_to_string(f64::NEG_INFINITY, &s), "-inf");
    }
}
