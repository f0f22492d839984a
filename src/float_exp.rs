//! `%e` / `%E` (exponential) and `%g` / `%G` (adaptive) rendering.
//!
//! `decompose_exp` (in `numeric`) finds the base-10 exponent without any
//! `log10`/`powf` call — `core` doesn't have them. The adaptive renderer
//! picks fixed vs. exponential form the way the reference implementation
//! does (spec §4.5); that same implementation, notably, never strips
//! trailing zeros from a `%g` result (confirmed against the upstream test
//! corpus — e.g. `%.6G` of `12345.` renders `"12345.0"`, not `"12345"`), so
//! neither does this one. The `#` flag's only remaining effect is forcing a
//! decimal point to show when no fractional digits were computed at all.

use crate::config;
use crate::float_fixed;
use crate::numeric;
use crate::sink::Sink;
use crate::spec::FormatSpec;

pub(crate) fn render_e(sink: &mut Sink, spec: &FormatSpec, value: f64) {
    if value.is_nan() {
        float_fixed::render_special(sink, spec, b"nan", false);
        return;
    }
    if value.is_infinite() {
        float_fixed::render_special(sink, spec, b"inf", value.is_sign_negative());
        return;
    }
    let negative = value.is_sign_negative();
    let abs_value = value.abs();
    let precision = if spec.flags.precision_given {
        spec.precision
    } else {
        6
    };
    render_e_core(sink, spec, negative, abs_value, precision);
}

pub(crate) fn render_g(sink: &mut Sink, spec: &FormatSpec, value: f64) {
    if value.is_nan() {
        float_fixed::render_special(sink, spec, b"nan", false);
        return;
    }
    if value.is_infinite() {
        float_fixed::render_special(sink, spec, b"inf", value.is_sign_negative());
        return;
    }
    let negative = value.is_sign_negative();
    let abs_value = value.abs();
    // A requested precision of 0 is treated as 1 (C99 7.21.6.1p5).
    let requested = if spec.flags.precision_given {
        spec.precision
    } else {
        6
    };
    let p = requested.max(1);

    let (_, exponent) = numeric::decompose_exp(abs_value);
    if exponent < -4 || exponent >= p as i32 {
        render_e_core(sink, spec, negative, abs_value, p - 1);
    } else {
        let frac_count = (p as i32 - 1 - exponent).max(0) as usize;
        float_fixed::render_fixed_core(sink, spec, negative, abs_value, frac_count);
    }
}

/// Shared `%e`/`%E` body. Used directly by `render_e`, by `render_g`'s
/// exponential branch, and by `%f`'s out-of-range fallback
/// (`float_fixed::render`), all of which need identical mantissa/exponent
/// rendering at a caller-chosen precision.
pub(crate) fn render_e_core(
    sink: &mut Sink,
    spec: &FormatSpec,
    negative: bool,
    abs_value: f64,
    precision: usize,
) {
    let (mantissa, mut exponent) = numeric::decompose_exp(abs_value);
    let clamped_precision = precision.min(config::MAX_FLOAT_PRECISION);
    let trailing_zero_pad = precision - clamped_precision;

    let (mut int_part, frac_value) = numeric::split_rounded(mantissa, clamped_precision);
    let mut frac_value = frac_value;
    if int_part == 10 {
        int_part = 1;
        exponent += 1;
        frac_value = 0;
    }

    let mut int_buf = [0u8; 4];
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

    let exp_sign = if exponent < 0 { b'-' } else { b'+' };
    let exp_mag = exponent.unsigned_abs() as u64;
    let mut natural_exp_digits = 1usize;
    let mut n = exp_mag;
    while n >= 10 {
        n /= 10;
        natural_exp_digits += 1;
    }
    // C99 requires at least two exponent digits, more only if needed.
    let exp_digit_count = natural_exp_digits.max(2);
    let mut exp_buf = [0u8; 8];
    numeric::fill_decimal(&mut exp_buf, exp_mag, exp_digit_count);

    let sign = sign_byte(spec, negative);
    let content_len = sign.is_some() as usize
        + int_digit_count
        + want_point as usize
        + frac_len
        + 2 // 'e'/'E' + sign
        + exp_digit_count;
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
    sink.emit(if spec.flags.uppercase { b'E' } else { b'e' });
    sink.emit(exp_sign);
    for k in 0..exp_digit_count {
        sink.emit(exp_buf[k]);
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
