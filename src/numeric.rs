//! Digit rendering shared by the integer and float renderers.
//!
//! Every conversion fills a stack buffer back to front, the same technique
//! as the teacher's `u32_to_base`/`put_buf_range` (`io/fmt.rs`), generalized
//! from a single 32-bit radix table to the full 2/8/10/16 matrix and from
//! `u32` to `u64` magnitudes. `core` has no `log10`/`powf`/`exp` (those need
//! `libm`, unavailable here), so the exponent search below only ever
//! multiplies, divides and compares.

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Powers of ten up to 10^12 — enough to scale a fraction to
/// `config::MAX_FLOAT_PRECISION` digits under every `MAX_FLOAT_PRECISION`
/// feature setting (9 by default, 12 with `float-precision-12`).
pub(crate) const POW10: [u64; 13] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
];

/// Render `value` in `base` (2, 8, 10 or 16) into the tail of `buf`. Returns
/// the start index of the written digits — `buf[start..]` holds them, most
/// significant first. A value whose digit count exceeds `buf.len()` is
/// truncated to the least-significant `buf.len()` digits (spec §5).
pub(crate) fn render_uint(mut value: u64, base: u32, uppercase: bool, buf: &mut [u8]) -> usize {
    let digits = if uppercase { DIGITS_UPPER } else { DIGITS_LOWER };
    let len = buf.len();
    if value == 0 {
        buf[len - 1] = b'0';
        return len - 1;
    }
    let mut i = len;
    while value > 0 && i > 0 {
        i -= 1;
        buf[i] = digits[(value % base as u64) as usize];
        value /= base as u64;
    }
    i
}

/// Fill the front of `buf` with the zero-padded decimal digits of `value`,
/// as a `digit_count`-digit field. Returns the number of bytes written,
/// which is `digit_count` unless that exceeds `buf.len()` (truncated to the
/// scratch cap, per spec §5 — only reachable with an absurd requested
/// precision).
pub(crate) fn fill_decimal(buf: &mut [u8], value: u64, digit_count: usize) -> usize {
    let mut scratch = [0u8; 20];
    let mut v = value;
    let mut i = scratch.len();
    if v == 0 {
        i -= 1;
        scratch[i] = b'0';
    } else {
        while v > 0 {
            i -= 1;
            scratch[i] = b'0' + (v % 10) as u8;
            v /= 10;
        }
    }
    let natural = scratch.len() - i;
    let total = digit_count.min(buf.len());
    let zeros = total.saturating_sub(natural);
    for slot in buf.iter_mut().take(zeros) {
        *slot = b'0';
    }
    let copy_len = total - zeros;
    let src_start = scratch.len() - copy_len;
    buf[zeros..total].copy_from_slice(&scratch[src_start..]);
    total
}

/// Split a non-negative `value` into an integer part and a `precision`-digit
/// fractional part, rounding the fraction to nearest with ties-to-even
/// (spec §4.4). `precision` must be <= 12 (the `POW10` table's range, which
/// covers every `config::MAX_FLOAT_PRECISION` feature setting). If the
/// rounded fraction reaches `10^precision`, the integer part is incremented
/// and the fraction resets to 0.
pub(crate) fn split_rounded(value: f64, precision: usize) -> (u64, u64) {
    let int_part_f = value.trunc();
    let mut int_part = int_part_f as u64;
    let frac = value - int_part_f;
    let scale = POW10[precision] as f64;
    let scaled = frac * scale;
    let floor_val = scaled.trunc();
    let mut rounded = floor_val as u64;
    let remainder = scaled - floor_val;
    if remainder > 0.5 {
        rounded += 1;
    } else if remainder == 0.5 && rounded % 2 != 0 {
        rounded += 1;
    }
    if rounded >= POW10[precision] {
        rounded -= POW10[precision];
        int_part += 1;
    }
    (int_part, rounded)
}

/// `10^exp` as `f64`, via binary exponentiation over a small table of
/// powers of ten rather than a transcendental call. `exp` may be negative.
pub(crate) fn pow10f(exp: i32) -> f64 {
    const TAB: [f64; 9] = [1e1, 1e2, 1e4, 1e8, 1e16, 1e32, 1e64, 1e128, 1e256];
    let neg = exp < 0;
    let mut e = exp.unsigned_abs();
    let mut result = 1.0f64;
    let mut idx = 0;
    while e != 0 {
        if e & 1 == 1 {
            result *= TAB[idx];
        }
        idx += 1;
        e >>= 1;
    }
    if neg {
        1.0 / result
    } else {
        result
    }
}

/// Decompose `value >= 0` into a mantissa in `[1, 10)` and a base-10
/// exponent such that `mantissa * 10^exponent` approximates `value`.
///
/// The exponent is first estimated by repeated multiply/divide by 10 (cheap,
/// bounded by the ~308-decade range of `f64`), then the mantissa is
/// recomputed once from the table-based `pow10f` and nudged by at most one
/// step if that recomputation crossed a decade boundary — the "Newton-style
/// correction" spec §4.5 describes.
pub(crate) fn decompose_exp(value: f64) -> (f64, i32) {
    if value == 0.0 {
        return (0.0, 0);
    }
    let mut v = value;
    let mut exponent = 0i32;
    while v >= 10.0 {
        v /= 10.0;
        exponent += 1;
    }
    while v < 1.0 {
        v *= 10.0;
        exponent -= 1;
    }
    let mut mantissa = value / pow10f(exponent);
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    } else if mantissa < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }
    (mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uint_basic_bases() {
        let mut buf = [0u8; 32];
        let start = render_uint(255, 16, false, &mut buf);
        assert_eq!(&buf[start..], b"ff");
        let start = render_uint(255, 16, true, &mut buf);
        assert_eq!(&buf[start..], b"FF");
        let start = render_uint(5, 2, false, &mut buf);
        assert_eq!(&buf[start..], b"101");
        let start = render_uint(0, 10, false, &mut buf);
        assert_eq!(&buf[start..], b"0");
    }

    #[test]
    fn split_rounded_ties_to_even() {
        assert_eq!(split_rounded(4.5, 0), (4, 0));
        assert_eq!(split_rounded(3.5, 0), (4, 0));
        assert_eq!(split_rounded(1.55, 0), (2, 0));
        assert_eq!(split_rounded(3.49, 1), (3, 5));
    }

    #[test]
    fn split_rounded_carries_into_integer_part() {
        let (int_part, frac) = split_rounded(0.999999999, 0);
        assert_eq!((int_part, frac), (1, 0));
    }

    #[test]
    fn decompose_exp_round_trips_common_values() {
        let (m, e) = decompose_exp(42167.0);
        assert_eq!(e, 4);
        assert!((m - 4.2167).abs() < 1e-9);

        let (m, e) = decompose_exp(8.34e-7);
        assert_eq!(e, -7);
        assert!((m - 8.34).abs() < 1e-9);
    }

    #[test]
    fn fill_decimal_pads_and_truncates() {
        let mut buf = [0u8; 8];
        let n = fill_decimal(&mut buf, 7, 4);
        assert_eq!(&buf[..n], b"0007");
        let n = fill_decimal(&mut buf, 123, 3);
        assert_eq!(&buf[..n], b"123");
    }
}
