//! Integer, character, string and pointer rendering.
//!
//! Each `render_*` function computes every flag/width/precision-dependent
//! length up front (digit count, prefix, sign), then makes one left-to-right
//! pass over the sink — padding, sign, prefix, zero-fill, digits, trailing
//! pad — so nothing is ever emitted out of order or un-emitted. Digit
//! generation itself reuses `numeric::render_uint`, the teacher's
//! `u32_to_base` generalized to 64 bits and to the 2/8/10/16 radix matrix.

use crate::config;
use crate::numeric;
use crate::sink::Sink;
use crate::spec::FormatSpec;

enum Signedness {
    Unsigned,
    NonNegative,
    Negative,
}

pub(crate) fn render_signed(sink: &mut Sink, spec: &FormatSpec, value: i64) {
    if value < 0 {
        let magnitude = (value as i128).unsigned_abs() as u64;
        render_core(sink, spec, Signedness::Negative, magnitude);
    } else {
        render_core(sink, spec, Signedness::NonNegative, value as u64);
    }
}

pub(crate) fn render_unsigned(sink: &mut Sink, spec: &FormatSpec, value: u64) {
    render_core(sink, spec, Signedness::Unsigned, value);
}

fn sign_byte(spec: &FormatSpec, sign: &Signedness) -> Option<u8> {
    match sign {
        Signedness::Negative => Some(b'-'),
        Signedness::NonNegative => {
            if spec.flags.plus {
                Some(b'+')
            } else if spec.flags.space {
                Some(b' ')
            } else {
                None
            }
        }
        Signedness::Unsigned => None,
    }
}

fn render_core(sink: &mut Sink, spec: &FormatSpec, sign: Signedness, magnitude: u64) {
    let uppercase = spec.flags.uppercase;
    let base = spec.base as u32;
    let mut buf = [0u8; config::INT_DIGITS_BUF_LEN];
    let start = numeric::render_uint(magnitude, base, uppercase, &mut buf);
    let natural_digits = buf.len() - start;

    let precision = if spec.flags.precision_given {
        spec.precision
    } else {
        1
    };
    // "d"/"i"/"u"/"o"/"x"/"X"/"b" of value 0 with an explicit precision of 0
    // render as nothing at all (C99 7.21.6.1p6) — except octal's '#', below.
    let suppress_zero_value = magnitude == 0 && spec.flags.precision_given && spec.precision == 0;

    let mut digit_count = if suppress_zero_value { 0 } else { natural_digits };
    let mut zero_prefix = if suppress_zero_value {
        0
    } else {
        precision.saturating_sub(natural_digits)
    };

    if spec.flags.hash && base == 8 {
        // '#' on octal guarantees at least one visible leading zero.
        let has_leading_zero = zero_prefix > 0 || (digit_count > 0 && buf[start] == b'0');
        if !has_leading_zero {
            if digit_count == 0 {
                digit_count = natural_digits;
            } else {
                zero_prefix = 1;
            }
        }
    }

    let want_alt_prefix = spec.flags.hash && magnitude != 0 && matches!(base, 16 | 2);
    let (prefix_a, prefix_b): (u8, u8) = if want_alt_prefix {
        match (base, uppercase) {
            (16, false) => (b'0', b'x'),
            (16, true) => (b'0', b'X'),
            (2, false) => (b'0', b'b'),
            _ => (0, 0),
        }
    } else {
        (0, 0)
    };
    let prefix_len = (prefix_a != 0) as usize + (prefix_b != 0) as usize;

    let sign = sign_byte(spec, &sign);
    let sign_len = sign.is_some() as usize;

    let content_len = sign_len + prefix_len + zero_prefix + digit_count;
    let pad_total = spec.width.saturating_sub(content_len);
    // '0' is ignored when left-justified or when an integer precision was
    // given explicitly (spec §4.2) — floats don't share this exception.
    let zero_pad = spec.flags.zero_pad && !spec.flags.left_justify && !spec.flags.precision_given;

    if !spec.flags.left_justify && !zero_pad {
        sink.emit_n(b' ', pad_total);
    }
    if let Some(b) = sign {
        sink.emit(b);
    }
    if prefix_a != 0 {
        sink.emit(prefix_a);
    }
    if prefix_b != 0 {
        sink.emit(prefix_b);
    }
    if !spec.flags.left_justify && zero_pad {
        sink.emit_n(b'0', pad_total);
    }
    sink.emit_n(b'0', zero_prefix);
    for k in 0..digit_count {
        sink.emit(buf[start + k]);
    }
    if spec.flags.left_justify {
        sink.emit_n(b' ', pad_total);
    }
}

pub(crate) fn render_char(sink: &mut Sink, spec: &FormatSpec, c: u8) {
    let pad_total = spec.width.saturating_sub(1);
    if !spec.flags.left_justify {
        sink.emit_n(b' ', pad_total);
    }
    sink.emit(c);
    if spec.flags.left_justify {
        sink.emit_n(b' ', pad_total);
    }
}

pub(crate) fn render_str(sink: &mut Sink, spec: &FormatSpec, s: &[u8]) {
    let max_len = if spec.flags.precision_given {
        spec.precision
    } else {
        s.len()
    };
    let len = s.len().min(max_len);
    let pad_total = spec.width.saturating_sub(len);
    if !spec.flags.left_justify {
        sink.emit_n(b' ', pad_total);
    }
    for &b in &s[..len] {
        sink.emit(b);
    }
    if spec.flags.left_justify {
        sink.emit_n(b' ', pad_total);
    }
}

/// `%p` zero-pads to the host pointer width in hex, uppercase, with no `0x`
/// prefix — matching the reference implementation's minimal pointer
/// rendering rather than glibc's `0x...`/`(nil)` convention.
pub(crate) fn render_pointer(sink: &mut Sink, spec: &FormatSpec, addr: u64) {
    let ptr_digits = core::mem::size_of::<usize>() * 2;
    let mut buf = [0u8; config::INT_DIGITS_BUF_LEN];
    let start = numeric::render_uint(addr, 16, true, &mut buf);
    let natural = buf.len() - start;
    let zero_prefix = ptr_digits.saturating_sub(natural);
    let content_len = zero_prefix + natural;
    let pad_total = spec.width.saturating_sub(content_len);

    if !spec.flags.left_justify {
        sink.emit_n(b' ', pad_total);
    }
    sink.emit_n(b'0', zero_prefix);
    for k in 0..natural {
        sink.emit(buf[start + k]);
    }
    if spec.flags.left_justify {
        sink.emit_n(b' ', pad_total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Flags, Kind};

    fn spec(flags: Flags, width: usize, precision: usize, base: u8) -> FormatSpec {
        FormatSpec {
            flags,
            width,
            precision,
            base,
            kind: Kind::IntSigned,
            raw_specifier: b'd',
        }
    }

    fn render_to_string(f: impl FnOnce(&mut Sink)) -> std::string::String {
        let mut storage = [0u8; 64];
        let mut out = std::string::String::new();
        {
            let mut sink = Sink::buffer(&mut storage);
            f(&mut sink);
            let n = sink.position().min(storage.len());
            out.push_str(core::str::from_utf8(&storage[..n]).unwrap());
        }
        out
    }

    #[test]
    fn zero_precision_zero_value_is_empty() {
        let mut flags = Flags::default();
        flags.precision_given = true;
        let s = spec(flags, 0, 0, 10);
        let out = render_to_string(|sink| render_signed(sink, &s, 0));
        assert_eq!(out, "");
    }

    #[test]
    fn width_and_precision_combine_with_sign() {
        let mut flags = Flags::default();
        flags.precision_given = true;
        flags.zero_pad = true;
        let s = spec(flags, 20, 5, 10);
        let out = render_to_string(|sink| render_signed(sink, &s, -1024));
        assert_eq!(out, "              -01024");
    }

    #[test]
    fn hash_hex_prefix_zero_pads_between_prefix_and_digits() {
        let mut flags = Flags::default();
        flags.hash = true;
        flags.zero_pad = true;
        flags.uppercase = false;
        let s = spec(flags, 20, 0, 16);
        let out = render_to_string(|sink| render_unsigned(sink, &s, 305441741));
        assert_eq!(out, "0x00000000001234abcd");
    }

    #[test]
    fn octal_hash_forces_leading_zero() {
        let flags = Flags { hash: true, ..Flags::default() };
        let s = spec(flags, 0, 0, 8);
        let out = render_to_string(|sink| render_unsigned(sink, &s, 8));
        assert_eq!(out, "010");
    }

    #[test]
    fn left_justified_string_precision_truncates() {
        let mut flags = Flags::default();
        flags.left_justify = true;
        flags.precision_given = true;
        let s = spec(flags, 6, 3, 10);
        let out = render_to_string(|sink| render_str(sink, &s, b"hello"));
        assert_eq!(out, "hel   ");
    }
}
