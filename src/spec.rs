//! Conversion-specifier parsing.
//!
//! Walks `% flags* width? (.precision?)? length? specifier` out of the
//! format string, the same byte-cursor style as the teacher's `parse_spec`
//! (`io/fmt.rs`), generalized from its 5-case `{:x}` grammar to the full C
//! flag/width/precision/length matrix. `*` width and precision pull an `int`
//! argument off the same cursor the conversion itself will read from,
//! mirroring C's left-to-right `va_arg` consumption order.

use crate::args::ArgList;

/// One conversion's flag set. A plain `bool`-field struct rather than a
/// bitflags type — there's no need to treat these as a packed word, and the
/// field names read directly at each call site.
#[derive(Copy, Clone, Default)]
pub(crate) struct Flags {
    pub(crate) left_justify: bool,
    pub(crate) plus: bool,
    pub(crate) space: bool,
    pub(crate) hash: bool,
    pub(crate) zero_pad: bool,
    pub(crate) precision_given: bool,
    pub(crate) adapt_exp: bool,
    pub(crate) uppercase: bool,
    pub(crate) char_len: bool,
    pub(crate) short: bool,
    pub(crate) long: bool,
    pub(crate) long_long: bool,
    pub(crate) intmax: bool,
    pub(crate) size_t: bool,
    pub(crate) ptrdiff: bool,
}

/// What a conversion renders as. `Unknown` carries no extra data — the
/// engine re-reads `raw_specifier` off the spec to emit it literally.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum Kind {
    IntSigned,
    IntUnsigned,
    Char,
    Str,
    Pointer,
    #[cfg(feature = "float")]
    FloatFixed,
    #[cfg(feature = "exponential")]
    FloatExp,
    #[cfg(feature = "exponential")]
    FloatAdapt,
    Percent,
    Unknown,
}

/// A fully parsed `%...` conversion, ready for the engine to dispatch.
pub(crate) struct FormatSpec {
    pub(crate) flags: Flags,
    pub(crate) width: usize,
    pub(crate) precision: usize,
    pub(crate) base: u8,
    pub(crate) kind: Kind,
    pub(crate) raw_specifier: u8,
}

/// Parse one conversion starting at `*pos` (the byte just after `%`).
/// Advances `*pos` past the specifier character (or to end-of-string if the
/// format ends before one is found) and, for `*` width/precision, pulls an
/// argument off `args` before the conversion's own value is fetched.
pub(crate) fn parse(bytes: &[u8], pos: &mut usize, args: &mut ArgList) -> FormatSpec {
    let mut flags = Flags::default();

    loop {
        match bytes.get(*pos) {
            Some(b'-') => flags.left_justify = true,
            Some(b'+') => flags.plus = true,
            Some(b' ') => flags.space = true,
            Some(b'#') => flags.hash = true,
            Some(b'0') => flags.zero_pad = true,
            _ => break,
        }
        *pos += 1;
    }

    let mut width = 0usize;
    if bytes.get(*pos) == Some(&b'*') {
        *pos += 1;
        let w = args.next_signed() as i32;
        if w < 0 {
            flags.left_justify = true;
            width = w.unsigned_abs() as usize;
        } else {
            width = w as usize;
        }
    } else {
        while let Some(&b) = bytes.get(*pos) {
            if b.is_ascii_digit() {
                width = width * 10 + (b - b'0') as usize;
                *pos += 1;
            } else {
                break;
            }
        }
    }

    let mut precision = 0usize;
    if bytes.get(*pos) == Some(&b'.') {
        *pos += 1;
        flags.precision_given = true;
        if bytes.get(*pos) == Some(&b'*') {
            *pos += 1;
            let p = args.next_signed() as i32;
            if p < 0 {
                flags.precision_given = false;
            } else {
                precision = p as usize;
            }
        } else {
            while let Some(&b) = bytes.get(*pos) {
                if b.is_ascii_digit() {
                    precision = precision * 10 + (b - b'0') as usize;
                    *pos += 1;
                } else {
                    break;
                }
            }
        }
    }

    match bytes.get(*pos) {
        Some(b'h') => {
            *pos += 1;
            if bytes.get(*pos) == Some(&b'h') {
                *pos += 1;
                flags.char_len = true;
            } else {
                flags.short = true;
            }
        }
        Some(b'l') => {
            *pos += 1;
            if bytes.get(*pos) == Some(&b'l') {
                *pos += 1;
                #[cfg(feature = "long-long")]
                {
                    flags.long_long = true;
                }
                #[cfg(not(feature = "long-long"))]
                {
                    flags.long = true;
                }
            } else {
                flags.long = true;
            }
        }
        #[cfg(feature = "long-long")]
        Some(b'j') => {
            *pos += 1;
            flags.intmax = true;
        }
        Some(b'z') => {
            *pos += 1;
            flags.size_t = true;
        }
        #[cfg(feature = "ptrdiff-length")]
        Some(b't') => {
            *pos += 1;
            flags.ptrdiff = true;
        }
        _ => {}
    }

    let spec_byte = bytes.get(*pos).copied().unwrap_or(0);
    if spec_byte != 0 {
        *pos += 1;
    }

    let mut kind = Kind::Unknown;
    let mut base = 10u8;
    match spec_byte {
        b'd' | b'i' => kind = Kind::IntSigned,
        b'u' => kind = Kind::IntUnsigned,
        b'o' => {
            kind = Kind::IntUnsigned;
            base = 8;
        }
        b'x' => {
            kind = Kind::IntUnsigned;
            base = 16;
        }
        b'X' => {
            kind = Kind::IntUnsigned;
            base = 16;
            flags.uppercase = true;
        }
        b'b' => {
            kind = Kind::IntUnsigned;
            base = 2;
        }
        b'c' => kind = Kind::Char,
        b's' => kind = Kind::Str,
        b'p' => kind = Kind::Pointer,
        #[cfg(feature = "float")]
        b'f' => kind = Kind::FloatFixed,
        #[cfg(feature = "float")]
        b'F' => {
            kind = Kind::FloatFixed;
            flags.uppercase = true;
        }
        #[cfg(feature = "exponential")]
        b'e' => kind = Kind::FloatExp,
        #[cfg(feature = "exponential")]
        b'E' => {
            kind = Kind::FloatExp;
            flags.uppercase = true;
        }
        #[cfg(feature = "exponential")]
        b'g' => {
            kind = Kind::FloatAdapt;
            flags.adapt_exp = true;
        }
        #[cfg(feature = "exponential")]
        b'G' => {
            kind = Kind::FloatAdapt;
            flags.adapt_exp = true;
            flags.uppercase = true;
        }
        b'%' => kind = Kind::Percent,
        _ => {}
    }

    FormatSpec {
        flags,
        width,
        precision,
        base,
        kind,
        raw_specifier: spec_byte,
    }
}
