//! The core format loop.
//!
//! Walks the format string byte by byte, copying literals straight to the
//! sink and handing `%` conversions to `spec::parse` plus the matching
//! renderer — the same two-state loop as the teacher's `_format`
//! (`io/fmt.rs`), generalized from `{`/`}` placeholders to C's `%`
//! conversion syntax and from a flat argument slice to the typed `ArgList`
//! cursor.

use crate::args::ArgList;
use crate::int_fmt;
use crate::sink::Sink;
use crate::spec::{self, Kind};

pub(crate) fn run(fmt: &str, args: &mut ArgList, sink: &mut Sink) {
    let bytes = fmt.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        let ch = bytes[i];
        if ch != b'%' {
            sink.emit(ch);
            i += 1;
            continue;
        }

        i += 1;
        if i >= len {
            // A lone '%' at the very end of the format string: emit it
            // literally rather than reading past the string.
            sink.emit(b'%');
            break;
        }

        let format_spec = spec::parse(bytes, &mut i, args);
        dispatch(sink, &format_spec, args);
    }
}

fn dispatch(sink: &mut Sink, format_spec: &spec::FormatSpec, args: &mut ArgList) {
    match format_spec.kind {
        Kind::Percent => sink.emit(b'%'),
        Kind::Unknown => sink.emit(format_spec.raw_specifier),
        Kind::IntSigned => {
            let v = fetch_signed(format_spec, args);
            int_fmt::render_signed(sink, format_spec, v);
        }
        Kind::IntUnsigned => {
            let v = fetch_unsigned(format_spec, args);
            int_fmt::render_unsigned(sink, format_spec, v);
        }
        Kind::Char => {
            let c = args.next_char();
            int_fmt::render_char(sink, format_spec, c);
        }
        Kind::Str => {
            let s = args.next_str();
            int_fmt::render_str(sink, format_spec, s);
        }
        Kind::Pointer => {
            let p = args.next_pointer();
            int_fmt::render_pointer(sink, format_spec, p as u64);
        }
        #[cfg(feature = "float")]
        Kind::FloatFixed => {
            let v = args.next_double();
            crate::float_fixed::render(sink, format_spec, v);
        }
        #[cfg(feature = "exponential")]
        Kind::FloatExp => {
            let v = args.next_double();
            crate::float_exp::render_e(sink, format_spec, v);
        }
        #[cfg(feature = "exponential")]
        Kind::FloatAdapt => {
            let v = args.next_double();
            crate::float_exp::render_g(sink, format_spec, v);
        }
    }
}

/// Apply the parsed length modifier's truncation to a signed argument. With
/// no modifier at all, C's variadic promotion rule applies: the value is
/// truncated to `int` width.
fn fetch_signed(format_spec: &spec::FormatSpec, args: &mut ArgList) -> i64 {
    let v = args.next_signed();
    let flags = &format_spec.flags;
    if flags.char_len {
        v as i8 as i64
    } else if flags.short {
        v as i16 as i64
    } else if flags.long || flags.long_long || flags.intmax || flags.size_t || flags.ptrdiff {
        v
    } else {
        v as i32 as i64
    }
}

fn fetch_unsigned(format_spec: &spec::FormatSpec, args: &mut ArgList) -> u64 {
    let v = args.next_unsigned();
    let flags = &format_spec.flags;
    if flags.char_len {
        v as u8 as u64
    } else if flags.short {
        v as u16 as u64
    } else if flags.long || flags.long_long || flags.intmax || flags.size_t || flags.ptrdiff {
        v
    } else {
        v as u32 as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Arg, ArgList};

    fn run_to_string(fmt: &str, args: &[Arg]) -> std::string::String {
        let mut storage = [0u8; 128];
        let mut out = std::string::String::new();
        {
            let mut list = ArgList::new(args);
            let mut sink = Sink::buffer(&mut storage);
            run(fmt, &mut list, &mut sink);
            let n = sink.position().min(storage.len());
            out.push_str(core::str::from_utf8(&storage[..n]).unwrap());
        }
        out
    }

    #[test]
    fn literal_passthrough() {
        assert_eq!(run_to_string("hello", &[]), "hello");
    }

    #[test]
    fn percent_escape() {
        assert_eq!(run_to_string("100%%", &[]), "100%");
    }

    #[test]
    fn unknown_specifier_passes_through_literally() {
        // "%kmarco" with an unused trailing arg — matches the upstream
        // reference corpus's own regression case for unrecognized specifiers.
        assert_eq!(
            run_to_string("%kmarco", &[Arg::SignedInt(42)]),
            "kmarco"
        );
    }

    #[test]
    fn mixed_conversions() {
        let args = [Arg::from(-7i32), Arg::from("hi"), Arg::from(3.5f64)];
        assert_eq!(run_to_string("%d/%s/%.1f", &args), "-7/hi/3.5");
    }

    #[test]
    fn length_modifier_truncates_on_fetch() {
        let args = [Arg::from(0x123456u32)];
        assert_eq!(run_to_string("%hu", &args), "13398");
    }
}
