//! Public entry points.
//!
//! `snprintf`'s bound comes from the destination slice's own length, so
//! there is no unchecked `sprintf` here the way C has one — `sprintf` is
//! simply `snprintf` with the full slice as its own capacity, a slice bound
//! Rust enforces where C relies on caller discipline (see DESIGN.md).

use crate::args::{Arg, ArgList};
use crate::engine;
use crate::sink::Sink;

/// Format into `dst`, truncating to `dst.len()` if necessary. Always NUL
/// terminates within `dst` when `dst` is non-empty. Returns the number of
/// bytes that *would* have been written given enough room, matching C's
/// `snprintf` return-value contract — this can exceed `dst.len()`.
pub fn sprintf(dst: &mut [u8], fmt: &str, args: &[Arg]) -> i32 {
    snprintf(dst, fmt, args)
}

/// Identical to [`sprintf`]; named separately to mirror the C surface that
/// callers migrating from it expect.
pub fn snprintf(dst: &mut [u8], fmt: &str, args: &[Arg]) -> i32 {
    vsnprintf(dst, fmt, ArgList::new(args))
}

/// [`snprintf`] taking an already-built [`ArgList`] cursor, for callers that
/// assembled one themselves (e.g. to share it across multiple format calls).
pub fn vsnprintf(dst: &mut [u8], fmt: &str, mut args: ArgList) -> i32 {
    let n = dst.len();
    let store_len = n.saturating_sub(1);
    let position = {
        let mut sink = Sink::buffer(&mut dst[..store_len]);
        engine::run(fmt, &mut args, &mut sink);
        sink.position()
    };
    if n >= 1 {
        let nul_at = core::cmp::min(position, n - 1);
        dst[nul_at] = 0;
    }
    position as i32
}

/// Format, delivering each byte to `cb` rather than into a buffer. Returns
/// the total number of bytes produced.
pub fn fctprintf(cb: &mut dyn FnMut(u8), fmt: &str, args: &[Arg]) -> i32 {
    vfctprintf(cb, fmt, ArgList::new(args))
}

/// [`fctprintf`] taking an already-built [`ArgList`] cursor.
pub fn vfctprintf(cb: &mut dyn FnMut(u8), fmt: &str, mut args: ArgList) -> i32 {
    let mut sink = Sink::callback(cb);
    engine::run(fmt, &mut args, &mut sink);
    sink.position() as i32
}

/// Compute the length `snprintf` would produce without writing anywhere —
/// the `snprintf(NULL, 0, ...)` size-probe idiom, spelled without a null
/// pointer.
pub fn vsnprintf_len(fmt: &str, mut args: ArgList) -> i32 {
    let mut sink = Sink::discard();
    engine::run(fmt, &mut args, &mut sink);
    sink.position() as i32
}

#[cfg(feature = "putchar-sink")]
mod putchar {
    use super::*;

    extern "C" {
        /// Host-provided single-character output — the link-time contract
        /// every embedded `printf` port supplies (UART write, semihosting
        /// call, etc).
        fn _putchar(c: u8);
    }

    /// Format straight to the host's `_putchar`. Only compiled with the
    /// `putchar-sink` feature, since linking an external symbol is a binary
    /// concern, not something a plain library default should impose.
    pub fn printf(fmt: &str, args: &[Arg]) -> i32 {
        vprintf(fmt, ArgList::new(args))
    }

    pub fn vprintf(fmt: &str, mut args: ArgList) -> i32 {
        let mut cb = |b: u8| unsafe { _putchar(b) };
        let mut sink = Sink::callback(&mut cb);
        engine::run(fmt, &mut args, &mut sink);
        sink.position() as i32
    }
}

#[cfg(feature = "putchar-sink")]
pub use putchar::{printf, vprintf};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snprintf_truncates_and_nul_terminates() {
        let mut buf = [0xffu8; 6];
        let n = snprintf(&mut buf, "0%s", &[Arg::from("1234567")]);
        assert_eq!(n, 8);
        assert_eq!(&buf, b"01234\0");
    }

    #[test]
    fn snprintf_zero_length_buffer_just_counts() {
        let mut buf: [u8; 0] = [];
        let n = snprintf(&mut buf, "hello", &[]);
        assert_eq!(n, 5);
    }

    #[test]
    fn sprintf_fits_exactly() {
        let mut buf = [0u8; 6];
        let n = sprintf(&mut buf, "%d", &[Arg::from(12345)]);
        assert_eq!(n, 5);
        assert_eq!(&buf[..5], b"12345");
    }

    #[test]
    fn fctprintf_streams_bytes() {
        let mut collected = std::vec::Vec::new();
        let n = fctprintf(&mut |b| collected.push(b), "%d-%d", &[Arg::from(1), Arg::from(2)]);
        assert_eq!(n, 3);
        assert_eq!(collected, b"1-2");
    }
}
