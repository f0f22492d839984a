//! The engine's only mutation point.
//!
//! The C reference threads a `(char* buffer, size_t capacity, void (*cb)(char))`
//! bundle through every call and uses a null `buffer` to mean "discard" — the
//! redesign spec §9 calls for explicitly: a tagged `enum` replaces the
//! nullable-pointer convention, the same shift the teacher already made from
//! raw VGA/klog pointers to its own `Sink` tag in `io/fmt.rs`.

/// Where formatted bytes go. `position` counts every byte the engine was
/// *asked* to emit, regardless of how much (if any) backing storage
/// actually received it — this is the "attempted length" every public entry
/// point returns, matching C's `snprintf` return-value contract.
pub(crate) enum Sink<'a> {
    /// Pure counter. Backs a `snprintf(_, 0, ...)` size probe.
    Discard { position: usize },
    /// Bounded buffer. `buf` is exactly the storage the engine may write —
    /// callers (the `api` adapters) pass a sub-slice sized one byte short of
    /// their destination so a trailing NUL always has room.
    Buffer { buf: &'a mut [u8], position: usize },
    /// Per-byte callback delivery (`fctprintf`/`printf`).
    Callback { cb: &'a mut dyn FnMut(u8), position: usize },
}

impl<'a> Sink<'a> {
    pub(crate) fn discard() -> Self {
        Sink::Discard { position: 0 }
    }

    pub(crate) fn buffer(buf: &'a mut [u8]) -> Self {
        Sink::Buffer { buf, position: 0 }
    }

    pub(crate) fn callback(cb: &'a mut dyn FnMut(u8)) -> Self {
        Sink::Callback { cb, position: 0 }
    }

    /// Emit one byte, unconditionally counting it. A `Buffer` sink only
    /// stores while `position` is within its backing slice; bytes beyond
    /// that are still counted, never written.
    pub(crate) fn emit(&mut self, byte: u8) {
        match self {
            Sink::Discard { position } => *position += 1,
            Sink::Buffer { buf, position } => {
                if *position < buf.len() {
                    buf[*position] = byte;
                }
                *position += 1;
            }
            Sink::Callback { cb, position } => {
                cb(byte);
                *position += 1;
            }
        }
    }

    pub(crate) fn emit_n(&mut self, byte: u8, n: usize) {
        for _ in 0..n {
            self.emit(byte);
        }
    }

    pub(crate) fn position(&self) -> usize {
        match self {
            Sink::Discard { position } => *position,
            Sink::Buffer { position, .. } => *position,
            Sink::Callback { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discard_only_counts() {
        let mut sink = Sink::discard();
        sink.emit_n(b'x', 5);
        assert_eq!(sink.position(), 5);
    }

    #[test]
    fn buffer_stops_storing_past_capacity_but_keeps_counting() {
        let mut storage = [0u8; 3];
        {
            let mut sink = Sink::buffer(&mut storage);
            sink.emit_n(b'a', 5);
            assert_eq!(sink.position(), 5);
        }
        assert_eq!(&storage, b"aaa");
    }

    #[test]
    fn callback_sees_every_byte() {
        let mut seen = [0u8; 4];
        let mut i = 0;
        {
            let mut cb = |b: u8| {
                seen[i] = b;
                i += 1;
            };
            let mut sink = Sink::callback(&mut cb);
            sink.emit(b'h');
            sink.emit(b'i');
        }
        assert_eq!(&seen[..2], b"hi");
    }
}
