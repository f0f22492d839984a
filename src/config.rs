//! Compile-time configuration.
//!
//! The C reference toggles float/exponential/long-long/ptrdiff support with
//! preprocessor defines (`PRINTF_DISABLE_SUPPORT_FLOAT` and friends). Here
//! the same choices are Cargo features, checked with `#[cfg(feature = "...")]`
//! at the call sites in `spec` and `engine` instead of `#ifdef`.
//!
//! `MAX_FLOAT_PRECISION` and the scratch-buffer ceilings below are spec.md
//! §6's "custom maximum float precision" and "custom buffer-size ceiling"
//! toggles. They're `pub` consts (re-exported from the crate root) rather
//! than `pub(crate)`, each paired with a Cargo feature that raises it — the
//! same cfg-toggle idiom as `float`/`exponential`/`long-long`/
//! `ptrdiff-length`, just switching a magnitude instead of an on/off
//! behavior. A downstream crate that needs a higher ceiling enables the
//! feature rather than forking this file.

/// Scratch-buffer length used when rendering integer/pointer digits in any
/// base. A magnitude whose digit count in the requested base would exceed
/// this is truncated to the least-significant digits that fit (spec §5) —
/// in practice this only bites `%b` of a near-`u64::MAX` value with no
/// explicit width, since decimal/octal/hex magnitudes always fit. The
/// `wide-scratch-buffers` feature doubles this for callers formatting in
/// unusually wide fields.
#[cfg(not(feature = "wide-scratch-buffers"))]
pub const INT_DIGITS_BUF_LEN: usize = 32;
#[cfg(feature = "wide-scratch-buffers")]
pub const INT_DIGITS_BUF_LEN: usize = 64;

/// Scratch-buffer length for a float's fractional digit string. See
/// `INT_DIGITS_BUF_LEN` for the feature that widens it.
#[cfg(not(feature = "wide-scratch-buffers"))]
pub const FLOAT_DIGITS_BUF_LEN: usize = 32;
#[cfg(feature = "wide-scratch-buffers")]
pub const FLOAT_DIGITS_BUF_LEN: usize = 64;

/// Ceiling on the precision actually computed for `%f`/`%e`/`%g`. Requested
/// precision beyond this is honored by padding with literal `'0'` bytes
/// rather than computing further significant digits. `numeric::POW10` is
/// sized to cover whichever of these is active, so raising the ceiling here
/// always has a matching power-of-ten entry to scale against.
#[cfg(not(feature = "float-precision-12"))]
pub const MAX_FLOAT_PRECISION: usize = 9;
#[cfg(feature = "float-precision-12")]
pub const MAX_FLOAT_PRECISION: usize = 12;
