#![no_std]

//! A freestanding, allocation-free C-family `printf` format engine.
//!
//! No heap, no `Result`, no panics outside test code: every edge case
//! (unknown specifier, negative `*` width, precision past the scratch cap)
//! has a total, defined fallback baked into the renderer that hits it. See
//! `sprintf`/`snprintf`/`vsnprintf`/`fctprintf`/`vfctprintf` for the public
//! surface, and `Arg`/`ArgList` for how arguments are passed in lieu of
//! C varargs.

#[cfg(test)]
extern crate std;

mod api;
mod args;
mod config;
mod engine;
mod int_fmt;
mod numeric;
mod sink;
mod spec;

#[cfg(feature = "float")]
mod float_fixed;
#[cfg(feature = "exponential")]
mod float_exp;

pub use api::*;
pub use args::{Arg, ArgList};
pub use config::{FLOAT_DIGITS_BUF_LEN, INT_DIGITS_BUF_LEN, MAX_FLOAT_PRECISION};
