//! Bounded formatting and payload rendering.
//!
//! ## Bounded buffer
//!
//! [`MessageBuffer`] is a fixed-capacity `heapless::String` that implements
//! [`core::fmt::Write`] with silent truncation: text that does not fit is cut
//! at the last UTF-8 boundary inside the capacity and everything after it is
//! dropped. Formatting never fails and never overruns.
//!
//! ## Payloads
//!
//! A single value passed to `log_*!` goes through [`Payload`]. Each semantic
//! type has its own rendering rule:
//!
//! | Type                            | Rule                    | Example            |
//! |---------------------------------|-------------------------|--------------------|
//! | `i8`..`i64`, `isize`            | signed decimal          | `-5` → `"-5"`      |
//! | `u8`..`u64`, `usize`            | unsigned decimal        | `5u32` → `"5"`     |
//! | `f32`, `f64`                    | fixed point, 6 decimals | `3.5` → `"3.500000"` |
//! | `str`, `char`, `heapless::String` | verbatim              | `"ok"` → `"ok"`    |

use core::fmt::{self, Write};

/// Number of decimals used for floating point payloads.
pub const FLOAT_PRECISION: usize = 6;

/// Fixed-capacity text buffer with silent truncation.
#[derive(Debug, Clone, Default)]
pub struct MessageBuffer<const N: usize> {
    text: heapless::String<N>,
    truncated: bool,
}

impl<const N: usize> MessageBuffer<N> {
    pub const fn new() -> Self {
        Self {
            text: heapless::String::new(),
            truncated: false,
        }
    }

    /// Capacity in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether any text was dropped because the buffer was full.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.truncated = false;
    }

    /// Append as much of `s` as fits.
    pub fn push_truncating(&mut self, s: &str) {
        let room = N - self.text.len();
        if s.len() <= room {
            // Cannot fail, the length was checked above
            let _ = self.text.push_str(s);
            return;
        }

        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        let _ = self.text.push_str(&s[..cut]);
        self.truncated = true;
    }
}

impl<const N: usize> Write for MessageBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            // Full: stop the formatter early instead of rendering into nothing
            return Err(fmt::Error);
        }
        self.push_truncating(s);
        Ok(())
    }
}

/// A single value that can be logged without a format string.
///
/// Implemented for the closed set of text, signed, unsigned and floating
/// point types. Anything else goes through the `logf_*!` macros.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be logged as a single value",
    label = "not a string or primitive number",
    note = "use a `logf_*!` macro with a format string for other types"
)]
pub trait Payload {
    /// Render the value into `out`.
    fn render<W: Write>(&self, out: &mut W) -> fmt::Result;
}

impl<T: Payload + ?Sized> Payload for &T {
    #[inline]
    fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        (**self).render(out)
    }
}

impl Payload for str {
    fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(self)
    }
}

impl Payload for char {
    fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_char(*self)
    }
}

impl<const M: usize> Payload for heapless::String<M> {
    fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(self.as_str())
    }
}

macro_rules! impl_decimal_payload {
    ($($ty:ty),+) => {
        $(
            impl Payload for $ty {
                #[inline]
                fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
                    write!(out, "{}", self)
                }
            }
        )+
    };
}

// Signed and unsigned decimal
impl_decimal_payload!(i8, i16, i32, i64, isize);
impl_decimal_payload!(u8, u16, u32, u64, usize);

macro_rules! impl_float_payload {
    ($($ty:ty),+) => {
        $(
            impl Payload for $ty {
                #[inline]
                fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
                    write!(out, "{:.*}", FLOAT_PRECISION, self)
                }
            }
        )+
    };
}

impl_float_payload!(f32, f64);
