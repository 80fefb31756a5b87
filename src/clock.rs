//! Timestamp sources.
//!
//! A [`Clock`] returns milliseconds since boot. Records carry a
//! `time: <millis>; ` segment only when the logger's clock returns `Some`.
//!
//! | Clock           | Feature        | Source                               |
//! |-----------------|----------------|--------------------------------------|
//! | [`NoClock`]     | -              | none, timestamps disabled            |
//! | [`FnClock`]     | -              | any `Fn() -> u64`                    |
//! | `EmbassyClock`  | `embassy-time` | `embassy_time::Instant::now()`       |
//! | `StdClock`      | `std`          | `std::time::Instant` since creation  |

/// Monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since boot, or `None` when no time source is bound.
    fn now_millis(&self) -> Option<u64>;
}

/// No time source: records carry no timestamp.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoClock;

impl Clock for NoClock {
    #[inline(always)]
    fn now_millis(&self) -> Option<u64> {
        None
    }
}

/// Clock backed by a function, e.g. a HAL's tick counter.
///
/// ```rust
/// use serial_logger::clock::{Clock, FnClock};
///
/// fn ticks() -> u64 { 42 }
///
/// let clock = FnClock::new(ticks);
/// assert_eq!(clock.now_millis(), Some(42));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnClock<F>(F);

impl<F: Fn() -> u64> FnClock<F> {
    pub const fn new(now: F) -> Self {
        Self(now)
    }
}

impl<F: Fn() -> u64> Clock for FnClock<F> {
    #[inline]
    fn now_millis(&self) -> Option<u64> {
        Some((self.0)())
    }
}

/// Clock driven by the Embassy time driver.
#[cfg(feature = "embassy-time")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl Clock for EmbassyClock {
    #[inline]
    fn now_millis(&self) -> Option<u64> {
        Some(embassy_time::Instant::now().as_millis())
    }
}

/// Host clock counting from its creation.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_millis(&self) -> Option<u64> {
        Some(self.start.elapsed().as_millis() as u64)
    }
}
