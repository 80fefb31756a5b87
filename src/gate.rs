//! Level gate.
//!
//! A call at level `S` is active iff logging is compiled in, `S` reaches the
//! static floor, the logger's configuration is enabled and `S` reaches its
//! minimum level. The first two checks are `const` and are evaluated inside
//! every macro expansion:
//!
//! ```text
//! const ACTIVE: bool = statically_enabled(Level::Debug);
//! if ACTIVE && logger.is_enabled(Level::Debug) { /* format + emit */ }
//! ```
//!
//! When `ACTIVE` is `false` the block, its argument expressions and its
//! format strings are removed at compile time.

use crate::configuration::{ENABLED, STATIC_MAX_LEVEL};
use crate::level::{Level, LevelFilter};

/// Whether `level` passes `filter`. Equality passes.
#[inline(always)]
pub const fn passes(level: Level, filter: LevelFilter) -> bool {
    level.as_u8() >= filter.as_u8()
}

/// Whether calls at `level` are compiled in at all.
#[inline(always)]
pub const fn statically_enabled(level: Level) -> bool {
    ENABLED && passes(level, STATIC_MAX_LEVEL)
}
