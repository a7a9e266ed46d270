//! Domain entities for the cursor service.
//!
//! Everything in this module is pure business logic: no sockets, no timers,
//! no locks.  Code in the service crate depends on these types, never the
//! other way around, so the movement rules can be unit-tested in isolation.

/// Canvas bounds that every cursor position must stay within.
pub mod canvas;

/// Arrow-key presses and batches of them.
pub mod keys;

/// The move calculator: key presses in, clamped destination and move time out.
pub mod movement;

/// The cursor position value type.
pub mod position;
