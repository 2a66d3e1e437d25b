//! LED List Core - Doppelt verkettete LED-Liste und Pure Logic
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Liste, Traits und Pure Functions (`no_std` + `alloc`).

#![no_std]

extern crate alloc;

pub mod error;
pub mod list;
pub mod logic;
pub mod patterns;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use error::ListError;
pub use list::{Iter, LedList, LedNode};
pub use logic::{DEFAULT_BLINK_SPEED_MS, count_pressed, select_pattern};
pub use traits::{Actuators, PinBank};
pub use types::BlinkPattern;
