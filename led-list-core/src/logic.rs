//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::BlinkPattern;

/// Standard-Blinkgeschwindigkeit der Steuerschleife in Millisekunden
pub const DEFAULT_BLINK_SPEED_MS: u32 = 100;

/// Zählt die gedrückten Tasten
///
/// # Beispiele
///
/// ```
/// # use led_list_core::count_pressed;
/// assert_eq!(count_pressed([true, false, true, false]), 2);
/// ```
pub fn count_pressed(states: impl IntoIterator<Item = bool>) -> usize {
    states.into_iter().filter(|&pressed| pressed).count()
}

/// Wählt das Leuchtmuster anhand der Tastenzustände
pub fn select_pattern(states: impl IntoIterator<Item = bool>) -> BlinkPattern {
    BlinkPattern::from_pressed_count(count_pressed(states))
}
