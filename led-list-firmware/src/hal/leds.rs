// GPIO-LEDs als PinBank
//
// Jede LED hängt an einem eigenen Ausgangs-Pin. Die Liste adressiert sie
// über den Index in der Bank.

use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};
use led_list_core::PinBank;

use crate::config::LED_COUNT;

/// Alle LEDs der Steuerung, Handle = Index in der Bank
pub type LedBank = PinBank<Output<'static>, LED_COUNT>;

/// Konfiguriert einen GPIO als LED-Ausgang (Start: aus)
///
/// # Parameter
/// - `pin`: GPIO Peripheral, an dem die LED (mit Vorwiderstand) hängt
pub fn led_output(pin: impl OutputPin + 'static) -> Output<'static> {
    Output::new(pin, Level::Low, OutputConfig::default())
}
