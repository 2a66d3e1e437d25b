// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus
// led-list-core, um Testbarkeit und Wartbarkeit zu verbessern.

pub mod buttons;
pub mod leds;

pub use buttons::{ButtonPanel, button_input};
pub use leds::{LedBank, led_output};
