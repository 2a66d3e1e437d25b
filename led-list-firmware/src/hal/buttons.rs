// Taster-Eingänge
//
// Taster schalten gegen GND, der interne Pull-Up hält den Pin sonst high.
// Gedrückt = Low.

use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};

use crate::config::BUTTON_COUNT;

/// Konfiguriert einen GPIO als Taster-Eingang mit Pull-Up
pub fn button_input(pin: impl InputPin + 'static) -> Input<'static> {
    Input::new(pin, InputConfig::default().with_pull(Pull::Up))
}

/// Alle Taster der Steuerung
pub struct ButtonPanel {
    buttons: [Input<'static>; BUTTON_COUNT],
}

impl ButtonPanel {
    pub fn new(buttons: [Input<'static>; BUTTON_COUNT]) -> Self {
        Self { buttons }
    }

    /// Aktueller Zustand jedes Tasters (`true` = gedrückt)
    pub fn states(&self) -> [bool; BUTTON_COUNT] {
        core::array::from_fn(|i| self.buttons[i].is_low())
    }
}
