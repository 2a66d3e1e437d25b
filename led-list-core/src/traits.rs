//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use embedded_hal::digital::StatefulOutputPin;

/// Trait für den Zugriff auf eine Gruppe digitaler Ausgänge (LEDs)
///
/// Die Liste speichert nur `Handle`s und ruft für jeden Knoten eine dieser
/// Primitiven auf. Alle Aufrufe sind idempotent und blockieren nicht.
///
/// # Implementierungen
/// - **Production:** [`PinBank`] über `esp_hal::gpio::Output`
/// - **Testing:** MockLeds (zeichnet alle Aufrufe auf)
pub trait Actuators {
    /// Nicht-besitzende Referenz auf eine einzelne LED
    type Handle: Copy;

    /// Schaltet die LED ein
    fn activate(&mut self, handle: Self::Handle);

    /// Schaltet die LED aus
    fn deactivate(&mut self, handle: Self::Handle);

    /// Wechselt den Zustand der LED
    fn toggle(&mut self, handle: Self::Handle);
}

/// Feste Gruppe von Ausgangs-Pins, adressiert über ihren Index
///
/// Pin-Fehler werden verworfen, da die Primitiven keinen Rückgabewert haben.
/// Ein Handle außerhalb der Gruppe wird ignoriert.
pub struct PinBank<P, const N: usize> {
    pins: [P; N],
}

impl<P: StatefulOutputPin, const N: usize> PinBank<P, N> {
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Anzahl der Pins
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Aktueller Ausgangszustand, `None` für unbekannte Handles oder Pin-Fehler
    pub fn is_active(&mut self, handle: usize) -> Option<bool> {
        self.pins.get_mut(handle)?.is_set_high().ok()
    }

    pub fn into_pins(self) -> [P; N] {
        self.pins
    }
}

impl<P: StatefulOutputPin, const N: usize> Actuators for PinBank<P, N> {
    type Handle = usize;

    fn activate(&mut self, handle: usize) {
        if let Some(pin) = self.pins.get_mut(handle) {
            let _ = pin.set_high();
        }
    }

    fn deactivate(&mut self, handle: usize) {
        if let Some(pin) = self.pins.get_mut(handle) {
            let _ = pin.set_low();
        }
    }

    fn toggle(&mut self, handle: usize) {
        if let Some(pin) = self.pins.get_mut(handle) {
            let _ = pin.toggle();
        }
    }
}
