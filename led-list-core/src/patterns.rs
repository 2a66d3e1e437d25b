//! Kollektive Ansteuerung aller LEDs einer Liste
//!
//! Jede Funktion läuft einmal über alle Knoten und ruft pro Knoten eine
//! Primitive aus [`Actuators`] auf. Die Liste selbst wird nicht verändert.
//! Wartezeiten blockieren den Aufrufer über `DelayNs::delay_ms`.

use embedded_hal::delay::DelayNs;

use crate::list::LedList;
use crate::traits::Actuators;
use crate::types::BlinkPattern;

impl<H: Copy> LedList<H> {
    /// Schaltet alle LEDs ein
    pub fn activate_all<A: Actuators<Handle = H>>(&self, leds: &mut A) {
        for handle in self.handles().flatten() {
            leds.activate(handle);
        }
    }

    /// Schaltet alle LEDs aus
    pub fn deactivate_all<A: Actuators<Handle = H>>(&self, leds: &mut A) {
        for handle in self.handles().flatten() {
            leds.deactivate(handle);
        }
    }

    /// Wechselt den Zustand aller LEDs
    pub fn toggle_all<A: Actuators<Handle = H>>(&self, leds: &mut A) {
        for handle in self.handles().flatten() {
            leds.toggle(handle);
        }
    }

    /// Kollektives (synchrones) Blinken: ein vollständiger Ein/Aus-Zyklus
    ///
    /// Wiederholte Aufrufe ergeben fortlaufendes Blinken.
    pub fn blink_collectively<A, D>(&self, leds: &mut A, delay: &mut D, interval_ms: u32)
    where
        A: Actuators<Handle = H>,
        D: DelayNs,
    {
        self.activate_all(leds);
        delay.delay_ms(interval_ms);
        self.deactivate_all(leds);
        delay.delay_ms(interval_ms);
    }

    /// Sequentielles Blinken vom ersten zum letzten Knoten ("Lauflicht")
    ///
    /// Während des Durchlaufs leuchtet genau eine LED, davor und danach
    /// sind alle aus.
    pub fn blink_forward<A, D>(&self, leds: &mut A, delay: &mut D, interval_ms: u32)
    where
        A: Actuators<Handle = H>,
        D: DelayNs,
    {
        self.deactivate_all(leds);
        sweep(self.handles().flatten(), leds, delay, interval_ms);
    }

    /// Sequentielles Blinken vom letzten zum ersten Knoten
    pub fn blink_backward<A, D>(&self, leds: &mut A, delay: &mut D, interval_ms: u32)
    where
        A: Actuators<Handle = H>,
        D: DelayNs,
    {
        self.deactivate_all(leds);
        sweep(self.handles().rev().flatten(), leds, delay, interval_ms);
    }

    /// Führt einen Schritt des angegebenen Musters aus
    ///
    /// Ein Schritt ist ein Blink-Zyklus, ein Lauflicht-Durchlauf oder das
    /// einmalige Setzen aller LEDs.
    pub fn run_pattern<A, D>(
        &self,
        pattern: BlinkPattern,
        leds: &mut A,
        delay: &mut D,
        interval_ms: u32,
    ) where
        A: Actuators<Handle = H>,
        D: DelayNs,
    {
        match pattern {
            BlinkPattern::Off => self.deactivate_all(leds),
            BlinkPattern::Collective => self.blink_collectively(leds, delay, interval_ms),
            BlinkPattern::Forward => self.blink_forward(leds, delay, interval_ms),
            BlinkPattern::Backward => self.blink_backward(leds, delay, interval_ms),
            BlinkPattern::On => self.activate_all(leds),
        }
    }
}

fn sweep<H, A, D>(handles: impl Iterator<Item = H>, leds: &mut A, delay: &mut D, interval_ms: u32)
where
    H: Copy,
    A: Actuators<Handle = H>,
    D: DelayNs,
{
    for handle in handles {
        leds.activate(handle);
        delay.delay_ms(interval_ms);
        leds.deactivate(handle);
    }
}
