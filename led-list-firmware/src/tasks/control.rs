// LED-Steuerung - Liest die Taster und steuert die LED-Liste
use defmt::{error, info};
use embedded_hal::delay::DelayNs;
use esp_hal::delay::Delay;
use led_list_core::{Actuators, BlinkPattern, LedList, ListError, select_pattern};

use crate::config::{BLINK_SPEED_MS, BUTTON_COUNT, MAX_LIST_NODES};
use crate::hal::{ButtonPanel, LedBank};

/// Baut die LED-Liste: jede LED der Bank wird in Pin-Reihenfolge angehängt
pub fn build_led_list(leds: &LedBank) -> Result<LedList<usize>, ListError> {
    let mut list = LedList::with_max_nodes(MAX_LIST_NODES);
    for handle in 0..leds.len() {
        if let Err(e) = list.push_back(handle) {
            error!("LED {} konnte nicht in die Liste aufgenommen werden: {}", handle, e);
            return Err(e);
        }
    }
    Ok(list)
}

/// Steuer-Logik - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Endlosschleife:
/// - Liest die Tasterzustände
/// - Wählt das Leuchtmuster aus der Anzahl gedrückter Taster
/// - Führt einen Schritt des Musters auf der Liste aus (blockierend)
///
/// # Parameter
/// - `list`: LED-Liste (Reihenfolge = Lauflicht-Reihenfolge)
/// - `leds`: LED-Zugriff (Hardware oder Mock)
/// - `read_buttons`: Liefert den aktuellen Zustand aller Taster
/// - `delay`: Blockierende Wartezeit zwischen den Schritten
pub fn control_logic<A, D, F>(
    list: &LedList<usize>,
    leds: &mut A,
    mut read_buttons: F,
    delay: &mut D,
) -> !
where
    A: Actuators<Handle = usize>,
    D: DelayNs,
    F: FnMut() -> [bool; BUTTON_COUNT],
{
    let mut current: Option<BlinkPattern> = None;

    loop {
        let pattern = select_pattern(read_buttons());

        // Nur Musterwechsel loggen, nicht jeden Zyklus
        if current != Some(pattern) {
            info!("Leuchtmuster: {}", pattern);
            current = Some(pattern);
        }

        list.run_pattern(pattern, leds, delay, BLINK_SPEED_MS);
    }
}

/// Steuer-Task - verbindet Hardware und Steuer-Logik
///
/// # Parameter
/// - `leds`: Alle LED-Ausgänge
/// - `buttons`: Alle Taster-Eingänge
pub fn control_task(mut leds: LedBank, buttons: ButtonPanel) -> ! {
    let list = match build_led_list(&leds) {
        Ok(list) => list,
        Err(e) => panic!("LED-Liste unvollständig: {}", e),
    };
    info!("{} LEDs in der Liste, Steuerung startet", list.len());

    let mut delay = Delay::new();
    control_logic(&list, &mut leds, || buttons.states(), &mut delay)
}
