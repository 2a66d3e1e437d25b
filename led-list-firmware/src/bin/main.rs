// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (die Listenknoten liegen auf dem Heap)
extern crate alloc;

use defmt::info;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use led_list_steuerung::config::{BUTTON_GPIO_PINS, HEAP_SIZE, LED_GPIO_PINS};
use led_list_steuerung::hal::{ButtonPanel, LedBank, button_input, led_output};
use led_list_steuerung::tasks::control_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und Heap, verdrahtet LEDs und Taster und
/// übergibt an die Steuerschleife (kehrt nie zurück).
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (jeder Listenknoten ist eine Allokation)
    esp_alloc::heap_allocator!(size: HEAP_SIZE);

    // LEDs in Listenreihenfolge (siehe LED_GPIO_PINS)
    let leds = LedBank::new([
        led_output(peripherals.GPIO0),
        led_output(peripherals.GPIO1),
        led_output(peripherals.GPIO2),
        led_output(peripherals.GPIO3),
        led_output(peripherals.GPIO6),
    ]);
    info!("LEDs an GPIO {}", LED_GPIO_PINS);

    // Taster (siehe BUTTON_GPIO_PINS)
    let buttons = ButtonPanel::new([
        button_input(peripherals.GPIO18),
        button_input(peripherals.GPIO19),
        button_input(peripherals.GPIO20),
        button_input(peripherals.GPIO21),
    ]);
    info!("Taster an GPIO {}", BUTTON_GPIO_PINS);

    control_task(leds, buttons)
}
