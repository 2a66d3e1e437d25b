// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pins der LEDs, in Listenreihenfolge
/// Verdrahtung in main.rs muss dieser Tabelle entsprechen
pub const LED_GPIO_PINS: [u8; LED_COUNT] = [0, 1, 2, 3, 6];

/// Anzahl der LEDs an der Liste
pub const LED_COUNT: usize = 5;

/// Maximale Anzahl Listenknoten
/// Begrenzt den Heap-Verbrauch der Liste
pub const MAX_LIST_NODES: usize = 16;

/// Blinkgeschwindigkeit in Millisekunden
/// Wartezeit pro Schritt beim synchronen Blinken und beim Lauflicht
pub const BLINK_SPEED_MS: u32 = led_list_core::DEFAULT_BLINK_SPEED_MS;

// ============================================================================
// Tasten Konfiguration
// ============================================================================

/// GPIO-Pins der Taster (gegen GND, interner Pull-Up)
pub const BUTTON_GPIO_PINS: [u8; BUTTON_COUNT] = [18, 19, 20, 21];

/// Anzahl der Taster
/// Die Anzahl gleichzeitig gedrückter Taster wählt das Leuchtmuster
pub const BUTTON_COUNT: usize = 4;

// ============================================================================
// Speicher Konfiguration
// ============================================================================

/// Heap-Größe (Bytes)
/// Reicht für MAX_LIST_NODES Knoten mit großzügiger Reserve
pub const HEAP_SIZE: usize = 8192; // 8 KB
