// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Heap für die Listenknoten
extern crate alloc;

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von led-list-core
pub use led_list_core::{
    Actuators, BlinkPattern, LedList, LedNode, ListError, PinBank, select_pattern,
};
