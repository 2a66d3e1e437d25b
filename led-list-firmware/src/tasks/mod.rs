// Task-Modul: Enthält die Steuerschleife
//
// Die Schleife läuft blockierend im Hauptprogramm, ohne Executor.
// Jeder Blink-Schritt hält den Aufrufer für die volle Wartezeit an.

pub mod control;

// Re-export für einfachen Import
pub use control::{build_led_list, control_logic, control_task};
