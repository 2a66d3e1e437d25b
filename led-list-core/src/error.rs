//! Fehler-Typen der LED-Liste
//!
//! Jede fehlgeschlagene Operation lässt die Liste im Zustand vor dem Aufruf.

use core::fmt;

/// Fehler-Typ für Listen-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Index liegt nicht innerhalb der Liste (`index >= len`)
    IndexOutOfRange,
    /// Speicher für einen neuen Knoten konnte nicht beschafft werden
    AllocationFailure,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange => f.write_str("index out of range"),
            Self::AllocationFailure => f.write_str("node allocation failed"),
        }
    }
}

impl core::error::Error for ListError {}

#[cfg(feature = "defmt")]
impl defmt::Format for ListError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ListError::IndexOutOfRange => defmt::write!(fmt, "IndexOutOfRange"),
            ListError::AllocationFailure => defmt::write!(fmt, "AllocationFailure"),
        }
    }
}
