//! Core Types für LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Leuchtmuster für die gesamte LED-Liste
///
/// Wird von der Steuerschleife aus der Anzahl gedrückter Tasten abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlinkPattern {
    /// Alle LEDs aus
    Off,
    /// Alle LEDs blinken synchron
    Collective,
    /// Lauflicht vom ersten zum letzten Knoten
    Forward,
    /// Lauflicht vom letzten zum ersten Knoten
    Backward,
    /// Alle LEDs dauerhaft an
    On,
}

impl BlinkPattern {
    /// Ordnet der Anzahl gedrückter Tasten ein Muster zu
    ///
    /// 0 → aus, 1 → synchron, 2 → vorwärts, 3 → rückwärts, 4 → an.
    /// Jede andere Anzahl schaltet aus.
    pub fn from_pressed_count(pressed: usize) -> Self {
        match pressed {
            1 => Self::Collective,
            2 => Self::Forward,
            3 => Self::Backward,
            4 => Self::On,
            _ => Self::Off,
        }
    }

    /// Kurzname für Logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Off => "Aus",
            Self::Collective => "Synchron",
            Self::Forward => "Vorwärts",
            Self::Backward => "Rückwärts",
            Self::On => "An",
        }
    }

    /// `true` für Muster, die pro Schritt warten
    pub fn is_blinking(&self) -> bool {
        matches!(self, Self::Collective | Self::Forward | Self::Backward)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for BlinkPattern {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "BlinkPattern {{ {} }}", self.name())
    }
}
