//! Mocks für Host-Tests
//!
//! MockLeds und MockDelay schreiben in eine gemeinsame Zeitleiste, damit
//! Tests die Reihenfolge von Schalt- und Wartevorgängen prüfen können.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error, ErrorKind, ErrorType, OutputPin, StatefulOutputPin};
use led_list_core::{Actuators, LedList};

// ============================================================================
// Zeitleiste
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    On(char),
    Off(char),
    Toggle(char),
    Hold(u32),
}

pub type Timeline = Rc<RefCell<Vec<Event>>>;

// ============================================================================
// Mock LEDs
// ============================================================================

pub struct MockLeds {
    timeline: Timeline,
    pub states: HashMap<char, bool>,
}

impl MockLeds {
    pub fn is_on(&self, led: char) -> bool {
        self.states.get(&led).copied().unwrap_or(false)
    }

    pub fn lit(&self) -> usize {
        self.states.values().filter(|&&on| on).count()
    }
}

impl Actuators for MockLeds {
    type Handle = char;

    fn activate(&mut self, handle: char) {
        self.timeline.borrow_mut().push(Event::On(handle));
        self.states.insert(handle, true);
    }

    fn deactivate(&mut self, handle: char) {
        self.timeline.borrow_mut().push(Event::Off(handle));
        self.states.insert(handle, false);
    }

    fn toggle(&mut self, handle: char) {
        self.timeline.borrow_mut().push(Event::Toggle(handle));
        let state = self.states.entry(handle).or_insert(false);
        *state = !*state;
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

pub struct MockDelay {
    timeline: Timeline,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.timeline.borrow_mut().push(Event::Hold(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timeline.borrow_mut().push(Event::Hold(ms));
    }
}

/// LEDs und Delay mit gemeinsamer Zeitleiste
pub fn board() -> (MockLeds, MockDelay, Timeline) {
    let timeline: Timeline = Rc::new(RefCell::new(Vec::new()));
    let leds = MockLeds {
        timeline: Rc::clone(&timeline),
        states: HashMap::new(),
    };
    let delay = MockDelay {
        timeline: Rc::clone(&timeline),
    };
    (leds, delay, timeline)
}

// ============================================================================
// Mock Output Pin
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Default)]
pub struct MockPin {
    pub high: bool,
    pub write_count: usize,
    pub fail_writes: bool,
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockPinError);
        }
        self.high = false;
        self.write_count += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockPinError);
        }
        self.high = true;
        self.write_count += 1;
        Ok(())
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

// ============================================================================
// Listen-Helfer
// ============================================================================

pub fn list_of(handles: &[char]) -> LedList<char> {
    let mut list = LedList::new();
    for &h in handles {
        list.push_back(h).unwrap();
    }
    list
}

/// Handles in Listenreihenfolge (leere Knoten als `'_'`)
pub fn sequence(list: &LedList<char>) -> String {
    list.handles().map(|h| h.unwrap_or('_')).collect()
}
