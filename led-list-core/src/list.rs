//! Doppelt verkettete Liste für LEDs und andere digitale Ausgänge
//!
//! Die Knoten liegen in einem Arena-Speicher (`Vec` aus Slots), verkettet
//! über Indizes statt Zeiger. Freigegebene Slots werden über eine
//! Frei-Liste wiederverwendet.
//!
//! Die Liste speichert nur Handles (`H: Copy`) auf die LEDs, besitzt sie
//! aber nie: Löschen eines Knotens oder der ganzen Liste lässt die LED
//! selbst unberührt.

use alloc::vec::Vec;

use crate::error::ListError;

/// Slot-Index im Arena-Speicher (`None` = kein Nachbar)
type Link = Option<usize>;

#[derive(Debug, Clone)]
struct Slot<H> {
    handle: Option<H>,
    previous: Link,
    next: Link,
}

#[derive(Debug, Clone)]
enum Entry<H> {
    Occupied(Slot<H>),
    Vacant { next_free: Link },
}

/// Doppelt verkettete LED-Liste
///
/// Invarianten (werden ausschließlich von den eigenen Operationen gepflegt):
/// - `len() == 0` ⇔ kein erster ⇔ kein letzter Knoten
/// - `len() == 1` ⇒ erster == letzter Knoten, ohne Nachbarn
/// - für benachbarte Knoten A→B gilt `A.next == B` und `B.previous == A`
///
/// Knoten aus [`resize`](Self::resize) tragen ein leeres Handle und werden
/// bei der Ansteuerung übersprungen.
#[derive(Debug, Clone)]
pub struct LedList<H> {
    entries: Vec<Entry<H>>,
    free_head: Link,
    first: Link,
    last: Link,
    size: usize,
    max_nodes: Option<usize>,
}

impl<H> Default for LedList<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> LedList<H> {
    /// Erstellt eine leere Liste ohne Knoten-Limit
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_head: None,
            first: None,
            last: None,
            size: 0,
            max_nodes: None,
        }
    }

    /// Erstellt eine leere Liste, die höchstens `max_nodes` Knoten aufnimmt
    ///
    /// Jeder weitere Knoten scheitert mit [`ListError::AllocationFailure`],
    /// wie bei erschöpftem Heap.
    pub const fn with_max_nodes(max_nodes: usize) -> Self {
        Self {
            entries: Vec::new(),
            free_head: None,
            first: None,
            last: None,
            size: 0,
            max_nodes: Some(max_nodes),
        }
    }

    /// Anzahl der Knoten
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Konfiguriertes Knoten-Limit, falls vorhanden
    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Löscht alle Knoten und gibt deren Speicher frei
    ///
    /// Die referenzierten LEDs bleiben unberührt. Auf einer leeren Liste
    /// ein No-Op.
    pub fn clear(&mut self) {
        self.entries = Vec::new();
        self.free_head = None;
        self.first = None;
        self.last = None;
        self.size = 0;
    }

    fn slot(&self, index: usize) -> Option<&Slot<H>> {
        match self.entries.get(index) {
            Some(Entry::Occupied(slot)) => Some(slot),
            _ => None,
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Slot<H>> {
        match self.entries.get_mut(index) {
            Some(Entry::Occupied(slot)) => Some(slot),
            _ => None,
        }
    }

    fn set_previous(&mut self, index: usize, previous: Link) {
        if let Some(slot) = self.slot_mut(index) {
            slot.previous = previous;
        }
    }

    fn set_next(&mut self, index: usize, next: Link) {
        if let Some(slot) = self.slot_mut(index) {
            slot.next = next;
        }
    }

    /// Slot des Knotens an Position `position` (lineare Suche ab dem Anfang)
    fn link_at(&self, position: usize) -> Link {
        if position >= self.size {
            return None;
        }

        let mut current = self.first;
        for _ in 0..position {
            current = current.and_then(|i| self.slot(i)).and_then(|s| s.next);
        }
        current
    }

    /// Stellt sicher, dass `additional` weitere Knoten ohne Fehler angelegt
    /// werden können
    fn reserve(&mut self, additional: usize) -> Result<(), ListError> {
        let wanted = self
            .size
            .checked_add(additional)
            .ok_or(ListError::AllocationFailure)?;
        if self.max_nodes.is_some_and(|max| wanted > max) {
            return Err(ListError::AllocationFailure);
        }

        // Alle nicht belegten Einträge hängen in der Frei-Liste
        let vacant = self.entries.len() - self.size;
        self.entries
            .try_reserve(additional.saturating_sub(vacant))
            .map_err(|_| ListError::AllocationFailure)
    }

    /// Belegt einen Slot für einen neuen Knoten (noch nicht verkettet)
    fn alloc_slot(&mut self, slot: Slot<H>) -> Result<usize, ListError> {
        self.reserve(1)?;

        match self.free_head {
            Some(index) => {
                self.free_head = match self.entries.get(index) {
                    Some(Entry::Vacant { next_free }) => *next_free,
                    _ => None,
                };
                self.entries[index] = Entry::Occupied(slot);
                Ok(index)
            }
            None => {
                self.entries.push(Entry::Occupied(slot));
                Ok(self.entries.len() - 1)
            }
        }
    }

    /// Gibt einen bereits ausgeketteten Slot zurück in die Frei-Liste
    fn free_slot(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            *entry = Entry::Vacant {
                next_free: self.free_head,
            };
            self.free_head = Some(index);
        }
    }

    fn link_front(&mut self, handle: Option<H>) -> Result<(), ListError> {
        let old_first = self.first;
        let index = self.alloc_slot(Slot {
            handle,
            previous: None,
            next: old_first,
        })?;

        match old_first {
            Some(old) => self.set_previous(old, Some(index)),
            None => self.last = Some(index),
        }
        self.first = Some(index);
        self.size += 1;
        Ok(())
    }

    fn link_back(&mut self, handle: Option<H>) -> Result<(), ListError> {
        let old_last = self.last;
        let index = self.alloc_slot(Slot {
            handle,
            previous: old_last,
            next: None,
        })?;

        match old_last {
            Some(old) => self.set_next(old, Some(index)),
            None => self.first = Some(index),
        }
        self.last = Some(index);
        self.size += 1;
        Ok(())
    }

    /// Fügt eine LED am Anfang der Liste ein
    ///
    /// Bei fehlgeschlagener Speicherbeschaffung bleibt die Liste unverändert.
    pub fn push_front(&mut self, handle: H) -> Result<(), ListError> {
        self.link_front(Some(handle))
    }

    /// Fügt eine LED am Ende der Liste ein
    ///
    /// Bei fehlgeschlagener Speicherbeschaffung bleibt die Liste unverändert.
    pub fn push_back(&mut self, handle: H) -> Result<(), ListError> {
        self.link_back(Some(handle))
    }

    /// Entfernt den ersten Knoten
    ///
    /// Bei `len() <= 1` entspricht das [`clear`](Self::clear): das Entfernen
    /// des letzten Elements leert die Liste vollständig.
    pub fn pop_front(&mut self) {
        if self.size <= 1 {
            self.clear();
            return;
        }

        let Some(old) = self.first else {
            return;
        };
        let new_first = self.slot(old).and_then(|s| s.next);

        self.free_slot(old);
        if let Some(first) = new_first {
            self.set_previous(first, None);
        }
        self.first = new_first;
        self.size -= 1;
    }

    /// Entfernt den letzten Knoten
    ///
    /// Bei `len() <= 1` entspricht das [`clear`](Self::clear).
    pub fn pop_back(&mut self) {
        if self.size <= 1 {
            self.clear();
            return;
        }

        let Some(old) = self.last else {
            return;
        };
        let new_last = self.slot(old).and_then(|s| s.previous);

        self.free_slot(old);
        if let Some(last) = new_last {
            self.set_next(last, None);
        }
        self.last = new_last;
        self.size -= 1;
    }

    /// Fügt eine LED so ein, dass sie danach auf Position `index` liegt
    ///
    /// Nachfolgende LEDs rücken eine Position nach hinten. `index` muss
    /// kleiner als `len()` sein: Anhängen am Ende geht nur über
    /// [`push_back`](Self::push_back).
    pub fn insert_at(&mut self, index: usize, handle: H) -> Result<(), ListError> {
        if index >= self.size {
            return Err(ListError::IndexOutOfRange);
        }
        if index == 0 {
            return self.push_front(handle);
        }

        let next = self.link_at(index).ok_or(ListError::IndexOutOfRange)?;
        let previous = self.slot(next).and_then(|s| s.previous);
        let inserted = self.alloc_slot(Slot {
            handle: Some(handle),
            previous,
            next: Some(next),
        })?;

        if let Some(previous) = previous {
            self.set_next(previous, Some(inserted));
        }
        self.set_previous(next, Some(inserted));
        self.size += 1;
        Ok(())
    }

    /// Entfernt die LED auf Position `index`
    ///
    /// Nachfolgende LEDs rücken eine Position nach vorne.
    pub fn remove_at(&mut self, index: usize) -> Result<(), ListError> {
        if index >= self.size {
            return Err(ListError::IndexOutOfRange);
        }
        if index == 0 {
            self.pop_front();
            return Ok(());
        }
        if index == self.size - 1 {
            self.pop_back();
            return Ok(());
        }

        let removed = self.link_at(index).ok_or(ListError::IndexOutOfRange)?;
        let Some(slot) = self.slot(removed) else {
            return Err(ListError::IndexOutOfRange);
        };
        let (previous, next) = (slot.previous, slot.next);

        if let Some(previous) = previous {
            self.set_next(previous, next);
        }
        if let Some(next) = next {
            self.set_previous(next, previous);
        }
        self.free_slot(removed);
        self.size -= 1;
        Ok(())
    }

    /// Ändert die Größe der Liste auf `new_size`
    ///
    /// Wachsen hängt Knoten mit leerem Handle an, Schrumpfen entfernt Knoten
    /// vom Ende. Der Speicher für das Wachstum wird vorab beschafft, ein
    /// Fehler lässt die Liste deshalb unverändert.
    pub fn resize(&mut self, new_size: usize) -> Result<(), ListError> {
        if new_size > self.size {
            self.reserve(new_size - self.size)?;
            while self.size < new_size {
                self.link_back(None)?;
            }
        } else {
            while self.size > new_size {
                self.pop_back();
            }
        }
        Ok(())
    }
}

impl<H: Copy> LedList<H> {
    fn node(&self, link: Link) -> Option<LedNode<'_, H>> {
        link.map(|index| LedNode { list: self, index })
    }

    /// Erster Knoten, `None` bei leerer Liste
    pub fn begin(&self) -> Option<LedNode<'_, H>> {
        self.node(self.first)
    }

    /// Position direkt hinter dem letzten Knoten
    ///
    /// Nur als Iterationsgrenze gedacht, daher immer `None`.
    pub fn end(&self) -> Option<LedNode<'_, H>> {
        self.last().and_then(|node| node.next())
    }

    /// Letzter Knoten, `None` bei leerer Liste
    pub fn last(&self) -> Option<LedNode<'_, H>> {
        self.node(self.last)
    }

    /// Knoten auf Position `index`, `None` bei `index >= len()`
    pub fn at(&self, index: usize) -> Option<LedNode<'_, H>> {
        self.node(self.link_at(index))
    }

    /// Ersetzt das Handle auf Position `index`, ohne einen Knoten anzulegen
    pub fn set(&mut self, index: usize, handle: H) -> Result<(), ListError> {
        let link = self.link_at(index).ok_or(ListError::IndexOutOfRange)?;
        let slot = self.slot_mut(link).ok_or(ListError::IndexOutOfRange)?;
        slot.handle = Some(handle);
        Ok(())
    }

    /// Iteriert vom ersten zum letzten Knoten (rückwärts via `.rev()`)
    pub fn iter(&self) -> Iter<'_, H> {
        Iter {
            list: self,
            front: self.first,
            back: self.last,
            remaining: self.size,
        }
    }

    /// Gespeicherte Handles in Listenreihenfolge
    pub fn handles(&self) -> impl DoubleEndedIterator<Item = Option<H>> + '_ {
        self.iter().map(|node| node.handle())
    }
}

/// Lesender Zeiger auf einen Knoten der Liste
pub struct LedNode<'a, H> {
    list: &'a LedList<H>,
    index: usize,
}

impl<H> Clone for LedNode<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for LedNode<'_, H> {}

impl<H> PartialEq for LedNode<'_, H> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.list, other.list) && self.index == other.index
    }
}

impl<H> Eq for LedNode<'_, H> {}

impl<H: core::fmt::Debug + Copy> core::fmt::Debug for LedNode<'_, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LedNode")
            .field("slot", &self.index)
            .field("handle", &self.handle())
            .finish()
    }
}

impl<'a, H: Copy> LedNode<'a, H> {
    fn links(&self) -> (Link, Link) {
        self.list
            .slot(self.index)
            .map_or((None, None), |s| (s.previous, s.next))
    }

    /// Gespeichertes Handle, `None` für Knoten aus `resize`
    pub fn handle(&self) -> Option<H> {
        self.list.slot(self.index).and_then(|s| s.handle)
    }

    pub fn next(&self) -> Option<LedNode<'a, H>> {
        self.list.node(self.links().1)
    }

    pub fn previous(&self) -> Option<LedNode<'a, H>> {
        self.list.node(self.links().0)
    }

    pub fn is_first(&self) -> bool {
        self.links().0.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.links().1.is_none()
    }
}

/// Iterator über die Knoten einer [`LedList`]
pub struct Iter<'a, H> {
    list: &'a LedList<H>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, H: Copy> Iterator for Iter<'a, H> {
    type Item = LedNode<'a, H>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front?;
        self.front = self.list.slot(index).and_then(|s| s.next);
        self.remaining -= 1;
        Some(LedNode {
            list: self.list,
            index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<H: Copy> DoubleEndedIterator for Iter<'_, H> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back?;
        self.back = self.list.slot(index).and_then(|s| s.previous);
        self.remaining -= 1;
        Some(LedNode {
            list: self.list,
            index,
        })
    }
}

impl<H: Copy> ExactSizeIterator for Iter<'_, H> {}

impl<'a, H: Copy> IntoIterator for &'a LedList<H> {
    type Item = LedNode<'a, H>;
    type IntoIter = Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
