//! Insertion-ordered set with value deduplication.
//!
//! Elements live in a slab of doubly linked slots; a hash index maps each
//! value to its slot so `contains`, `add`, `add_first`, `discard` and the
//! pops all run in amortized constant time.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[derive(Clone)]
struct Slot<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A set that remembers first-insertion order.
#[derive(Clone)]
pub struct OrderedSet<T> {
    slots: Vec<Option<Slot<T>>>,
    index: HashMap<T, usize>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Append `value` unless an equal value is already present.
    ///
    /// Returns `true` if the value was inserted.
    pub fn add(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        let slot = self.alloc(value.clone(), self.tail, None);
        match self.tail {
            Some(tail) => self.slot_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.index.insert(value, slot);
        true
    }

    /// Insert `value` at the front unless an equal value is already present.
    pub fn add_first(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        let slot = self.alloc(value.clone(), None, self.head);
        match self.head {
            Some(head) => self.slot_mut(head).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.index.insert(value, slot);
        true
    }

    /// Remove `value` if present. Returns `true` if it was removed.
    pub fn discard(&mut self, value: &T) -> bool {
        match self.index.remove(value) {
            Some(slot) => {
                self.unlink(slot);
                true
            }
            None => false,
        }
    }

    /// Remove and return the most recently positioned last element.
    pub fn pop(&mut self) -> Option<T> {
        let slot = self.tail?;
        let value = self.unlink(slot);
        self.index.remove(&value);
        Some(value)
    }

    /// Remove and return the first element.
    pub fn pop_first(&mut self) -> Option<T> {
        let slot = self.head?;
        let value = self.unlink(slot);
        self.index.remove(&value);
        Some(value)
    }

    /// Elements in ascending order.
    pub fn sorted(&self) -> Vec<T>
    where
        T: Ord,
    {
        let mut values: Vec<T> = self.iter().cloned().collect();
        values.sort();
        values
    }

    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let slot = Slot { value, prev, next };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(slot);
                idx
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        }
    }

    fn unlink(&mut self, idx: usize) -> T {
        let Some(slot) = self.slots[idx].take() else {
            unreachable!("ordered set index points at an empty slot");
        };
        match slot.prev {
            Some(prev) => self.slot_mut(prev).next = slot.next,
            None => self.head = slot.next,
        }
        match slot.next {
            Some(next) => self.slot_mut(next).prev = slot.prev,
            None => self.tail = slot.prev,
        }
        self.free.push(idx);
        slot.value
    }

    fn slot_mut(&mut self, idx: usize) -> &mut Slot<T> {
        match self.slots[idx].as_mut() {
            Some(slot) => slot,
            None => unreachable!("linked slot {idx} is empty"),
        }
    }
}

impl<T> OrderedSet<T> {
    /// Iterate in insertion order. Reversible.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.index.len(),
        }
    }
}

pub struct Iter<'a, T> {
    slots: &'a [Option<Slot<T>>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.slots[self.front?].as_ref()?;
        self.front = slot.next;
        self.remaining -= 1;
        Some(&slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.slots[self.back?].as_ref()?;
        self.back = slot.prev;
        self.remaining -= 1;
        Some(&slot.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Two sets are equal when they hold the same values in the same order.
impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
