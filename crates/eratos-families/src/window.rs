//! Fixed-capacity ring buffer for sliding windows over prime streams.

/// A ring buffer that holds at most `capacity` values.
///
/// Pushing into a full window evicts and returns the oldest value.
/// Index 0 is always the oldest value.
#[derive(Clone, Debug)]
pub struct Window<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> Window<T> {
    /// Creates an empty window.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be positive");
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Maximum number of values held.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of values held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the window holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next push evicts.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    /// Appends `value` as the newest element.
    ///
    /// Returns the evicted oldest value when the window was full.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.is_full() {
            let evicted = self.slots[self.head].replace(value);
            self.head = self.slot(1);
            evicted
        } else {
            let tail = self.slot(self.len);
            self.slots[tail] = Some(value);
            self.len += 1;
            None
        }
    }

    /// Removes and returns the oldest value.
    pub fn pop_oldest(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = self.slot(1);
        self.len -= 1;
        value
    }

    /// The value at `index`, counting from the oldest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.slot(index)].as_ref()
    }

    /// The oldest value.
    #[must_use]
    pub fn oldest(&self) -> Option<&T> {
        self.get(0)
    }

    /// Values from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }
}
