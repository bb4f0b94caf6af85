//! Recency List Module
//!
//! Doubly-linked list that keeps cache entries in LRU order.
//!
//! Nodes live in a `Vec` arena and link to each other by index, so every
//! operation is O(1) without raw pointers. Freed slots are recycled through
//! a free list threaded over the `next` links.

/// Null link marker.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node<T> {
    /// `None` while the slot sits on the free list
    value: Option<T>,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// - Front = Most recently used
/// - Back = Least recently used
///
/// [`push_front`](Self::push_front) hands out a slot handle that stays valid
/// until that element is removed.
#[derive(Debug)]
pub struct RecencyList<T> {
    arena: Vec<Node<T>>,
    head: usize,
    tail: usize,
    free: usize,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates a new empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts `value` as most recently used and returns its slot handle.
    pub fn push_front(&mut self, value: T) -> usize {
        let idx = if self.free != NIL {
            let idx = self.free;
            self.free = self.arena[idx].next;
            self.arena[idx].value = Some(value);
            idx
        } else {
            self.arena.push(Node {
                value: Some(value),
                prev: NIL,
                next: NIL,
            });
            self.arena.len() - 1
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the element at `idx` as most recently used.
    ///
    /// Returns false if `idx` is not a live slot.
    pub fn move_to_front(&mut self, idx: usize) -> bool {
        if !self.is_live(idx) {
            return false;
        }
        if self.head != idx {
            self.unlink(idx);
            self.link_front(idx);
        }
        true
    }

    // == Remove ==
    /// Removes the element at `idx`, returning it.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        if !self.is_live(idx) {
            return None;
        }
        self.unlink(idx);
        let value = self.arena[idx].value.take();
        self.arena[idx].next = self.free;
        self.free = idx;
        self.len -= 1;
        value
    }

    // == Pop Back ==
    /// Removes and returns the least recently used element.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            None
        } else {
            self.remove(self.tail)
        }
    }

    // == Accessors ==
    /// Returns the element at `idx`, if live.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.arena.get(idx).and_then(|node| node.value.as_ref())
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every element and releases the arena slots.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free = NIL;
        self.len = 0;
    }

    /// Iterates from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    // --- Internal link maintenance ---

    fn is_live(&self, idx: usize) -> bool {
        self.arena
            .get(idx)
            .is_some_and(|node| node.value.is_some())
    }

    fn link_front(&mut self, idx: usize) {
        self.arena[idx].prev = NIL;
        self.arena[idx].next = self.head;
        if self.head != NIL {
            self.arena[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.arena[idx].prev, self.arena[idx].next);
        if prev != NIL {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.arena[idx].prev = NIL;
        self.arena[idx].next = NIL;
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    current: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NIL {
            return None;
        }
        let node = &self.list.arena[self.current];
        self.current = node.next;
        node.value.as_ref()
    }
}
