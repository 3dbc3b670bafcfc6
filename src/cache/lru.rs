//! Recency List Module
//!
//! Doubly-linked list over a slot arena, giving O(1) promotion and eviction.

// == Node ==
#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Orders items by access time.
///
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Items live in slots addressed by `usize` handles. A handle stays valid
/// until its item is removed; freed slots are reused by later pushes.
#[derive(Debug)]
pub(crate) struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an item as most recently used and returns its handle.
    pub fn push_front(&mut self, value: T) -> usize {
        let node = Node {
            value,
            prev: None,
            next: self.head,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.head {
            Some(head_idx) => {
                if let Some(head) = self.slots[head_idx].as_mut() {
                    head.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the item at `idx` as most recently used.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) || !self.is_live(idx) {
            return;
        }

        self.unlink(idx);

        let old_head = self.head;
        if let Some(node) = self.slots[idx].as_mut() {
            node.prev = None;
            node.next = old_head;
        }
        if let Some(head_idx) = old_head {
            if let Some(head) = self.slots[head_idx].as_mut() {
                head.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    // == Remove ==
    /// Removes the item at `idx` and returns it.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        if !self.is_live(idx) {
            return None;
        }
        self.unlink(idx);
        let node = self.slots[idx].take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(node.value)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used item.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(tail)
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx)?.as_ref().map(|node| &node.value)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx)?.as_mut().map(|node| &mut node.value)
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.len
    }

    /// Drops every item and releases all handles.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    fn is_live(&self, idx: usize) -> bool {
        matches!(self.slots.get(idx), Some(Some(_)))
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.slots[idx].as_ref() {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = self.slots[prev_idx].as_mut() {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = self.slots[next_idx].as_mut() {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub(crate) struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.list.slots[idx].as_ref()?;
        self.next = node.next;
        Some(&node.value)
    }
}
