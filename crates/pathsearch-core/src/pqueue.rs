use std::hash::Hash;

use ahash::AHashMap;

/// Binary min-heap whose items can be located by key, giving `O(log n)` decrease-key.
///
/// Items of equal priority are extracted in the order they were inserted. An item keeps its
/// insertion order when its priority is changed.
pub struct IndexedPriorityQueue<K, P> {
    heap: Vec<Item<K, P>>,
    // We have the invariant that `index[heap[i].key] == i` for every slot `i` of the heap.
    index: AHashMap<K, usize>,
    inserted: u64,
}

struct Item<K, P> {
    key: K,
    priority: P,
    sequence: u64,
}

impl<K, P: PartialOrd> Item<K, P> {
    /// Perform `<=` comparison, breaking ties by insertion order.
    ///
    /// Incomparable priorities are treated as equal.
    fn le(&self, other: &Self) -> bool {
        if self.priority < other.priority {
            true
        } else if other.priority < self.priority {
            false
        } else {
            self.sequence <= other.sequence
        }
    }
}

impl<K: Hash + Eq + Clone, P: PartialOrd + Copy> IndexedPriorityQueue<K, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty queue with space for at least `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
            inserted: 0,
        }
    }

    /// Number of items in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue contains no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true if an item with the given key is in the queue.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Current priority of the item with the given key, if it is in the queue.
    pub fn priority_of(&self, key: &K) -> Option<P> {
        self.index.get(key).map(|&slot| self.heap[slot].priority)
    }

    /// The item which [`extract_min`](Self::extract_min) would return, without removing it.
    pub fn peek(&self) -> Option<(&K, P)> {
        self.heap.first().map(|item| (&item.key, item.priority))
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
        self.inserted = 0;
    }

    /// Adds an item to the queue.
    ///
    /// # Panics
    /// Panics if an item with the same key is already in the queue. Use
    /// [`decrease_priority`](Self::decrease_priority) to change the priority of such an item.
    #[track_caller]
    pub fn insert(&mut self, key: K, priority: P) {
        let slot = self.heap.len();
        let previous = self.index.insert(key.clone(), slot);
        assert!(previous.is_none(), "key is already in the queue");

        self.heap.push(Item {
            key,
            priority,
            sequence: self.inserted,
        });
        self.inserted += 1;
        self.sift_up(slot);
    }

    /// Removes and returns the item with the smallest priority, or `None` if the queue is empty.
    pub fn extract_min(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap.swap_remove(0);
        self.index.remove(&min.key);
        if !self.heap.is_empty() {
            self.update_index(0);
            self.sift_down(0);
        }
        Some((min.key, min.priority))
    }

    /// Sets the priority of the item with the given key and restores heap order.
    ///
    /// The new priority is expected to be lower than the current one, but any priority is
    /// accepted and the item moves to wherever it belongs.
    ///
    /// # Panics
    /// Panics if no item with the given key is in the queue.
    #[track_caller]
    pub fn decrease_priority(&mut self, key: &K, priority: P) {
        let slot = *self.index.get(key).expect("key is not in the queue");
        self.heap[slot].priority = priority;
        let slot = self.sift_up(slot);
        self.sift_down(slot);
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[parent].le(&self.heap[slot]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) -> usize {
        loop {
            let child_1 = slot * 2 + 1;
            if child_1 >= self.heap.len() {
                break;
            }

            let child_2 = child_1 + 1;
            let child = if child_2 < self.heap.len() && !self.heap[child_1].le(&self.heap[child_2])
            {
                child_2
            } else {
                child_1
            };

            if self.heap[slot].le(&self.heap[child]) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
        slot
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.update_index(a);
        self.update_index(b);
    }

    fn update_index(&mut self, slot: usize) {
        if let Some(entry) = self.index.get_mut(&self.heap[slot].key) {
            *entry = slot;
        }
    }
}

impl<K: Hash + Eq + Clone, P: PartialOrd + Copy> Default for IndexedPriorityQueue<K, P> {
    fn default() -> Self {
        Self::new()
    }
}
