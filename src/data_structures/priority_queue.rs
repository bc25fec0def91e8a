use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::{Error, Result};

/// A min-priority queue with lazy deletion, backed by `BinaryHeap`.
///
/// There is no decrease-key: a caller that improves the priority of an element
/// pushes it again and ignores the outdated entry when it surfaces. Entries are
/// never deduplicated or modified in place.
///
/// Entries with equal priority come out in insertion order. This falls out of
/// the internal sequence number and is not part of the correctness contract of
/// the shortest path engine.
#[derive(Debug, Clone)]
pub struct MinQueue<V, P>
where
    V: Copy + Debug,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap, keyed by (priority, insertion sequence)
    heap: BinaryHeap<Reverse<Entry<V, P>>>,
    /// Sequence number handed to the next pushed entry
    next_seq: u64,
}

#[derive(Debug, Clone, Copy)]
struct Entry<V, P> {
    priority: P,
    seq: u64,
    vertex: V,
}

impl<V, P: Ord> PartialEq for Entry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<V, P: Ord> Eq for Entry<V, P> {}

impl<V, P: Ord> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Debug,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority in O(log n)
    pub fn push(&mut self, vertex: V, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { priority, seq, vertex }));
    }

    /// Removes the entry with the smallest priority.
    ///
    /// Fails with [`Error::EmptyQueue`] when there is nothing to pop.
    pub fn pop_min(&mut self) -> Result<(V, P)> {
        self.pop().ok_or(Error::EmptyQueue)
    }

    /// Removes the entry with the smallest priority, if any
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.vertex, entry.priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (entry.vertex, entry.priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Debug,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
