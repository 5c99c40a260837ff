use std::collections::{HashMap, VecDeque};

use crate::error::Error;

/// FIFO queue with an optional capacity.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    storage: VecDeque<T>,
    capacity: Option<usize>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            storage: VecDeque::new(),
            capacity: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self {
            storage: items.into_iter().collect(),
            capacity: None,
        }
    }

    pub fn enqueue(&mut self, item: T) -> Result<(), Error> {
        if let Some(capacity) = self.capacity {
            if self.storage.len() >= capacity {
                return Err(Error::QueueFull(capacity));
            }
        }

        self.storage.push_back(item);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.storage.pop_front()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn state(&self) -> impl Iterator<Item = &T> {
        self.storage.iter()
    }
}

pub fn counters_equal(a: &HashMap<usize, i64>, b: &HashMap<usize, i64>) -> bool {
    a.len() == b.len() && a.iter().all(|(k, v)| b.get(k) == Some(v))
}

pub fn add_counters(base: &HashMap<usize, i64>, additions: &HashMap<usize, i64>) -> HashMap<usize, i64> {
    let mut result = base.clone();
    for (k, v) in additions {
        *result.entry(*k).or_insert(0) += v;
    }

    result
}
