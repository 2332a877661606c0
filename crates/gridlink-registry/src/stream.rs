//! Stream handle
//!
//! A StreamHandle is a client-side buffered writer into a named mapping.
//! Entries accumulate in a local buffer and are written through when the
//! buffer fills, on `flush`, or on `close`. Dropping a handle without
//! closing it discards whatever is still buffered; that is the contract,
//! not an accident, and the drop logs a warning so the loss is visible.
//!
//! Every resolution produces a fresh handle with its own buffer; two handles
//! for the same name share only the target mapping.

use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Buffered write-channel into a named mapping. Must be closed to flush.
pub struct StreamHandle<K, V>
where
    K: Eq + Hash,
{
    name: String,
    target: Arc<DashMap<K, V>>,
    buffer: Vec<(K, V)>,
    capacity: usize,
}

impl<K, V> StreamHandle<K, V>
where
    K: Eq + Hash,
{
    pub(crate) fn new(name: impl Into<String>, target: Arc<DashMap<K, V>>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            target,
            buffer: Vec::new(),
            capacity,
        }
    }

    /// Name of the target mapping.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Buffer one entry; writes the buffer through once it reaches capacity.
    pub fn add(&mut self, key: K, value: V) {
        self.buffer.push((key, value));
        if self.buffer.len() >= self.capacity {
            self.flush();
        }
    }

    /// Write every buffered entry through to the target mapping.
    pub fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let flushed = self.buffer.len();
        for (key, value) in self.buffer.drain(..) {
            self.target.insert(key, value);
        }
        tracing::debug!(stream = %self.name, entries = flushed, "flushed stream buffer");
    }

    /// Flush and consume the handle. The only correct way to finish with a
    /// stream; a handle that is dropped instead loses its buffered entries.
    pub fn close(mut self) {
        self.flush();
    }

    /// Number of buffered entries not yet written through.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

impl<K, V> Drop for StreamHandle<K, V>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            tracing::warn!(
                stream = %self.name,
                lost = self.buffer.len(),
                "stream handle dropped without close; buffered entries lost"
            );
        }
    }
}

impl<K, V> std::fmt::Debug for StreamHandle<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamHandle")
            .field("name", &self.name)
            .field("pending", &self.buffer.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(capacity: usize) -> (StreamHandle<i64, String>, Arc<DashMap<i64, String>>) {
        let target = Arc::new(DashMap::new());
        (StreamHandle::new("events", target.clone(), capacity), target)
    }

    #[test]
    fn add_buffers_until_close() {
        let (mut s, target) = stream(512);
        s.add(1, "a".to_string());
        s.add(2, "b".to_string());

        assert_eq!(s.pending(), 2);
        assert!(target.is_empty());

        s.close();
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn buffer_writes_through_at_capacity() {
        let (mut s, target) = stream(4);
        for i in 0..10 {
            s.add(i, i.to_string());
        }

        // Two full buffers written through, two entries still pending.
        assert_eq!(target.len(), 8);
        assert_eq!(s.pending(), 2);

        s.close();
        assert_eq!(target.len(), 10);
    }

    #[test]
    fn drop_without_close_loses_the_buffer() {
        let (mut s, target) = stream(512);
        for i in 0..100 {
            s.add(i, i.to_string());
        }
        drop(s);

        assert!(target.len() < 100);
        assert!(target.is_empty());
    }

    #[test]
    fn explicit_flush_writes_through() {
        let (mut s, target) = stream(512);
        s.add(1, "a".to_string());
        s.flush();

        assert_eq!(s.pending(), 0);
        assert_eq!(target.len(), 1);

        // Flushing an empty buffer is a no-op.
        s.flush();
        assert_eq!(target.len(), 1);
        s.close();
    }
}
