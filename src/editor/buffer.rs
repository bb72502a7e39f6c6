use thiserror::Error;

/// Errors raised by [`TextBuffer`] storage operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BufferError {
    /// Growing the backing storage failed.
    #[error("out of memory growing buffer to {requested} bytes")]
    OutOfMemory { requested: usize },

    /// An offset outside the valid range was passed.
    #[error("offset {offset} out of bounds for buffer of length {len}")]
    OutOfBounds { offset: usize, len: usize },
}

/// Largest capacity a buffer may grow to. Allocations cannot exceed
/// `isize::MAX` bytes.
const MAX_CAPACITY: usize = isize::MAX.unsigned_abs();

/// A growable sequence of raw bytes.
///
/// Capacity is tracked explicitly and doubles whenever an insertion would
/// overflow it, so the reported capacity is deterministic regardless of
/// what the allocator hands back.
#[derive(Clone, PartialEq, Eq)]
pub struct TextBuffer {
    bytes: Vec<u8>,
    capacity: usize,
    max_capacity: usize,
}

impl TextBuffer {
    /// Create an empty buffer with room for `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if the initial allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::OutOfMemory {
                requested: capacity,
            })?;
        Ok(Self {
            bytes,
            capacity,
            max_capacity: MAX_CAPACITY,
        })
    }

    /// A buffer that refuses to grow past `max_capacity`.
    #[cfg(test)]
    pub(crate) fn with_max_capacity(
        capacity: usize,
        max_capacity: usize,
    ) -> Result<Self, BufferError> {
        Ok(Self {
            max_capacity,
            ..Self::with_capacity(capacity)?
        })
    }

    /// Number of valid bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Allocated storage size in bytes.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn get(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Append a byte at the end, growing storage if full.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if storage cannot grow.
    pub fn append(&mut self, byte: u8) -> Result<(), BufferError> {
        self.reserve_one()?;
        self.bytes.push(byte);
        Ok(())
    }

    /// Insert a byte at `offset`, shifting everything after it one place right.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfBounds`] if `offset > len`, or
    /// [`BufferError::OutOfMemory`] if storage cannot grow.
    pub fn insert(&mut self, offset: usize, byte: u8) -> Result<(), BufferError> {
        if offset > self.len() {
            return Err(BufferError::OutOfBounds {
                offset,
                len: self.len(),
            });
        }
        self.reserve_one()?;
        self.bytes.insert(offset, byte);
        Ok(())
    }

    /// Remove the byte at `offset`, shifting everything after it one place left.
    ///
    /// Returns the removed byte.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfBounds`] if `offset >= len`.
    pub fn remove(&mut self, offset: usize) -> Result<u8, BufferError> {
        if offset >= self.len() {
            return Err(BufferError::OutOfBounds {
                offset,
                len: self.len(),
            });
        }
        Ok(self.bytes.remove(offset))
    }

    /// Drop all content, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    fn reserve_one(&mut self) -> Result<(), BufferError> {
        if self.bytes.len() < self.capacity {
            return Ok(());
        }
        let requested = self.capacity.saturating_mul(2).max(1);
        if requested > self.max_capacity {
            return Err(BufferError::OutOfMemory { requested });
        }
        self.bytes
            .try_reserve_exact(requested - self.bytes.len())
            .map_err(|_| BufferError::OutOfMemory { requested })?;
        tracing::debug!(from = self.capacity, to = requested, "buffer grown");
        self.capacity = requested;
        Ok(())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            bytes: Vec::new(),
            capacity: 0,
            max_capacity: MAX_CAPACITY,
        }
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field("text", &String::from_utf8_lossy(&self.bytes))
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
