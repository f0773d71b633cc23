//! Fixed capacity storage that keeps an evenly spread subset of a longer input,
//! used to downsample recorded traces without growing memory with simulation length.

use crate::error::{IndexError, SimulationError, StorageError};


/// Stores a portion of `input_size` incoming values in a buffer of `capacity` slots
///
/// Input number `j` is written to slot `floor(j * capacity / (input_size + 1))`,
/// when several inputs map to the same slot the latest one is kept. Values are
/// stored densely, if `capacity > input_size + 1` some slot numbers are never
/// reached and later values move up to fill them. Appending once the slot would fall outside of the buffer fails with
/// [`StorageError::CapacityExceeded`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetStorage<T> {
    buffer: Vec<T>,
    capacity: usize,
    input_size: usize,
    received: usize,
}

impl<T> SubsetStorage<T> {
    pub fn new(capacity: usize, input_size: usize) -> Self {
        SubsetStorage {
            buffer: Vec::with_capacity(capacity),
            capacity,
            input_size,
            received: 0,
        }
    }

    fn slot(&self, input_index: usize) -> usize {
        input_index * self.capacity / (self.input_size + 1)
    }

    fn check_index(&self, index: usize) -> Result<(), SimulationError> {
        if index >= self.buffer.len() {
            return Err(IndexError::OutOfRange { index, len: self.buffer.len() }.into());
        }

        Ok(())
    }

    /// Offers the next input value to the storage
    pub fn append(&mut self, value: T) -> Result<(), SimulationError> {
        let slot = self.slot(self.received);
        if slot >= self.capacity {
            return Err(StorageError::CapacityExceeded(self.capacity).into());
        }

        let len = self.buffer.len();
        match self.buffer.last_mut() {
            Some(last) if slot < len => *last = value,
            _ => self.buffer.push(value),
        }
        self.received += 1;

        Ok(())
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of buffer slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of input values accepted so far
    pub fn received(&self) -> usize {
        self.received
    }

    pub fn get(&self, index: usize) -> Result<&T, SimulationError> {
        self.check_index(index)?;

        Ok(&self.buffer[index])
    }

    /// Gets the value `offset` places before the last stored value
    pub fn get_from_end(&self, offset: usize) -> Result<&T, SimulationError> {
        let len = self.buffer.len();
        if offset >= len {
            return Err(IndexError::OutOfRange { index: offset, len }.into());
        }

        Ok(&self.buffer[len - 1 - offset])
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<(), SimulationError> {
        self.check_index(index)?;
        self.buffer[index] = value;

        Ok(())
    }

    /// Removes a stored value and rewinds the input counter to the first input
    /// that maps past the remaining values, so later appends refill the freed slot
    pub fn remove(&mut self, index: usize) -> Result<T, SimulationError> {
        self.check_index(index)?;
        let value = self.buffer.remove(index);

        let first_input_of_next_slot = (self.buffer.len() * (self.input_size + 1))
            .div_ceil(self.capacity.max(1));
        self.received = self.received.min(first_input_of_next_slot);

        Ok(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buffer.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }
}

impl<T: PartialEq> SubsetStorage<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.buffer.contains(value)
    }
}

impl<'a, T> IntoIterator for &'a SubsetStorage<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.iter()
    }
}
