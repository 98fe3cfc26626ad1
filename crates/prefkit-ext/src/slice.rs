//! Bounds-checked element access with silently ignored writes.

/// Read access that treats out-of-range indices as absent.
pub trait SafeIndex<T> {
    /// The element at `index`, or `None` when out of range.
    fn get_safe(&self, index: usize) -> Option<&T>;
}

/// Write access where out-of-range indices are silently ignored, in line with
/// the never-fails policy of the settings facade.
pub trait SafeIndexMut<T>: SafeIndex<T> {
    /// Replace the element at `index`; out of range is a no-op.
    fn set_safe(&mut self, index: usize, value: T);

    /// Remove and return the element at `index`; out of range is a no-op
    /// yielding `None`.
    fn remove_safe(&mut self, index: usize) -> Option<T>;
}

impl<T> SafeIndex<T> for [T] {
    fn get_safe(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> SafeIndex<T> for Vec<T> {
    fn get_safe(&self, index: usize) -> Option<&T> {
        self.as_slice().get_safe(index)
    }
}

impl<T> SafeIndexMut<T> for Vec<T> {
    fn set_safe(&mut self, index: usize, value: T) {
        if let Some(slot) = self.get_mut(index) {
            *slot = value;
        }
    }

    fn remove_safe(&mut self, index: usize) -> Option<T> {
        if index < self.len() {
            Some(self.remove(index))
        } else {
            None
        }
    }
}
