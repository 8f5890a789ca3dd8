use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::LinearSequence;
use crate::storage::linear::LinearStorage;

impl<T> IntoIterator for LinearSequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            storage: self.storage,
        }
    }
}

/// An owned iterator over a [`LinearSequence`]. See [`LinearSequence::into_iter`].
///
/// Iteration pops items off the storage window from either end, so the items not yet yielded
/// stay owned by the storage and are dropped with the iterator if it is abandoned early.
pub struct IntoIter<T> {
    storage: LinearStorage<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.storage.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.storage.size(), Some(self.storage.size()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.storage.pop_tail()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.storage.as_slice()).finish()
    }
}
