use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};

use crate::sequence::traits::{
    AppendSequence, InsertSequence, RemoveSequence, ReplaceSequence, Sequence,
};
use crate::storage::error::{CapacityOverflow, IndexOutOfBounds, LinearStorageError};
use crate::storage::linear::LinearStorage;

const MIN_GROWTH: usize = 2;

/// A variable size, double-ended sequence built on [`LinearStorage`].
///
/// Items can be added cheaply at either end: the storage keeps free slots on both sides of the
/// occupied window, and when one side runs dry the sequence reserves room proportional to its
/// length so that repeated single additions are amortized `O(1)`. Insertion in the middle moves
/// only the shorter of the two segments around the insertion point.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the sequence.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `prepend` | `O(1)`*, `O(n)` |
/// | `insert` | `O(min(i, n-i))`*, `O(n)` |
/// | `replace` | `O(1)` |
/// | `remove` | `O(min(i, n-i))` |
/// | `remove_first` | `O(1)` |
/// | `remove_last` | `O(1)` |
///
/// \* Amortized; a reallocation takes `O(n)`.
pub struct LinearSequence<T> {
    pub(crate) storage: LinearStorage<T>,
}

impl<T> LinearSequence<T> {
    /// Creates a sequence with length and capacity 0. Memory is allocated once items arrive.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::sequence::LinearSequence;
    /// let seq: LinearSequence<u8> = LinearSequence::new();
    /// assert_eq!(seq.len(), 0);
    /// assert_eq!(seq.capacity(), 0);
    /// ```
    pub const fn new() -> LinearSequence<T> {
        LinearSequence {
            storage: LinearStorage::new(),
        }
    }

    /// Creates a sequence pre-allocated for at least `capacity` items.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if `capacity` exceeds the maximum allocation size.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::sequence::LinearSequence;
    /// let mut seq = LinearSequence::with_capacity(5).unwrap();
    /// assert_eq!(seq.capacity(), 5);
    /// for i in 0..5 {
    ///     seq.append(i).unwrap();
    /// }
    /// assert_eq!(seq.capacity(), 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<LinearSequence<T>, CapacityOverflow> {
        Ok(LinearSequence {
            storage: LinearStorage::with_capacity(capacity)?,
        })
    }

    /// The number of items in the sequence.
    pub const fn len(&self) -> usize {
        self.storage.size()
    }

    /// The current physical capacity, occupied or not.
    pub const fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns true if the sequence contains no items.
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Borrows the item at the given index.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.storage.get(index)
    }

    /// Mutably borrows the item at the given index.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, len)`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.storage.get_mut(index)
    }

    /// Overwrites the item at the given index, returning the previous item.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, len)`.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::sequence::LinearSequence;
    /// let mut seq: LinearSequence<_> = (0..3).collect();
    /// assert_eq!(seq.replace(1, 10), Ok(1));
    /// assert_eq!(&*seq, &[0, 10, 2]);
    /// ```
    pub fn replace(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds> {
        self.storage.set(index, item)
    }

    /// Adds an item after the last item, reserving amortizing tail room if none is left.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the required capacity cannot be represented.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::sequence::LinearSequence;
    /// let mut seq = LinearSequence::new();
    /// for i in 0..=5 {
    ///     seq.append(i).unwrap();
    /// }
    /// assert_eq!(&*seq, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn append(&mut self, item: T) -> Result<(), CapacityOverflow> {
        if self.storage.tail_slack() == 0 {
            self.storage.ensure_tail_capacity(self.grown_by())?;
        }
        self.storage.push_tail(item)
    }

    /// Adds an item before the first item, reserving amortizing head room if none is left.
    ///
    /// # Errors
    /// Fails with [`CapacityOverflow`] if the required capacity cannot be represented.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::sequence::LinearSequence;
    /// let mut seq = LinearSequence::new();
    /// seq.append(2).unwrap();
    /// seq.prepend(1).unwrap();
    /// assert_eq!(&*seq, &[1, 2]);
    /// ```
    pub fn prepend(&mut self, item: T) -> Result<(), CapacityOverflow> {
        if self.storage.head_slack() == 0 {
            self.storage.ensure_head_capacity(self.grown_by())?;
        }
        self.storage.push_head(item)
    }

    /// Inserts an item at the given index, moving the items at and after it up by one.
    /// `index == len` appends.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index > len`, or with [`CapacityOverflow`] if the
    /// required capacity cannot be represented.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::sequence::LinearSequence;
    /// let mut seq: LinearSequence<_> = (0..3).collect();
    /// seq.insert(1, 100).unwrap();
    /// seq.insert(1, 200).unwrap();
    /// seq.insert(5, 300).unwrap();
    /// assert_eq!(&*seq, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), LinearStorageError> {
        // SAFETY: The single gap slot is written immediately, before any other use of the
        // storage.
        unsafe {
            self.storage.ensure_split_capacity(index, 1)?;
            self.storage.write_gap(index, item);
        }
        Ok(())
    }

    /// Inserts all items of an iterator at the given index in one move, opening the whole gap up
    /// front instead of shifting repeatedly. `index == len` appends.
    ///
    /// An iterator which yields fewer items than its [`ExactSizeIterator`] length promised is a
    /// logic error in the iterator; the unfilled remainder of the gap is closed again and the
    /// items that did arrive stay inserted.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index > len`, or with [`CapacityOverflow`] if the
    /// required capacity cannot be represented.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::sequence::LinearSequence;
    /// let mut seq: LinearSequence<_> = (0..4).collect();
    /// seq.insert_all(2, [8, 9]).unwrap();
    /// assert_eq!(&*seq, &[0, 1, 8, 9, 2, 3]);
    /// ```
    pub fn insert_all<I>(&mut self, index: usize, items: I) -> Result<(), LinearStorageError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = items.into_iter();
        let extra = iter.len();

        // SAFETY: Every gap slot is either written below or closed again, before any other use
        // of the storage.
        unsafe {
            self.storage.ensure_split_capacity(index, extra)?;

            let mut written = 0;
            while written < extra {
                match iter.next() {
                    Some(item) => {
                        self.storage.write_gap(index + written, item);
                        written += 1;
                    }
                    None => break,
                }
            }

            if written < extra {
                self.storage.close_gap(index + written, extra - written);
            }
        }

        Ok(())
    }

    /// Removes and returns the item at the given index, moving later items down by one.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`] if `index` is outside `[0, len)`.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::sequence::LinearSequence;
    /// let mut seq: LinearSequence<_> = "Hello world!".chars().collect();
    /// assert_eq!(seq.remove(1), Ok('e'));
    /// assert_eq!(seq.remove(4), Ok(' '));
    /// assert_eq!(seq, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.storage.remove(index)
    }

    /// Removes and returns the first item, if any.
    ///
    /// # Examples
    /// ```
    /// # use linear_sequence::sequence::LinearSequence;
    /// let mut seq: LinearSequence<_> = (0..3).collect();
    /// assert_eq!(seq.remove_first(), Some(0));
    /// assert_eq!(seq.remove_first(), Some(1));
    /// assert_eq!(seq.remove_first(), Some(2));
    /// assert_eq!(seq.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        self.storage.pop_head()
    }

    /// Removes and returns the last item, if any.
    pub fn remove_last(&mut self) -> Option<T> {
        self.storage.pop_tail()
    }

    /// The amount of extra room to reserve when an end runs out of slack, proportional to the
    /// current length so that repeated single additions are amortized.
    fn grown_by(&self) -> usize {
        cmp::max(self.len(), MIN_GROWTH)
    }
}

impl<T> Sequence<T> for LinearSequence<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.get(index)
    }
}

impl<T> ReplaceSequence<T> for LinearSequence<T> {
    fn replace(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds> {
        self.replace(index, item)
    }
}

impl<T> AppendSequence<T> for LinearSequence<T> {
    fn append(&mut self, item: T) -> Result<(), CapacityOverflow> {
        self.append(item)
    }

    fn prepend(&mut self, item: T) -> Result<(), CapacityOverflow> {
        self.prepend(item)
    }
}

impl<T> InsertSequence<T> for LinearSequence<T> {
    fn insert(&mut self, index: usize, item: T) -> Result<(), LinearStorageError> {
        self.insert(index, item)
    }
}

impl<T> RemoveSequence<T> for LinearSequence<T> {
    fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.remove(index)
    }

    fn remove_first(&mut self) -> Option<T> {
        self.remove_first()
    }

    fn remove_last(&mut self) -> Option<T> {
        self.remove_last()
    }
}

impl<T> Extend<T> for LinearSequence<T> {
    /// # Panics
    /// Panics if the required capacity cannot be represented; [`Extend`] offers no way to
    /// surface the error.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item).unwrap_or_else(|error| panic!("{error}"));
        }
    }
}

impl<T> FromIterator<T> for LinearSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut seq = LinearSequence::with_capacity(iter.size_hint().0)
            .unwrap_or_else(|error| panic!("{error}"));

        seq.extend(iter);
        seq
    }
}

impl<T> Default for LinearSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for LinearSequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.storage.as_slice()
    }
}

impl<T> DerefMut for LinearSequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.storage.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for LinearSequence<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for LinearSequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for LinearSequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for LinearSequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for LinearSequence<T> {
    fn clone(&self) -> Self {
        LinearSequence {
            storage: self.storage.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for LinearSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for LinearSequence<T> {}

impl<T: Debug> Debug for LinearSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearSequence")
            .field("contents", &&**self)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: Debug> Display for LinearSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
