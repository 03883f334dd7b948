use crate::deque::{Deque, Link, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An iterator over the elements of a `Deque`.
///
/// It uses a pair of nodes `front..=back` to represent the closed range of
/// nodes not yet yielded; both are `None` once the range is exhausted.
///
/// Though the `Iter` does not hold a reference to the deque,
/// it actually *borrows* (immutably) from the deque, so a phantom
/// marker of `&'a Node<T>` is added to protect the deque from being
/// written.
///
/// # Examples
///
/// ```compile_fail
/// use linked_deque::Deque;
///
/// let mut deque = Deque::from([1, 2, 3]);
/// let mut iter = deque.iter();
///
/// // Won't compile, because deque is already borrowed immutably.
/// deque.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    front: Link<T>,
    back: Link<T>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(deque: &'a Deque<T>) -> Self {
        Self {
            front: deque.head_node(),
            back: deque.tail_node(),
            #[cfg(feature = "length")]
            len: deque.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            #[cfg(feature = "length")]
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*front` and shrink the range to `front.next..=back`,
    /// or return `None` if the range is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        let front = self.front?;
        // SAFETY: `front..=back` is always a valid range of a deque borrowed
        // for `'a`, and it is not empty here.
        let current = unsafe { &*front.as_ptr() };
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.front = current.next;
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Return `*back` and shrink the range to `front..=back.prev`,
    /// or return `None` if the range is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        let back = self.back?;
        // SAFETY: `front..=back` is always a valid range of a deque borrowed
        // for `'a`, and it is not empty here.
        let current = unsafe { &*back.as_ptr() };
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.back = current.prev;
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.element)
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `Deque`.
///
/// `front..=back` denotes the nodes not yet yielded.
///
/// # Examples
///
/// The `Deque` is not readable while an `IterMut` is alive.
/// ```compile_fail
/// use linked_deque::Deque;
///
/// let mut deque = Deque::from([1, 2, 3]);
/// let mut iter = deque.iter_mut();
/// println!("{:?}", deque.peek_back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    front: Link<T>,
    back: Link<T>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(deque: &'a mut Deque<T>) -> Self {
        Self {
            front: deque.head_node(),
            back: deque.tail_node(),
            #[cfg(feature = "length")]
            len: deque.len(),
            _marker: PhantomData,
        }
    }

    /// Views the remaining elements as a read-only iterator.
    fn as_iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.front,
            back: self.back,
            #[cfg(feature = "length")]
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.as_iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    /// Return `*front` and shrink the range to `front.next..=back`,
    /// or return `None` if the range is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        let front = self.front?;
        // SAFETY: `front..=back` is a valid range of a deque borrowed mutably
        // for `'a`, and each node is yielded at most once.
        let current = unsafe { &mut *front.as_ptr() };
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.front = current.next;
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&mut current.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let back = self.back?;
        // SAFETY: `front..=back` is a valid range of a deque borrowed mutably
        // for `'a`, and each node is yielded at most once.
        let current = unsafe { &mut *back.as_ptr() };
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.back = current.prev;
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&mut current.element)
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `Deque`.
///
/// This `struct` is created by the [`into_iter`] method on [`Deque`]
/// (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: Deque::into_iter
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("deque", &self.deque)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.take_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.take_back()
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for Deque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

/// Builds a deque from a literal sequence, head first.
///
/// ```
/// use linked_deque::Deque;
///
/// let deque = Deque::from([0, 1, 2, 3, 4]);
/// assert_eq!(deque.to_string(), "0 1 2 3 4");
/// ```
impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_iter(vec)
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
