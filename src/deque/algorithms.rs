use crate::deque::Deque;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for Deque<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Deep copies: every element is cloned into a freshly allocated node, and
/// the copy shares nothing with the source.
impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        _trace!("cloning deque");
        self.iter().cloned().collect()
    }

    /// Overwrites the existing elements in place, then allocates or frees
    /// nodes only for the difference in length.
    fn clone_from(&mut self, source: &Self) {
        _trace!("cloning deque in place");
        let mut source_iter = source.iter();
        let mut overwritten = 0_usize;
        for (elem, elem_source) in self.iter_mut().zip(&mut source_iter) {
            elem.clone_from(elem_source);
            overwritten += 1;
        }
        for _ in overwritten..self.len() {
            self.delete_back();
        }
        self.extend(source_iter.cloned());
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> Deque<T> {
    /// Returns `true` if the `Deque` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque = Deque::from([0, 1, 2]);
    ///
    /// assert_eq!(deque.contains(&0), true);
    /// assert_eq!(deque.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}
