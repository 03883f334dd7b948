use crate::deque::{Deque, Link, Node};
use crate::error::{DequeError, Result};
use std::fmt::{self, Debug, Formatter};

/// A cursor over a `Deque`.
///
/// A cursor is either at a node of the deque, or at the *end sentinel*, the
/// position one past the tail. There is no sentinel before the head: moving
/// backward from the head also lands on the end sentinel, so a reverse walk
/// from [`Deque::cursor_back`] stops at [`Deque::cursor_end`] just like a
/// forward walk from [`Deque::cursor_front`].
///
/// Moving or dereferencing a cursor at the end sentinel fails with
/// [`DequeError::NullIterator`] and leaves the cursor where it was.
///
/// Cursors compare equal when they point to the same node, or when both are
/// at the end sentinel.
///
/// The cursor borrows the deque, so the deque cannot be changed while
/// the cursor is alive.
///
/// ```compile_fail
/// use linked_deque::Deque;
///
/// let mut deque = Deque::from([1, 2, 3]);
/// let cursor = deque.cursor_front();
///
/// // Won't compile, because deque is already borrowed immutably.
/// deque.delete_front();
/// println!("{:?}", cursor.get());
/// ```
pub struct Cursor<'a, T: 'a> {
    current: Link<T>,
    deque: &'a Deque<T>,
}

/// A cursor over a `Deque` with mutable access to the elements.
///
/// It moves like a [`Cursor`], and additionally hands out mutable references
/// to the element it points to. The linked structure itself cannot be changed
/// through it.
pub struct CursorMut<'a, T: 'a> {
    current: Link<T>,
    deque: &'a mut Deque<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            fn node(&self) -> Result<&Node<T>> {
                let current = self.current.ok_or(DequeError::NullIterator)?;
                // SAFETY: `current` is a live node of the borrowed deque, which
                // cannot be changed structurally while the cursor exists.
                Ok(unsafe { &*current.as_ptr() })
            }

            fn neighbor(&self, link: Link<T>) -> Option<&T> {
                // SAFETY: links of a live node point to live nodes of the same deque.
                link.map(|node| unsafe { &(*node.as_ptr()).element })
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the cursor is at the end sentinel.
            pub fn is_end(&self) -> bool {
                self.current.is_none()
            }

            /// Moves the cursor toward the tail. Moving past the tail reaches
            /// the end sentinel.
            ///
            /// Returns [`DequeError::NullIterator`] if the cursor is already at
            /// the end sentinel.
            pub fn advance(&mut self) -> Result<()> {
                self.current = self.node()?.next;
                Ok(())
            }

            /// Moves the cursor toward the head. Moving past the head reaches
            /// the end sentinel.
            ///
            /// Returns [`DequeError::NullIterator`] if the cursor is already at
            /// the end sentinel.
            pub fn retreat(&mut self) -> Result<()> {
                self.current = self.node()?.prev;
                Ok(())
            }

            /// Provides a reference to the element after the cursor, or `None`
            /// if the cursor is at the tail or at the end sentinel.
            pub fn peek_next(&self) -> Option<&T> {
                let next = self.node().ok()?.next;
                self.neighbor(next)
            }

            /// Provides a reference to the element before the cursor, or `None`
            /// if the cursor is at the head or at the end sentinel.
            pub fn peek_prev(&self) -> Option<&T> {
                let prev = self.node().ok()?.prev;
                self.neighbor(prev)
            }
        }

        impl<'a, T: Debug + 'a> Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($CURSOR))
                    .field(&self.node().map(|node| &node.element).ok())
                    .finish()
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(deque: &'a Deque<T>, current: Link<T>) -> Self {
        Self { current, deque }
    }

    /// Provides a reference to the element at the cursor, or
    /// [`DequeError::NullIterator`] if the cursor is at the end sentinel.
    ///
    /// The reference borrows the deque, not the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let deque = Deque::from([1, 2]);
    /// let mut cursor = deque.cursor_front();
    /// let first = cursor.get()?;
    /// cursor.advance()?;
    /// assert_eq!((first, cursor.get()?), (&1, &2));
    ///
    /// cursor.advance()?;
    /// assert_eq!(cursor.get(), Err(DequeError::NullIterator));
    /// assert_eq!(cursor.advance(), Err(DequeError::NullIterator));
    /// assert_eq!(cursor.retreat(), Err(DequeError::NullIterator));
    /// # Ok::<(), DequeError>(())
    /// ```
    pub fn get(&self) -> Result<&'a T> {
        let current = self.current.ok_or(DequeError::NullIterator)?;
        // SAFETY: `current` is a live node of the deque borrowed for `'a`.
        Ok(unsafe { &(*current.as_ptr()).element })
    }

    /// Provides the deque the cursor is bound to.
    pub fn deque(&self) -> &'a Deque<T> {
        self.deque
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(deque: &'a mut Deque<T>, current: Link<T>) -> Self {
        Self { current, deque }
    }

    /// Provides a reference to the element at the cursor, or
    /// [`DequeError::NullIterator`] if the cursor is at the end sentinel.
    pub fn get(&self) -> Result<&T> {
        self.node().map(|node| &node.element)
    }

    /// Provides a mutable reference to the element at the cursor, or
    /// [`DequeError::NullIterator`] if the cursor is at the end sentinel.
    pub fn get_mut(&mut self) -> Result<&mut T> {
        let current = self.current.ok_or(DequeError::NullIterator)?;
        // SAFETY: the deque is borrowed mutably by the cursor, and the
        // returned reference borrows the cursor, so it is unique.
        Ok(unsafe { &mut (*current.as_ptr()).element })
    }

    /// Converts the cursor into a mutable reference to the element at the
    /// cursor, borrowing the deque for the rest of `'a`.
    pub fn into_mut(self) -> Result<&'a mut T> {
        let current = self.current.ok_or(DequeError::NullIterator)?;
        // SAFETY: the cursor held the only borrow of the deque, and it is
        // consumed here.
        Ok(unsafe { &mut (*current.as_ptr()).element })
    }

    /// Provides a read-only cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.deque, self.current)
    }

    /// Converts into a read-only cursor at the same position.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.deque, self.current)
    }

    /// Provides a read-only view of the deque.
    pub fn view(&self) -> &Deque<T> {
        &*self.deque
    }
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::{Deque, DequeError};

    #[test]
    fn cursor_forward_and_backward() {
        let deque = Deque::from([1, 2, 3]);

        let mut forward = Vec::new();
        let mut cursor = deque.cursor_front();
        while cursor != deque.cursor_end() {
            forward.push(*cursor.get().unwrap());
            cursor.advance().unwrap();
        }
        assert_eq!(forward, [1, 2, 3]);

        let mut backward = Vec::new();
        let mut cursor = deque.cursor_back();
        while !cursor.is_end() {
            backward.push(*cursor.get().unwrap());
            cursor.retreat().unwrap();
        }
        assert_eq!(backward, [3, 2, 1]);
    }

    #[test]
    fn cursor_at_end() {
        let deque = Deque::from([1]);
        let mut cursor = deque.cursor_end();
        assert!(cursor.is_end());
        assert_eq!(cursor.get(), Err(DequeError::NullIterator));
        assert_eq!(cursor.advance(), Err(DequeError::NullIterator));
        assert_eq!(cursor.retreat(), Err(DequeError::NullIterator));
        assert!(cursor.is_end());
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.peek_prev(), None);

        let empty = Deque::<i32>::new();
        assert!(empty.cursor_front().is_end());
        assert!(empty.cursor_back().is_end());
        assert_eq!(empty.cursor_front(), empty.cursor_end());
    }

    #[test]
    fn cursor_equality() {
        let deque = Deque::from([0, 1, 2, 3, 4]);
        let mut a = deque.cursor_front();
        let b = deque.cursor_front();
        assert_eq!(a, b);

        a.advance().unwrap();
        assert_ne!(a, b);

        let mut c = b;
        c.advance().unwrap();
        assert_eq!(a, c);

        // Equal values in different nodes are different positions.
        let twins = Deque::from([7, 7]);
        let mut second = twins.cursor_front();
        second.advance().unwrap();
        assert_ne!(twins.cursor_front(), second);
        assert_eq!(second, twins.cursor_back());
    }

    #[test]
    fn cursor_peek() {
        let deque = Deque::from([1, 2, 3]);
        let mut cursor = deque.cursor_front();
        assert_eq!(cursor.peek_prev(), None);
        assert_eq!(cursor.peek_next(), Some(&2));
        cursor.advance().unwrap();
        assert_eq!(cursor.peek_prev(), Some(&1));
        assert_eq!(cursor.peek_next(), Some(&3));
        cursor.advance().unwrap();
        assert_eq!(cursor.peek_next(), None);
        assert!(std::ptr::eq(cursor.deque(), &deque));
    }

    #[test]
    fn cursor_mut() {
        let mut deque = Deque::from([1, 2, 3]);
        let mut cursor = deque.cursor_back_mut();
        *cursor.get_mut().unwrap() *= 10;
        cursor.retreat().unwrap();
        *cursor.get_mut().unwrap() *= 10;
        assert_eq!(cursor.get(), Ok(&20));
        assert_eq!(cursor.as_cursor().peek_next(), Some(&30));
        assert_eq!(cursor.view().len(), 3);
        cursor.retreat().unwrap();
        cursor.retreat().unwrap();
        assert_eq!(cursor.get_mut(), Err(DequeError::NullIterator));
        let cursor = cursor.into_cursor();
        assert!(cursor.is_end());
        assert_eq!(deque.to_string(), "1 20 30");
        deque.assert_links();
    }

    #[test]
    fn cursor_debug() {
        let deque = Deque::from([1]);
        assert_eq!(format!("{:?}", deque.cursor_front()), "Cursor(Some(1))");
        assert_eq!(format!("{:?}", deque.cursor_end()), "Cursor(None)");
    }
}
