use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::deque::cursor::{Cursor, CursorMut};
use crate::error::{DequeError, Result};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
mod ops;

/// The `Deque` is a double-ended queue built from a doubly-linked chain of
/// heap-allocated nodes, one node per element.
/// Pushing, peeking and deleting at either end take constant time, and so does
/// splicing another deque onto the back.
///
/// The `Deque` contains:
/// - `head`, the first node of the chain, which owns the rest of the chain
///   through the `next` links;
/// - `tail`, a non-owning back-reference to the last node, used for constant
///   time access to the back and for reverse traversal;
/// - a length field `len` indicating the length of the deque. It can be disabled
///   by disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// linked_deque = { default-features = false }
/// ```
///
/// Both `head` and `tail` are empty if and only if the deque is empty.
///
/// # Naming Conventions
///
/// - `peek_*`: look at a boundary element *without* removing it;
/// - `delete_*`: remove and drop a boundary element, doing nothing when empty;
/// - `concat`: append *copies* of another deque, leaving it untouched;
/// - `splice`/`append`: move the nodes of another deque, leaving it empty.
pub struct Deque<T> {
    head: Link<T>,
    tail: Link<T>,
    #[cfg(feature = "length")]
    /// the length of the deque
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) prev: Link<T>,
    pub(crate) element: T,
}

/// A non-empty chain of nodes detached from a deque, used in splicing.
///
/// When detached, `front.prev` and `back.next` are both `None`.
pub(crate) struct DetachedNodes<T> {
    front: NonNull<Node<T>>,
    back: NonNull<Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
}

// private methods
impl<T> Deque<T> {
    /// Attach a detached node `node` before the head of the deque.
    ///
    /// It is unsafe because it does not check whether `node` is detached, or
    /// whether it is already owned by some deque. Attaching a node that is not
    /// detached makes both chains ill-formed.
    unsafe fn attach_front(&mut self, mut node: NonNull<Node<T>>) {
        node.as_mut().prev = None;
        node.as_mut().next = self.head;
        match self.head {
            Some(mut head) => head.as_mut().prev = Some(node),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Attach a detached node `node` after the tail of the deque.
    ///
    /// It is unsafe for the same reason as [`Deque::attach_front`].
    unsafe fn attach_back(&mut self, mut node: NonNull<Node<T>>) {
        node.as_mut().next = None;
        node.as_mut().prev = self.tail;
        match self.tail {
            Some(mut tail) => tail.as_mut().next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Detach the head node and return it as a box, or return `None` if the
    /// deque is empty.
    ///
    /// It is safe because `head` is always a node owned by this deque.
    fn detach_front(&mut self) -> Option<Box<Node<T>>> {
        let head = self.head?;
        // SAFETY: `head` was allocated with the layout of `Node<T>` and is
        // owned by this deque, so it is reclaimed exactly once here.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        match self.head {
            // SAFETY: the successor of the old head is a live node of this deque.
            Some(mut next) => unsafe { next.as_mut().prev = None },
            None => self.tail = None,
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(node)
    }

    /// Detach the tail node and return it as a box, or return `None` if the
    /// deque is empty.
    ///
    /// It is safe because `tail` is always a node owned by this deque.
    fn detach_back(&mut self) -> Option<Box<Node<T>>> {
        let tail = self.tail?;
        // SAFETY: `tail` was allocated with the layout of `Node<T>` and is
        // owned by this deque, so it is reclaimed exactly once here.
        let node = unsafe { Box::from_raw(tail.as_ptr()) };
        self.tail = node.prev;
        match self.tail {
            // SAFETY: the predecessor of the old tail is a live node of this deque.
            Some(mut prev) => unsafe { prev.as_mut().next = None },
            None => self.head = None,
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(node)
    }

    /// Detach all nodes from the deque, and return the detached nodes, or return
    /// `None` if the deque is empty. The deque is left empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        let front = self.head.take()?;
        let back = self.tail.take()?;
        #[cfg(feature = "length")]
        let len = std::mem::take(&mut self.len);
        Some(DetachedNodes {
            front,
            back,
            #[cfg(feature = "length")]
            len,
        })
    }

    /// Attach detached nodes after the tail of the deque.
    ///
    /// It is safe because a `DetachedNodes` always holds a well-formed chain
    /// that no deque owns.
    pub(crate) fn attach_nodes_back(&mut self, detached: DetachedNodes<T>) {
        let mut front = detached.front;
        match self.tail {
            // SAFETY: `tail` is a live node of this deque and `front` is the
            // first node of a detached chain, so relinking them is sound.
            Some(mut tail) => unsafe {
                tail.as_mut().next = Some(front);
                front.as_mut().prev = Some(tail);
            },
            None => self.head = Some(front),
        }
        self.tail = Some(detached.back);
        #[cfg(feature = "length")]
        {
            self.len += detached.len;
        }
    }

    /// Attach detached nodes before the head of the deque.
    pub(crate) fn attach_nodes_front(&mut self, detached: DetachedNodes<T>) {
        let mut back = detached.back;
        match self.head {
            // SAFETY: `head` is a live node of this deque and `back` is the
            // last node of a detached chain, so relinking them is sound.
            Some(mut head) => unsafe {
                head.as_mut().prev = Some(back);
                back.as_mut().next = Some(head);
            },
            None => self.tail = Some(back),
        }
        self.head = Some(detached.front);
        #[cfg(feature = "length")]
        {
            self.len += detached.len;
        }
    }

    pub(crate) fn head_node(&self) -> Link<T> {
        self.head
    }

    pub(crate) fn tail_node(&self) -> Link<T> {
        self.tail
    }

    /// Remove the first element and return it, or `None` if the deque is empty.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        self.detach_front().map(Node::into_element)
    }

    /// Remove the last element and return it, or `None` if the deque is empty.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        self.detach_back().map(Node::into_element)
    }
}

impl<T> Deque<T> {
    /// Creates an empty `Deque`.
    ///
    /// # Examples
    /// ```
    /// use linked_deque::Deque;
    /// let deque: Deque<u32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            #[cfg(feature = "length")]
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `Deque` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::new();
    /// assert!(deque.is_empty());
    ///
    /// deque.push_front("foo");
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `Deque`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time with the `length`
    /// feature, and in *O*(*n*) time without it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::new();
    ///
    /// deque.push_front(2);
    /// assert_eq!(deque.len(), 1);
    ///
    /// deque.push_front(1);
    /// assert_eq!(deque.len(), 2);
    ///
    /// deque.push_back(3);
    /// assert_eq!(deque.len(), 3);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `Deque`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::from([1, 2]);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert!(deque.peek_front().is_err());
    ///
    /// deque.push_back(3);
    /// assert_eq!(deque.len(), 1);
    /// ```
    pub fn clear(&mut self) {
        _trace!("clearing deque");
        while self.detach_front().is_some() {}
    }

    /// Adds an element first in the deque.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Aborts
    ///
    /// Aborts through [`handle_alloc_error`] if the node cannot be allocated.
    /// Use [`Deque::try_push_front`] to handle that case instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::new();
    ///
    /// deque.push_front(2);
    /// assert_eq!(deque.peek_front(), Ok(&2));
    ///
    /// deque.push_front(1);
    /// assert_eq!(deque.peek_front(), Ok(&1));
    /// assert_eq!(deque.peek_back(), Ok(&2));
    /// ```
    ///
    /// [`handle_alloc_error`]: std::alloc::handle_alloc_error
    pub fn push_front(&mut self, elt: T) {
        if self.try_push_front(elt).is_err() {
            alloc::handle_alloc_error(Layout::new::<Node<T>>());
        }
    }

    /// Adds an element first in the deque, or returns
    /// [`DequeError::AllocationFailure`] if the node cannot be allocated.
    ///
    /// The deque is unchanged when an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::new();
    /// deque.try_push_front(1)?;
    /// assert_eq!(deque.peek_front(), Ok(&1));
    /// # Ok::<(), linked_deque::DequeError>(())
    /// ```
    pub fn try_push_front(&mut self, elt: T) -> Result<()> {
        let node = Node::try_new_detached(elt)?;
        // SAFETY: `node` is freshly allocated, so it is detached.
        unsafe { self.attach_front(node) };
        Ok(())
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Aborts
    ///
    /// Aborts through [`handle_alloc_error`] if the node cannot be allocated.
    /// Use [`Deque::try_push_back`] to handle that case instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.peek_back(), Ok(&3));
    /// assert_eq!(deque.peek_front(), Ok(&1));
    /// ```
    ///
    /// [`handle_alloc_error`]: std::alloc::handle_alloc_error
    pub fn push_back(&mut self, elt: T) {
        if self.try_push_back(elt).is_err() {
            alloc::handle_alloc_error(Layout::new::<Node<T>>());
        }
    }

    /// Appends an element to the back of the deque, or returns
    /// [`DequeError::AllocationFailure`] if the node cannot be allocated.
    ///
    /// The deque is unchanged when an error is returned.
    pub fn try_push_back(&mut self, elt: T) -> Result<()> {
        let node = Node::try_new_detached(elt)?;
        // SAFETY: `node` is freshly allocated, so it is detached.
        unsafe { self.attach_back(node) };
        Ok(())
    }

    /// Provides a reference to the front element *without* removing it, or
    /// [`DequeError::EmptyDeque`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.peek_front(), Err(DequeError::EmptyDeque));
    ///
    /// deque.push_front(1);
    /// assert_eq!(deque.peek_front(), Ok(&1));
    /// assert_eq!(deque.peek_front(), Ok(&1)); // peeking never removes
    /// ```
    #[inline]
    pub fn peek_front(&self) -> Result<&T> {
        self.cursor_front()
            .get()
            .map_err(|_| DequeError::EmptyDeque)
    }

    /// Provides a mutable reference to the front element, or
    /// [`DequeError::EmptyDeque`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::from([1, 2]);
    /// *deque.peek_front_mut()? = 5;
    /// assert_eq!(deque.peek_front(), Ok(&5));
    /// # Ok::<(), linked_deque::DequeError>(())
    /// ```
    #[inline]
    pub fn peek_front_mut(&mut self) -> Result<&mut T> {
        self.cursor_front_mut()
            .into_mut()
            .map_err(|_| DequeError::EmptyDeque)
    }

    /// Provides a reference to the back element *without* removing it, or
    /// [`DequeError::EmptyDeque`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.peek_back(), Err(DequeError::EmptyDeque));
    ///
    /// deque.push_back(1);
    /// deque.push_front(0);
    /// assert_eq!(deque.peek_back(), Ok(&1));
    /// ```
    #[inline]
    pub fn peek_back(&self) -> Result<&T> {
        self.cursor_back()
            .get()
            .map_err(|_| DequeError::EmptyDeque)
    }

    /// Provides a mutable reference to the back element, or
    /// [`DequeError::EmptyDeque`] if the deque is empty.
    #[inline]
    pub fn peek_back_mut(&mut self) -> Result<&mut T> {
        self.cursor_back_mut()
            .into_mut()
            .map_err(|_| DequeError::EmptyDeque)
    }

    /// Removes and drops the first element. Does nothing if the deque is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::from([1, 2]);
    /// deque.delete_front();
    /// assert_eq!(deque.peek_front(), Ok(&2));
    /// deque.delete_front();
    /// assert!(deque.is_empty());
    /// deque.delete_front(); // no-op
    /// assert!(deque.is_empty());
    /// ```
    pub fn delete_front(&mut self) {
        drop(self.detach_front());
    }

    /// Removes and drops the last element. Does nothing if the deque is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::from([1, 2]);
    /// deque.delete_back();
    /// assert_eq!(deque.peek_back(), Ok(&1));
    /// ```
    pub fn delete_back(&mut self) {
        drop(self.detach_back());
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is at the end sentinel if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque = Deque::from([1, 2, 3]);
    /// let cursor = deque.cursor_front();
    /// assert_eq!(cursor.get(), Ok(&1));
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head)
    }

    /// Provides a cursor at the last node.
    ///
    /// The cursor is at the end sentinel if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque = Deque::from([1, 2, 3]);
    /// let mut cursor = deque.cursor_back();
    /// let mut reversed = Vec::new();
    /// while cursor != deque.cursor_end() {
    ///     reversed.push(*cursor.get()?);
    ///     cursor.retreat()?;
    /// }
    /// assert_eq!(reversed, [3, 2, 1]);
    /// # Ok::<(), linked_deque::DequeError>(())
    /// ```
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail)
    }

    /// Provides a cursor at the end sentinel, one past the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, DequeError};
    ///
    /// let deque = Deque::from([1, 2, 3]);
    /// let cursor = deque.cursor_end();
    /// assert!(cursor.is_end());
    /// assert_eq!(cursor.get(), Err(DequeError::NullIterator));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// Provides a cursor with mutable access to the elements, at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::from([1, 2, 3]);
    /// let mut cursor = deque.cursor_front_mut();
    ///
    /// if let Ok(x) = cursor.get_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.get(), Ok(&5));
    /// ```
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        CursorMut::new(self, head)
    }

    /// Provides a cursor with mutable access to the elements, at the last node.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let tail = self.tail;
        CursorMut::new(self, tail)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::new();
    ///
    /// deque.push_back(0);
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// let mut iter = deque.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::from([0, 1, 2]);
    ///
    /// for element in deque.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(deque), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the deque.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque1 = Deque::from(['a']);
    /// let mut deque2 = Deque::from(['b', 'c']);
    ///
    /// deque1.append(&mut deque2);
    ///
    /// assert_eq!(deque1, Deque::from(['a', 'b', 'c']));
    /// assert!(deque2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            _trace!("splicing detached nodes onto the back");
            self.attach_nodes_back(detached);
        }
    }

    /// Moves all elements from `other` to the beginning of the deque.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque1 = Deque::from(['a']);
    /// let mut deque2 = Deque::from(['b', 'c']);
    ///
    /// deque2.prepend(&mut deque1);
    ///
    /// assert_eq!(deque2, Deque::from(['a', 'b', 'c']));
    /// assert!(deque1.is_empty());
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            _trace!("splicing detached nodes onto the front");
            self.attach_nodes_front(detached);
        }
    }

    /// Consumes `other` and links its nodes after the tail of the deque.
    ///
    /// No element is copied or moved in memory; only the boundary links are
    /// rewritten. Splicing a deque into itself cannot be expressed, since
    /// `other` is taken by value.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::from([0, 1]);
    /// deque.splice(Deque::from([2, 3]));
    /// assert_eq!(deque.to_string(), "0 1 2 3");
    /// ```
    pub fn splice(&mut self, mut other: Self) {
        self.append(&mut other);
    }

    /// Appends a copy of every element of `other`, in order, after the tail of
    /// the deque. `other` is left unchanged.
    ///
    /// The copies are made before anything is linked, so a panicking `clone`
    /// leaves the deque untouched.
    ///
    /// To concatenate a deque with itself, use [`Deque::concat_self`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the
    /// length of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::from([0, 1]);
    /// let other = Deque::from([2, 3]);
    /// deque.concat(&other);
    /// assert_eq!(deque.to_string(), "0 1 2 3");
    /// assert_eq!(other.to_string(), "2 3");
    /// ```
    pub fn concat(&mut self, other: &Self)
    where
        T: Clone,
    {
        _trace!("copy-concatenating a deque");
        let mut copied = other.clone();
        self.append(&mut copied);
    }

    /// Appends a copy of the deque to itself.
    ///
    /// The current elements are first snapshotted into a temporary deque, which
    /// is then spliced onto the back, so the chain being extended is never the
    /// one being read.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut deque = Deque::from(['x', 'y']);
    /// deque.concat_self();
    /// assert_eq!(deque, Deque::from(['x', 'y', 'x', 'y']));
    /// ```
    pub fn concat_self(&mut self)
    where
        T: Clone,
    {
        _trace!("copy-concatenating a deque with itself");
        let mut snapshot = self.clone();
        self.append(&mut snapshot);
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements from head to tail, separated by a single space.
///
/// # Examples
///
/// ```
/// use linked_deque::Deque;
///
/// assert_eq!(Deque::from([0, 1, 2, 3, 4]).to_string(), "0 1 2 3 4");
/// assert_eq!(Deque::<i32>::new().to_string(), "");
/// ```
impl<T: Display> Display for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            Display::fmt(first, f)?;
            for element in iter {
                f.write_str(" ")?;
                Display::fmt(element, f)?;
            }
        }
        Ok(())
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Allocate a detached node with given element.
    ///
    /// The node is allocated with the layout of `Node<T>` by the global
    /// allocator, so it can be reclaimed with `Box::from_raw`.
    pub(crate) fn try_new_detached(element: T) -> Result<NonNull<Node<T>>> {
        let layout = Layout::new::<Node<T>>();
        // SAFETY: `Node<T>` always holds two links, so `layout` is not zero-sized.
        let ptr = unsafe { alloc::alloc(layout) }.cast::<Node<T>>();
        let Some(node) = NonNull::new(ptr) else {
            _debug!(size = layout.size(), "failed to allocate a deque node");
            return Err(DequeError::AllocationFailure);
        };
        // SAFETY: `node` is valid for writes of a `Node<T>` and not yet initialized.
        unsafe {
            node.as_ptr().write(Node {
                next: None,
                prev: None,
                element,
            });
        }
        Ok(node)
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for Deque<T> {}

unsafe impl<T: Sync> Sync for Deque<T> {}

// Ensure that `Deque` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: Deque<&'static str>) -> Deque<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
    fn d<'i, 'a>(x: Cursor<'i, &'static str>) -> Cursor<'i, &'a str> {
        x
    }
}

#[cfg(test)]
impl<T> Deque<T> {
    /// Walk the chain from both ends and check every link invariant.
    pub(crate) fn assert_links(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none());
        let mut count = 0_usize;
        let mut prev: Link<T> = None;
        let mut current = self.head;
        while let Some(node) = current {
            let node_ref = unsafe { node.as_ref() };
            assert_eq!(node_ref.prev, prev, "broken `prev` link at {}", count);
            prev = current;
            current = node_ref.next;
            count += 1;
        }
        assert_eq!(prev, self.tail, "`tail` is not the last node");
        #[cfg(feature = "length")]
        assert_eq!(count, self.len);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Deque, DequeError};
    use std::cell::RefCell;

    #[derive(Debug)]
    struct DropChecker<'a, T: Copy> {
        value: T,
        dropped: &'a RefCell<Vec<T>>,
    }

    impl<'a, T: Copy> DropChecker<'a, T> {
        fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }
    }

    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    #[test]
    fn deque_create() {
        let deque = Deque::<i32>::new();
        assert!(deque.is_empty());
        assert_eq!(deque.len(), 0);
        assert_eq!(deque.peek_front(), Err(DequeError::EmptyDeque));
        assert_eq!(deque.peek_back(), Err(DequeError::EmptyDeque));
        deque.assert_links();
    }

    #[test]
    fn deque_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut deque = Deque::new();
        deque.push_back(DropChecker::new(1, &dropped));
        deque.push_back(DropChecker::new(2, &dropped));
        deque.push_back(DropChecker::new(3, &dropped));
        drop(deque);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn deque_delete_drops_once() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut deque = Deque::new();
        for value in 0..4 {
            deque.push_back(DropChecker::new(value, &dropped));
        }
        deque.delete_front();
        deque.delete_back();
        assert_eq!(dropped.borrow().as_slice(), &[0, 3]);
        deque.clear();
        assert_eq!(dropped.borrow().as_slice(), &[0, 3, 1, 2]);
        deque.delete_front();
        deque.delete_back();
        drop(deque);
        assert_eq!(dropped.borrow().len(), 4);
    }

    #[test]
    fn deque_push_and_peek() {
        let mut deque = Deque::new();
        deque.push_back(1);
        deque.push_back(2);
        deque.push_back(3);
        deque.assert_links();
        assert_eq!(Vec::from_iter(deque.iter().copied()), vec![1, 2, 3]);
        assert_eq!(Vec::from_iter(deque.iter().rev().copied()), vec![3, 2, 1]);

        deque.push_front(0);
        for _ in 0..3 {
            assert_eq!(deque.peek_front(), Ok(&0));
        }
        assert_eq!(deque.peek_back(), Ok(&3));
        assert_eq!(deque.len(), 4);
        deque.assert_links();
    }

    #[test]
    fn deque_peek_mut() {
        let mut deque = Deque::from([1, 2, 3]);
        *deque.peek_front_mut().unwrap() = 10;
        *deque.peek_back_mut().unwrap() = 30;
        assert_eq!(deque, Deque::from([10, 2, 30]));

        let mut empty = Deque::<i32>::new();
        assert_eq!(empty.peek_front_mut(), Err(DequeError::EmptyDeque));
        assert_eq!(empty.peek_back_mut(), Err(DequeError::EmptyDeque));
    }

    #[test]
    fn deque_delete() {
        let mut deque = Deque::from([0, 1, 2, 3]);
        deque.delete_front();
        deque.assert_links();
        assert_eq!(deque.peek_front(), Ok(&1));
        deque.delete_back();
        deque.assert_links();
        assert_eq!(deque.peek_back(), Ok(&2));
        deque.delete_back();
        deque.delete_back();
        deque.assert_links();
        assert!(deque.is_empty());

        deque.delete_front();
        deque.delete_back();
        assert!(deque.is_empty());
        deque.assert_links();

        deque.push_front(7);
        assert_eq!(deque.peek_back(), Ok(&7));
        deque.assert_links();
    }

    #[test]
    fn deque_clear() {
        for len in 0..5 {
            let mut deque = Deque::from_iter(0..len);
            deque.clear();
            assert!(deque.is_empty());
            assert_eq!(deque.len(), 0);
            deque.assert_links();

            deque.push_back(42);
            assert_eq!(deque.len(), 1);
            assert_eq!(deque.peek_front(), Ok(&42));
            assert_eq!(deque.peek_back(), Ok(&42));
            deque.assert_links();
        }
    }

    #[test]
    fn deque_try_push() {
        let mut deque = Deque::new();
        assert_eq!(deque.try_push_back(2), Ok(()));
        assert_eq!(deque.try_push_front(1), Ok(()));
        assert_eq!(deque.to_string(), "1 2");
        deque.assert_links();
    }

    #[test]
    fn deque_move() {
        let mut source = Deque::from([0, 1, 2]);
        let moved = std::mem::take(&mut source);
        assert!(source.is_empty());
        assert_eq!(source.peek_front(), Err(DequeError::EmptyDeque));
        assert_eq!(moved.to_string(), "0 1 2");
        source.assert_links();
        moved.assert_links();

        source.push_back(5);
        assert_eq!(moved.to_string(), "0 1 2");
        assert_eq!(source.to_string(), "5");
    }

    #[test]
    fn deque_append_and_prepend() {
        fn check<I1, I2, I3>(deque: I1, other: I2, expected: I3)
        where
            I1: IntoIterator<Item = i32>,
            I2: IntoIterator<Item = i32>,
            I3: IntoIterator<Item = i32>,
        {
            let deque = Deque::from_iter(deque);
            let other = Deque::from_iter(other);
            let expected = Deque::from_iter(expected);

            let mut appended = deque.clone();
            let mut other_cloned = other.clone();
            appended.append(&mut other_cloned);
            assert!(other_cloned.is_empty());
            other_cloned.assert_links();
            appended.assert_links();
            assert_eq!(appended, expected);
            assert_eq!(appended.len(), deque.len() + other.len());

            let mut prepended = other.clone();
            let mut deque_cloned = deque.clone();
            prepended.prepend(&mut deque_cloned);
            assert!(deque_cloned.is_empty());
            prepended.assert_links();
            assert_eq!(prepended, expected);
        }
        check(0..5, 5..7, 0..7);
        check(0..5, None, 0..5);
        check(0..1, 1..2, 0..2);
        check(None, 0..2, 0..2);
        check(None, None, None);
    }

    #[test]
    fn deque_splice() {
        let mut deque = Deque::from(['a', 'b']);
        let other = Deque::from(['c', 'd']);
        deque.splice(other);
        deque.assert_links();
        assert_eq!(deque.to_string(), "a b c d");
        assert_eq!(deque.peek_back(), Ok(&'d'));

        let mut empty = Deque::new();
        empty.splice(deque);
        empty.assert_links();
        assert_eq!(empty.to_string(), "a b c d");
        empty.splice(Deque::new());
        assert_eq!(empty.len(), 4);
    }

    #[test]
    fn deque_splice_moves_nodes() {
        let mut deque = Deque::from([0]);
        let other = Deque::from([1, 2]);
        let moved = other.peek_front().unwrap() as *const i32;
        deque.splice(other);
        let mut iter = deque.iter();
        iter.next();
        assert_eq!(iter.next().unwrap() as *const i32, moved);
    }

    #[test]
    fn deque_concat() {
        let mut deque = Deque::from([0, 1]);
        let other = Deque::from([2, 3]);
        deque.concat(&other);
        deque.assert_links();
        other.assert_links();
        assert_eq!(deque.to_string(), "0 1 2 3");
        assert_eq!(other.to_string(), "2 3");

        deque.concat(&Deque::new());
        assert_eq!(deque.len(), 4);

        let mut empty = Deque::new();
        empty.concat(&other);
        assert_eq!(empty, other);
    }

    #[test]
    fn deque_concat_self() {
        let mut deque = Deque::from(['x', 'y']);
        deque.concat_self();
        deque.assert_links();
        assert_eq!(deque, Deque::from(['x', 'y', 'x', 'y']));

        let mut empty = Deque::<char>::new();
        empty.concat_self();
        assert!(empty.is_empty());
        empty.assert_links();
    }

    #[test]
    fn deque_display() {
        assert_eq!(Deque::from([0, 1, 2, 3, 4]).to_string(), "0 1 2 3 4");
        assert_eq!(Deque::from(["single"]).to_string(), "single");
        assert_eq!(Deque::<u8>::new().to_string(), "");
        assert_eq!(format!("{:?}", Deque::from([1, 2])), "[1, 2]");
    }
}
