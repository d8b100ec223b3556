//! Doubly linked sequence with O(1) removal by handle.
//!
//! Nodes live in an [`Arena`]; links between them are arena handles, so the
//! sequence needs no unsafe pointers and no reference counting. A
//! [`NodeHandle`] keeps addressing the same node until that node is removed.

use crate::arena::{Arena, Handle};

use self::error::Error;

pub mod error;

/// Opaque position of an item inside a [`DList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(Handle);

#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    prev: Option<NodeHandle>,
    next: Option<NodeHandle>,
}

/// Ordered sequence supporting O(1) insertion at both ends and O(1) removal
/// given a [`NodeHandle`].
#[derive(Debug, Clone)]
pub struct DList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
}

impl<T> Default for DList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DList<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub const fn front(&self) -> Option<NodeHandle> {
        self.head
    }

    #[must_use]
    pub const fn back(&self) -> Option<NodeHandle> {
        self.tail
    }

    fn node(&self, handle: NodeHandle) -> Result<&Node<T>, Error> {
        self.nodes.get(handle.0).ok_or(Error::InvalidHandle(handle))
    }

    fn node_mut(&mut self, handle: NodeHandle) -> Result<&mut Node<T>, Error> {
        self.nodes
            .get_mut(handle.0)
            .ok_or(Error::InvalidHandle(handle))
    }

    /// Appends `item` and returns the handle of its node.
    pub fn push_back(&mut self, item: T) -> NodeHandle {
        let handle = NodeHandle(self.nodes.insert(Node {
            item,
            prev: self.tail,
            next: None,
        }));
        match self.tail.and_then(|tail| self.nodes.get_mut(tail.0)) {
            Some(tail) => tail.next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        handle
    }

    /// Prepends `item` and returns the handle of its node.
    pub fn push_front(&mut self, item: T) -> NodeHandle {
        let handle = NodeHandle(self.nodes.insert(Node {
            item,
            prev: None,
            next: self.head,
        }));
        match self.head.and_then(|head| self.nodes.get_mut(head.0)) {
            Some(head) => head.prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        handle
    }

    /// Returns the item stored at `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHandle`] if the node was removed.
    pub fn get(&self, handle: NodeHandle) -> Result<&T, Error> {
        self.node(handle).map(|node| &node.item)
    }

    /// Returns the item stored at `handle` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHandle`] if the node was removed.
    pub fn get_mut(&mut self, handle: NodeHandle) -> Result<&mut T, Error> {
        self.node_mut(handle).map(|node| &mut node.item)
    }

    /// Returns the node after `handle`, or `None` at the back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHandle`] if the node was removed.
    pub fn next(&self, handle: NodeHandle) -> Result<Option<NodeHandle>, Error> {
        self.node(handle).map(|node| node.next)
    }

    /// Returns the node before `handle`, or `None` at the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHandle`] if the node was removed.
    pub fn prev(&self, handle: NodeHandle) -> Result<Option<NodeHandle>, Error> {
        self.node(handle).map(|node| node.prev)
    }

    /// Unlinks the node at `handle` and returns its item. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHandle`] if the node was already removed.
    pub fn remove(&mut self, handle: NodeHandle) -> Result<T, Error> {
        let node = self
            .nodes
            .remove(handle.0)
            .ok_or(Error::InvalidHandle(handle))?;

        match node.prev {
            Some(prev) => self.node_mut(prev)?.next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next)?.prev = node.prev,
            None => self.tail = node.prev,
        }

        Ok(node.item)
    }

    /// Removes every item. All outstanding handles become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates over the items from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }
}

/// Front-to-back iterator returned by [`DList::iter`].
pub struct Iter<'a, T> {
    list: &'a DList<T>,
    cursor: Option<NodeHandle>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.cursor?.0)?;
        self.cursor = node.next;
        Some(&node.item)
    }
}

impl<'a, T> IntoIterator for &'a DList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
