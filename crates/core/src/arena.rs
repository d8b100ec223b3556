use alloc::vec::Vec;

/// Stable reference to a value stored in an [`Arena`].
///
/// A handle stays valid until its value is removed. Slots are reused, but
/// every reuse bumps the slot generation, so an old handle never resolves to
/// a newer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: usize,
    generation: u32,
}

impl Handle {
    /// Position of the slot inside the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32 },
}

/// Generational slot storage.
///
/// Owns values that other structures refer to by [`Handle`]: sequence nodes
/// in [`DList`](crate::list::DList) and edge records in
/// [`WUGraph`](crate::graph::WUGraph).
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `value` and returns its handle. Reuses a vacant slot if any.
    pub fn insert(&mut self, value: T) -> Handle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let generation = match self.slots[index] {
                Slot::Vacant { generation } | Slot::Occupied { generation, .. } => generation,
            };
            self.slots[index] = Slot::Occupied { generation, value };
            Handle { index, generation }
        } else {
            let index = self.slots.len();
            self.slots.push(Slot::Occupied {
                generation: 0,
                value,
            });
            Handle {
                index,
                generation: 0,
            }
        }
    }

    /// Returns `true` if `handle` refers to a live value.
    #[must_use]
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.index)? {
            Slot::Occupied { generation, value } if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.index)? {
            Slot::Occupied { generation, value } if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Removes and returns the value behind `handle`.
    ///
    /// Returns `None` if the handle is stale. The slot's generation is
    /// advanced, invalidating every copy of `handle` at once.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index)?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == handle.generation => {
                let next = Slot::Vacant {
                    generation: generation.wrapping_add(1),
                };
                match core::mem::replace(slot, next) {
                    Slot::Occupied { value, .. } => {
                        self.free.push(handle.index);
                        self.len -= 1;
                        Some(value)
                    }
                    Slot::Vacant { .. } => None,
                }
            }
            _ => None,
        }
    }

    /// Drops every value. Outstanding handles become stale.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Slot::Occupied { generation, .. } = *slot {
                *slot = Slot::Vacant {
                    generation: generation.wrapping_add(1),
                };
                self.free.push(index);
            }
        }
        self.len = 0;
    }

    /// Iterates over live values with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied { generation, value } => Some((
                    Handle {
                        index,
                        generation: *generation,
                    },
                    value,
                )),
                Slot::Vacant { .. } => None,
            })
    }
}
