use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Generation-checked arena for bodies.
///
/// Alongside the slots it keeps the live handles in insertion order, which is
/// the order bodies are integrated and swept in and the index space exposed
/// by [`Scene::get_body`](crate::core::Scene::get_body). Removing a body
/// compacts that order, so indices shift while handles do not.
#[derive(Debug, Clone)]
pub struct BodyStorage<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    order: Vec<BodyHandle>,
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BodyStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty storage with room for `capacity` bodies
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Adds an item to the storage and returns its handle
    pub(crate) fn add(&mut self, item: T) -> BodyHandle {
        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.value = Some(item);
                BodyHandle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(item),
                });
                BodyHandle {
                    index,
                    generation: 0,
                }
            }
        };

        self.order.push(handle);
        handle
    }

    /// Gets a reference to an item by its handle
    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    /// Gets a mutable reference to an item by its handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Returns true if the handle refers to a live item
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {} not found", handle)))
    }

    /// Borrows two distinct bodies mutably at once
    pub fn get_pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Result<(&mut T, &mut T)> {
        if a.index == b.index {
            return Err(PhysicsError::InvalidParameter(format!(
                "cannot borrow {} and {} as a pair: same slot",
                a, b
            )));
        }
        if !self.contains(a) {
            return Err(PhysicsError::ResourceNotFound(format!("Body with handle {} not found", a)));
        }
        if !self.contains(b) {
            return Err(PhysicsError::ResourceNotFound(format!("Body with handle {} not found", b)));
        }

        let (ia, ib) = (a.index as usize, b.index as usize);
        let (slot_a, slot_b) = if ia < ib {
            let (left, right) = self.slots.split_at_mut(ib);
            (&mut left[ia], &mut right[0])
        } else {
            let (left, right) = self.slots.split_at_mut(ia);
            (&mut right[0], &mut left[ib])
        };

        match (slot_a.value.as_mut(), slot_b.value.as_mut()) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(PhysicsError::ResourceNotFound(format!(
                "Body pair {} / {} not found",
                a, b
            ))),
        }
    }

    /// Removes an item from the storage, invalidating its handle
    pub(crate) fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)?;
        let value = slot.value.take()?;

        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.order.retain(|&h| h != handle);

        Some(value)
    }

    /// Returns the number of items in the storage
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Clears all items from the storage. Outstanding handles become stale.
    pub(crate) fn clear(&mut self) {
        for handle in std::mem::take(&mut self.order) {
            self.remove(handle);
        }
    }

    /// Returns the live handles in insertion order
    pub fn handles(&self) -> &[BodyHandle] {
        &self.order
    }

    /// Returns the handle at `index` in insertion order
    pub fn handle_at(&self, index: usize) -> Result<BodyHandle> {
        self.order.get(index).copied().ok_or(PhysicsError::IndexOutOfRange {
            index,
            len: self.order.len(),
        })
    }

    /// Returns the current index of a handle in insertion order
    pub fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.order.iter().position(|&h| h == handle)
    }

    /// Returns an iterator over all items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.order
            .iter()
            .filter_map(move |&handle| self.get(handle).map(|item| (handle, item)))
    }
}
