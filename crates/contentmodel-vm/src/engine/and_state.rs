use std::fmt;

/// Which AND-group members have already occurred.
///
/// Slot `group.index + i` is set once member `i` of `group` is left. Slots
/// are only ever set below `clear_from`, so clearing a suffix touches just the
/// slots dirtied since the last clear.
#[derive(Clone, Debug)]
pub struct AndState {
    pub(super) slots: Vec<bool>,
    /// Every slot at or above this index is clear.
    clear_from: usize,
}

impl AndState {
    pub fn new(size: u32) -> Self {
        Self {
            slots: vec![false; size as usize],
            clear_from: 0,
        }
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_clear(&self, slot: u32) -> bool {
        !self.slots[self.ensure_slot(slot)]
    }

    pub fn set(&mut self, slot: u32) {
        let index = self.ensure_slot(slot);
        self.slots[index] = true;
        if index >= self.clear_from {
            self.clear_from = index + 1;
        }
    }

    /// Clear every slot at or above `slot`.
    pub fn clear_from(&mut self, slot: u32) {
        let start = slot as usize;
        while self.clear_from > start {
            self.clear_from -= 1;
            self.slots[self.clear_from] = false;
        }
    }
}

impl PartialEq for AndState {
    fn eq(&self, other: &Self) -> bool {
        if self.slots.len() != other.slots.len() {
            return false;
        }
        let dirty = self.clear_from.max(other.clear_from);
        self.slots[..dirty] == other.slots[..dirty]
    }
}

impl Eq for AndState {}

/// Slots as a `0`/`1` string, lowest slot first.
impl fmt::Display for AndState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &slot in &self.slots {
            f.write_str(if slot { "1" } else { "0" })?;
        }
        Ok(())
    }
}
