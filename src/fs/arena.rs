use super::error::{FsError, FsResult};
use super::limits::{POOL_CAPACITY, RESERVED_SLOTS, SLOT_COUNT};
use super::node::{Node, NodeId};

/// Allocate-only node pool.
///
/// The first [`RESERVED_SLOTS`] slots hold the root and the boot files and
/// are handed out by [`Arena::reserve`]. The remaining [`POOL_CAPACITY`]
/// slots are handed out in order by [`Arena::allocate`] and never come back,
/// even after the node is unlinked.
pub struct Arena {
    slots: [Node; SLOT_COUNT],
    reserved: usize,
    allocated: usize,
}

impl Arena {
    /// An arena holding only the root directory.
    pub const fn new() -> Self {
        let mut slots = [Node::VACANT; SLOT_COUNT];
        slots[0] = Node::ROOT_DIR;
        Arena {
            slots,
            reserved: 1,
            allocated: 0,
        }
    }

    /// Hand out the next zeroed pool slot.
    pub fn allocate(&mut self) -> FsResult<NodeId> {
        if self.allocated == POOL_CAPACITY {
            return Err(FsError::PoolExhausted);
        }
        let id = NodeId(RESERVED_SLOTS + self.allocated);
        self.allocated += 1;
        self.slots[id.0] = Node { id, ..Node::VACANT };
        if self.allocated == POOL_CAPACITY {
            crate::log_warn!("node pool exhausted after {} allocations", POOL_CAPACITY);
        }
        Ok(id)
    }

    /// Hand out the next reserved slot. Only boot-time seeding uses these.
    pub fn reserve(&mut self) -> FsResult<NodeId> {
        if self.reserved == RESERVED_SLOTS {
            return Err(FsError::PoolExhausted);
        }
        let id = NodeId(self.reserved);
        self.reserved += 1;
        self.slots[id.0] = Node { id, ..Node::VACANT };
        Ok(id)
    }

    /// Pool slots handed out so far. Reserved slots don't count.
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    pub fn remaining(&self) -> usize {
        POOL_CAPACITY - self.allocated
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.slots[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.0]
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
