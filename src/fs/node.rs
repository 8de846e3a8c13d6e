use super::bounded::{Content, Name};
use super::error::{FsError, FsResult};
use super::limits::DIR_CAPACITY;

/// Stable index of a node inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    /// The root always occupies the reserved first slot.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Kind of a namespace node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// Ordered child list of a directory, bounded by [`DIR_CAPACITY`].
#[derive(Debug, Clone)]
pub struct Children {
    slots: [NodeId; DIR_CAPACITY],
    len: usize,
}

impl Children {
    pub const EMPTY: Children = Children {
        slots: [NodeId::ROOT; DIR_CAPACITY],
        len: 0,
    };

    pub fn as_slice(&self) -> &[NodeId] {
        &self.slots[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == DIR_CAPACITY
    }

    pub(super) fn push(&mut self, id: NodeId) -> FsResult<()> {
        if self.is_full() {
            return Err(FsError::DirectoryFull);
        }
        self.slots[self.len] = id;
        self.len += 1;
        Ok(())
    }

    /// Remove the entry at `pos`, shifting the rest left to keep their order.
    pub(super) fn remove(&mut self, pos: usize) -> NodeId {
        let id = self.slots[pos];
        self.slots.copy_within(pos + 1..self.len, pos);
        self.len -= 1;
        id
    }
}

/// One payload per node kind.
#[derive(Debug, Clone)]
pub enum Payload {
    File(Content),
    Directory(Children),
}

/// A slot in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub(super) id: NodeId,
    pub(super) name: Name,
    pub(super) parent: Option<NodeId>,
    pub(super) payload: Payload,
}

impl Node {
    /// Zeroed slot: an unnamed, unparented, empty file.
    pub const VACANT: Node = Node {
        id: NodeId::ROOT,
        name: Name::new(),
        parent: None,
        payload: Payload::File(Content::EMPTY),
    };

    /// The root directory `/`, as it sits in its reserved slot.
    pub const ROOT_DIR: Node = Node {
        id: NodeId::ROOT,
        name: Name::literal("/"),
        parent: None,
        payload: Payload::Directory(Children::EMPTY),
    };

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> NodeKind {
        match self.payload {
            Payload::File(_) => NodeKind::File,
            Payload::Directory(_) => NodeKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == NodeKind::Directory
    }

    pub fn children(&self) -> Option<&Children> {
        match &self.payload {
            Payload::Directory(children) => Some(children),
            Payload::File(_) => None,
        }
    }

    pub fn content(&self) -> Option<&Content> {
        match &self.payload {
            Payload::File(content) => Some(content),
            Payload::Directory(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_reject_overflow() {
        let mut children = Children::EMPTY;
        for i in 0..DIR_CAPACITY {
            assert!(children.push(NodeId(i + 1)).is_ok());
        }
        assert_eq!(children.push(NodeId(99)), Err(FsError::DirectoryFull));
        assert_eq!(children.len(), DIR_CAPACITY);
    }

    #[test]
    fn remove_closes_gap_in_order() {
        let mut children = Children::EMPTY;
        for i in 1..=4 {
            children.push(NodeId(i)).unwrap();
        }
        assert_eq!(children.remove(1), NodeId(2));
        assert_eq!(children.as_slice(), &[NodeId(1), NodeId(3), NodeId(4)]);
        assert_eq!(children.remove(2), NodeId(4));
        assert_eq!(children.as_slice(), &[NodeId(1), NodeId(3)]);
    }

    #[test]
    fn vacant_slot_is_an_empty_file() {
        let node = Node::VACANT;
        assert_eq!(node.kind(), NodeKind::File);
        assert_eq!(node.name(), "");
        assert!(node.content().map_or(false, |c| c.is_empty()));
        assert!(node.children().is_none());
    }
}
