use super::arena::Arena;
use super::bounded::{Content, Name};
use super::error::{FsError, FsResult};
use super::node::{Children, Node, NodeId, NodeKind, Payload};

/// The rooted namespace tree plus the cursor ("current directory").
///
/// Every parent/child edge goes through [`Namespace::link`] and
/// [`Namespace::unlink`], which update both ends together.
pub struct Namespace {
    pub(super) arena: Arena,
    pub(super) cursor: NodeId,
}

impl Namespace {
    /// An empty tree: just the root directory `/`, with the cursor on it.
    pub const fn new() -> Self {
        Namespace {
            arena: Arena::new(),
            cursor: NodeId::ROOT,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Child list of `dir`, or `NotADirectory`.
    pub fn children(&self, dir: NodeId) -> FsResult<&Children> {
        self.node(dir).children().ok_or(FsError::NotADirectory)
    }

    /// The cursor, checked to still be a directory.
    pub(super) fn cursor_dir(&self) -> FsResult<NodeId> {
        self.children(self.cursor)?;
        Ok(self.cursor)
    }

    /// Position and id of the child of `dir` called `name`, of either kind.
    pub fn lookup(&self, dir: NodeId, name: &str) -> Option<(usize, NodeId)> {
        let name = Name::truncated(name);
        let children = self.children(dir).ok()?;
        children
            .as_slice()
            .iter()
            .enumerate()
            .find(|(_, &id)| self.node(id).name == name)
            .map(|(pos, &id)| (pos, id))
    }

    /// Like [`Namespace::lookup`], but the kind has to match too.
    pub fn lookup_kind(&self, dir: NodeId, name: &str, kind: NodeKind) -> Option<(usize, NodeId)> {
        let name = Name::truncated(name);
        let children = self.children(dir).ok()?;
        children
            .as_slice()
            .iter()
            .enumerate()
            .find(|(_, &id)| {
                let node = self.node(id);
                node.kind() == kind && node.name == name
            })
            .map(|(pos, &id)| (pos, id))
    }

    /// Content of a file node, `NotFound` for directories.
    pub(super) fn content_of(&self, id: NodeId) -> FsResult<&Content> {
        self.node(id).content().ok_or(FsError::NotFound)
    }

    pub(super) fn content_mut(&mut self, id: NodeId) -> FsResult<&mut Content> {
        match &mut self.arena.get_mut(id).payload {
            Payload::File(content) => Ok(content),
            Payload::Directory(_) => Err(FsError::NotFound),
        }
    }

    /// Attach `child` to the end of `parent`'s child list.
    pub(super) fn link(&mut self, parent: NodeId, child: NodeId) -> FsResult<()> {
        match &mut self.arena.get_mut(parent).payload {
            Payload::Directory(children) => children.push(child)?,
            Payload::File(_) => return Err(FsError::NotADirectory),
        }
        self.arena.get_mut(child).parent = Some(parent);
        Ok(())
    }

    /// Detach the child at `pos` of `parent`. Its slot stays allocated.
    pub(super) fn unlink(&mut self, parent: NodeId, pos: usize) -> FsResult<NodeId> {
        let child = match &mut self.arena.get_mut(parent).payload {
            Payload::Directory(children) if pos < children.len() => children.remove(pos),
            Payload::Directory(_) => return Err(FsError::NotFound),
            Payload::File(_) => return Err(FsError::NotADirectory),
        };
        self.arena.get_mut(child).parent = None;
        Ok(child)
    }

    /// Allocate a node called `name` under `parent`.
    ///
    /// Uniqueness and capacity are checked before a slot is taken, so a
    /// failed create never leaks one.
    pub(super) fn create(&mut self, parent: NodeId, name: &str, payload: Payload) -> FsResult<NodeId> {
        self.attach(parent, name, payload, Arena::allocate)
    }

    /// Like [`Namespace::create`], but the node takes a reserved boot slot
    /// and leaves the pool alone.
    pub(super) fn preload(&mut self, parent: NodeId, name: &str, payload: Payload) -> FsResult<NodeId> {
        self.attach(parent, name, payload, Arena::reserve)
    }

    fn attach(
        &mut self,
        parent: NodeId,
        name: &str,
        payload: Payload,
        take_slot: fn(&mut Arena) -> FsResult<NodeId>,
    ) -> FsResult<NodeId> {
        let children = self.children(parent)?;
        if self.lookup(parent, name).is_some() {
            return Err(FsError::AlreadyExists);
        }
        if children.is_full() {
            return Err(FsError::DirectoryFull);
        }
        let id = take_slot(&mut self.arena)?;
        let node = self.arena.get_mut(id);
        node.name = Name::truncated(name);
        node.payload = payload;
        self.link(parent, id)?;
        Ok(id)
    }

    /// Point the cursor at `dir`.
    pub(super) fn set_cursor(&mut self, dir: NodeId) -> FsResult<()> {
        self.children(dir)?;
        self.cursor = dir;
        Ok(())
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}
