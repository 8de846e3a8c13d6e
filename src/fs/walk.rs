use core::fmt::Write;

use super::bounded::{Name, PathBuf};
use super::error::{FsError, FsResult};
use super::limits::SLOT_COUNT;
use super::namespace::Namespace;
use super::node::{Node, NodeId, NodeKind};

impl Namespace {
    /// Entries of `dir` in insertion order.
    pub fn list(&self, dir: NodeId) -> FsResult<impl Iterator<Item = &Node> + '_> {
        let children = self.children(dir)?;
        Ok(children.as_slice().iter().map(move |&id| self.node(id)))
    }

    /// Move the cursor. `..` goes up one level; anything else must name a
    /// child directory of the cursor.
    pub fn change_directory(&mut self, name: &str) -> FsResult<NodeId> {
        if name == ".." {
            let parent = self.node(self.cursor).parent().ok_or(FsError::AlreadyAtRoot)?;
            self.cursor = parent;
            return Ok(parent);
        }
        let dir = self.cursor_dir()?;
        let (_, target) = self
            .lookup_kind(dir, name, NodeKind::Directory)
            .ok_or(FsError::NotFound)?;
        self.cursor = target;
        Ok(target)
    }

    /// Names from the root down to `node`, joined with `/`. The root is
    /// itself called `/`, so `docs` renders as `//docs`.
    pub fn working_path(&self, node: NodeId) -> PathBuf {
        let mut chain = [NodeId::ROOT; SLOT_COUNT];
        let mut depth = 0;
        let mut current = Some(node);
        while let Some(id) = current {
            if depth == SLOT_COUNT {
                break;
            }
            chain[depth] = id;
            depth += 1;
            current = self.node(id).parent();
        }

        let mut path = PathBuf::new();
        for (i, &id) in chain[..depth].iter().rev().enumerate() {
            if i > 0 {
                path.push('/');
            }
            path.push_str(self.node(id).name());
        }
        path
    }

    /// Lazy pre-order walk of the subtree at `node`, starting at `depth`.
    pub fn tree(&self, node: NodeId, depth: usize) -> TreeWalk<'_> {
        TreeWalk::new(self, node, depth)
    }

    /// Lazy pre-order search of the subtree at `node` for entries called `target`.
    pub fn find(&self, node: NodeId, target: &str) -> Find<'_> {
        Find {
            walk: TreeWalk::new(self, node, 0),
            target: Name::truncated(target),
        }
    }
}

/// One step of a [`TreeWalk`].
#[derive(Debug, Clone, Copy)]
pub struct TreeEntry<'a> {
    pub node: &'a Node,
    pub depth: usize,
}

#[derive(Clone, Copy)]
struct Frame {
    dir: NodeId,
    next: usize,
}

/// Pre-order, depth-first iterator over a subtree.
///
/// The explicit stack only ever holds the strict ancestors of the entry last
/// yielded; a directory's own frame is pushed on the following step.
pub struct TreeWalk<'a> {
    ns: &'a Namespace,
    start: Option<NodeId>,
    pending: Option<NodeId>,
    stack: [Frame; SLOT_COUNT],
    len: usize,
    base: usize,
}

impl<'a> TreeWalk<'a> {
    fn new(ns: &'a Namespace, start: NodeId, base: usize) -> Self {
        TreeWalk {
            ns,
            start: Some(start),
            pending: None,
            stack: [Frame { dir: NodeId::ROOT, next: 0 }; SLOT_COUNT],
            len: 0,
            base,
        }
    }

    /// Directories between the walk's start and the last yielded entry,
    /// outermost first.
    fn ancestors(&self) -> impl Iterator<Item = &'a Node> + '_ {
        let ns = self.ns;
        self.stack[..self.len].iter().map(move |f| ns.node(f.dir))
    }

    fn emit(&mut self, id: NodeId, depth: usize) -> TreeEntry<'a> {
        let ns = self.ns;
        let node = ns.node(id);
        if node.is_dir() {
            self.pending = Some(id);
        }
        TreeEntry { node, depth }
    }
}

impl<'a> Iterator for TreeWalk<'a> {
    type Item = TreeEntry<'a>;

    fn next(&mut self) -> Option<TreeEntry<'a>> {
        let ns = self.ns;
        if let Some(dir) = self.pending.take() {
            if self.len < SLOT_COUNT {
                self.stack[self.len] = Frame { dir, next: 0 };
                self.len += 1;
            }
        }
        if let Some(start) = self.start.take() {
            return Some(self.emit(start, self.base));
        }
        while self.len > 0 {
            let top = self.stack[self.len - 1];
            let children = ns.children(top.dir).map(|c| c.as_slice()).unwrap_or(&[]);
            match children.get(top.next) {
                Some(&child) => {
                    self.stack[self.len - 1].next += 1;
                    let depth = self.base + self.len;
                    return Some(self.emit(child, depth));
                }
                None => self.len -= 1,
            }
        }
        None
    }
}

/// A [`Namespace::find`] hit.
#[derive(Debug, Clone, Copy)]
pub struct FindMatch<'a> {
    pub node: &'a Node,
    /// Path of the containing directory relative to the search start,
    /// ending in `/`, or empty.
    pub prefix: PathBuf,
}

impl FindMatch<'_> {
    /// Prefix followed by the matched name.
    pub fn path(&self) -> PathBuf {
        let mut path = self.prefix;
        let _ = write!(path, "{}", self.node.name());
        path
    }
}

/// Iterator returned by [`Namespace::find`].
pub struct Find<'a> {
    walk: TreeWalk<'a>,
    target: Name,
}

impl<'a> Iterator for Find<'a> {
    type Item = FindMatch<'a>;

    fn next(&mut self) -> Option<FindMatch<'a>> {
        loop {
            let entry = self.walk.next()?;
            if entry.node.name != self.target {
                continue;
            }
            let mut prefix = PathBuf::new();
            for dir in self.walk.ancestors() {
                // The root contributes nothing; every other directory adds `name/`.
                if dir.parent().is_some() {
                    let _ = write!(prefix, "{}/", dir.name());
                }
            }
            return Some(FindMatch { node: entry.node, prefix });
        }
    }
}
