use super::bounded::{Content, Name};
use super::error::{FsError, FsResult};
use super::limits::EDIT_SENTINEL;
use super::namespace::Namespace;
use super::node::{Children, NodeId, NodeKind, Payload};
use crate::console::LineInput;

/// Mutations scoped to the cursor directory.
impl Namespace {
    /// Create an empty file.
    pub fn touch(&mut self, name: &str) -> FsResult<NodeId> {
        let dir = self.cursor_dir()?;
        self.create(dir, name, Payload::File(Content::EMPTY))
    }

    /// Create an empty directory.
    pub fn mkdir(&mut self, name: &str) -> FsResult<NodeId> {
        let dir = self.cursor_dir()?;
        self.create(dir, name, Payload::Directory(Children::EMPTY))
    }

    /// Remove a file. A directory of the same name is not touched.
    pub fn rm(&mut self, name: &str) -> FsResult<NodeId> {
        let dir = self.cursor_dir()?;
        let (pos, _) = self.lookup_kind(dir, name, NodeKind::File).ok_or(FsError::NotFound)?;
        self.unlink(dir, pos)
    }

    /// Remove an empty directory.
    pub fn rmdir(&mut self, name: &str) -> FsResult<NodeId> {
        let dir = self.cursor_dir()?;
        let (pos, target) = self
            .lookup_kind(dir, name, NodeKind::Directory)
            .ok_or(FsError::NotFound)?;
        if !self.children(target)?.is_empty() {
            return Err(FsError::NotEmpty);
        }
        self.unlink(dir, pos)
    }

    /// Copy file `src` to a new file `dest` in the same directory.
    pub fn cp(&mut self, src: &str, dest: &str) -> FsResult<NodeId> {
        let dir = self.cursor_dir()?;
        let (_, source) = self.lookup_kind(dir, src, NodeKind::File).ok_or(FsError::NotFound)?;
        let content = self.content_of(source)?.clone();
        self.create(dir, dest, Payload::File(content))
    }

    /// Rename `src` (file or directory) to `dest` in place.
    pub fn mv(&mut self, src: &str, dest: &str) -> FsResult<NodeId> {
        let dir = self.cursor_dir()?;
        let (_, source) = self.lookup(dir, src).ok_or(FsError::NotFound)?;
        if self.lookup(dir, dest).is_some() {
            return Err(FsError::AlreadyExists);
        }
        self.arena.get_mut(source).name = Name::truncated(dest);
        Ok(source)
    }

    /// Rewrite a file from `input`, one line at a time, until the `.save`
    /// line or the end of input. Each line gets a trailing newline; anything
    /// past the content capacity is dropped. Returns the final length.
    pub fn edit(&mut self, name: &str, input: &mut dyn LineInput) -> FsResult<usize> {
        let dir = self.cursor_dir()?;
        let (_, target) = self.lookup_kind(dir, name, NodeKind::File).ok_or(FsError::NotFound)?;
        let content = self.content_mut(target)?;
        content.clear();
        while let Some(line) = input.read_line() {
            if line == EDIT_SENTINEL {
                break;
            }
            content.append(line.as_bytes());
            content.append(b"\n");
        }
        Ok(content.len())
    }

    /// Content of a file in the cursor directory.
    pub fn cat(&self, name: &str) -> FsResult<&[u8]> {
        let dir = self.cursor_dir()?;
        let (_, target) = self.lookup_kind(dir, name, NodeKind::File).ok_or(FsError::NotFound)?;
        Ok(self.content_of(target)?.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::Script;
    use crate::fs::limits::{CONTENT_CAPACITY, DIR_CAPACITY, POOL_CAPACITY};
    use std::format;
    use std::vec::Vec;

    fn names(ns: &Namespace) -> Vec<&str> {
        ns.list(ns.cursor()).unwrap().map(|n| n.name()).collect()
    }

    fn write(ns: &mut Namespace, name: &str, lines: &[&str]) {
        let mut script = Script::new(lines.iter().copied().chain([".save"]));
        ns.edit(name, &mut script).unwrap();
    }

    #[test]
    fn eleventh_create_is_rejected() {
        let mut ns = Namespace::new();
        for i in 0..DIR_CAPACITY {
            let name = format!("n{}", i);
            if i % 2 == 0 {
                ns.touch(&name).unwrap();
            } else {
                ns.mkdir(&name).unwrap();
            }
        }
        assert_eq!(ns.touch("one-more"), Err(FsError::DirectoryFull));
        assert_eq!(ns.mkdir("one-more"), Err(FsError::DirectoryFull));
        assert_eq!(ns.children(ns.cursor()).unwrap().len(), DIR_CAPACITY);
    }

    #[test]
    fn duplicate_names_are_rejected_across_kinds() {
        let mut ns = Namespace::new();
        ns.touch("a").unwrap();
        assert_eq!(ns.touch("a"), Err(FsError::AlreadyExists));
        assert_eq!(ns.mkdir("a"), Err(FsError::AlreadyExists));
        assert_eq!(ns.children(ns.cursor()).unwrap().len(), 1);
        ns.touch("A").unwrap();
        assert_eq!(names(&ns), ["a", "A"]);
    }

    #[test]
    fn rm_unlinks_once() {
        let mut ns = Namespace::new();
        ns.touch("a").unwrap();
        ns.touch("b").unwrap();
        ns.rm("a").unwrap();
        assert_eq!(names(&ns), ["b"]);
        assert_eq!(ns.rm("a"), Err(FsError::NotFound));
    }

    #[test]
    fn rm_never_removes_directories() {
        let mut ns = Namespace::new();
        ns.mkdir("d").unwrap();
        assert_eq!(ns.rm("d"), Err(FsError::NotFound));
        assert_eq!(names(&ns), ["d"]);
    }

    #[test]
    fn deleted_slots_are_not_reused() {
        let mut ns = Namespace::new();
        let first = ns.touch("a").unwrap();
        ns.rm("a").unwrap();
        let second = ns.touch("a").unwrap();
        assert_ne!(first, second);
        assert_eq!(ns.arena().allocated(), 2);
    }

    #[test]
    fn rmdir_requires_an_empty_directory() {
        let mut ns = Namespace::new();
        ns.touch("f").unwrap();
        ns.mkdir("d").unwrap();
        ns.mkdir("e").unwrap();
        ns.change_directory("d").unwrap();
        ns.touch("inner").unwrap();
        ns.change_directory("..").unwrap();

        assert_eq!(ns.rmdir("d"), Err(FsError::NotEmpty));
        assert_eq!(ns.rmdir("f"), Err(FsError::NotFound));
        assert_eq!(ns.rmdir("missing"), Err(FsError::NotFound));
        ns.rmdir("e").unwrap();
        assert_eq!(names(&ns), ["f", "d"]);
    }

    #[test]
    fn copies_are_independent() {
        let mut ns = Namespace::new();
        ns.touch("a").unwrap();
        write(&mut ns, "a", &["first"]);
        let before = Vec::from(ns.cat("a").unwrap());

        ns.cp("a", "b").unwrap();
        assert_eq!(ns.cat("b").unwrap(), &before[..]);

        write(&mut ns, "a", &["second"]);
        assert_eq!(ns.cat("a").unwrap(), b"second\n");
        assert_eq!(ns.cat("b").unwrap(), b"first\n");
    }

    #[test]
    fn cp_checks_source_and_destination() {
        let mut ns = Namespace::new();
        ns.touch("a").unwrap();
        ns.mkdir("d").unwrap();
        assert_eq!(ns.cp("missing", "x"), Err(FsError::NotFound));
        assert_eq!(ns.cp("d", "x"), Err(FsError::NotFound));
        assert_eq!(ns.cp("a", "d"), Err(FsError::AlreadyExists));
        assert_eq!(ns.cp("a", "a"), Err(FsError::AlreadyExists));
    }

    #[test]
    fn mv_renames_in_place() {
        let mut ns = Namespace::new();
        ns.touch("x").unwrap();
        ns.touch("a").unwrap();
        ns.touch("z").unwrap();
        write(&mut ns, "a", &["payload"]);
        let before = Vec::from(ns.cat("a").unwrap());

        ns.mv("a", "b").unwrap();
        assert_eq!(ns.cat("b").unwrap(), &before[..]);
        assert_eq!(names(&ns), ["x", "b", "z"]);
        assert_eq!(ns.cat("a"), Err(FsError::NotFound));
    }

    #[test]
    fn mv_handles_directories_and_conflicts() {
        let mut ns = Namespace::new();
        ns.mkdir("d").unwrap();
        ns.touch("f").unwrap();
        assert_eq!(ns.mv("d", "f"), Err(FsError::AlreadyExists));
        assert_eq!(ns.mv("nope", "g"), Err(FsError::NotFound));
        ns.mv("d", "e").unwrap();
        assert!(ns.change_directory("e").is_ok());
    }

    #[test]
    fn edit_replaces_content_line_by_line() {
        let mut ns = Namespace::new();
        ns.touch("notes").unwrap();
        write(&mut ns, "notes", &["old"]);
        let mut script = Script::new(["one", "two", ".save", "ignored"]);
        assert_eq!(ns.edit("notes", &mut script), Ok(8));
        assert_eq!(ns.cat("notes").unwrap(), b"one\ntwo\n");
        assert_eq!(script.remaining(), 1);
    }

    #[test]
    fn edit_stops_at_end_of_input() {
        let mut ns = Namespace::new();
        ns.touch("notes").unwrap();
        let mut script = Script::new(["only"]);
        ns.edit("notes", &mut script).unwrap();
        assert_eq!(ns.cat("notes").unwrap(), b"only\n");
    }

    #[test]
    fn edit_truncates_silently_at_capacity() {
        let mut ns = Namespace::new();
        ns.touch("big").unwrap();
        let line = "x".repeat(100);
        let lines: Vec<&str> = (0..20).map(|_| line.as_str()).collect();
        write(&mut ns, "big", &lines);
        let content = ns.cat("big").unwrap();
        assert_eq!(content.len(), CONTENT_CAPACITY);

        ns.cp("big", "copy").unwrap();
        assert_eq!(ns.cat("copy").unwrap().len(), CONTENT_CAPACITY);
    }

    #[test]
    fn edit_and_cat_need_a_file() {
        let mut ns = Namespace::new();
        ns.mkdir("d").unwrap();
        let mut script = Script::new(["x"]);
        assert_eq!(ns.edit("d", &mut script), Err(FsError::NotFound));
        assert_eq!(ns.edit("missing", &mut script), Err(FsError::NotFound));
        assert_eq!(script.remaining(), 1);
        assert_eq!(ns.cat("d"), Err(FsError::NotFound));
    }

    #[test]
    fn pool_exhaustion_outlives_deletes() {
        let mut ns = Namespace::new();
        let mut made = 0;
        'fill: for d in 0.. {
            ns.set_cursor(NodeId::ROOT).unwrap();
            let dir = format!("d{}", d);
            if ns.mkdir(&dir).is_err() {
                break;
            }
            made += 1;
            ns.change_directory(&dir).unwrap();
            for f in 0..DIR_CAPACITY {
                match ns.touch(&format!("f{}", f)) {
                    Ok(_) => made += 1,
                    Err(FsError::PoolExhausted) => break 'fill,
                    Err(e) => panic!("unexpected {:?}", e),
                }
            }
        }
        assert_eq!(made, POOL_CAPACITY);

        ns.rm("f0").unwrap();
        assert_eq!(ns.touch("again"), Err(FsError::PoolExhausted));
        assert_eq!(ns.mkdir("again"), Err(FsError::PoolExhausted));
        assert_eq!(ns.cp("f1", "again"), Err(FsError::PoolExhausted));
    }
}
