use super::bounded::Content;
use super::error::FsResult;
use super::namespace::Namespace;
use super::node::{NodeKind, Payload};

impl Namespace {
    /// Store `data` as the content of file `name` in the cursor directory,
    /// creating it if needed and overwriting it otherwise. Bytes past the
    /// content capacity are dropped. Returns the number of bytes kept.
    pub fn ingest(&mut self, name: &str, data: &[u8]) -> FsResult<usize> {
        let dir = self.cursor_dir()?;
        if let Some((_, existing)) = self.lookup_kind(dir, name, NodeKind::File) {
            return Ok(self.content_mut(existing)?.replace(data));
        }
        let content = Content::from_bytes(data);
        let kept = content.len();
        self.create(dir, name, Payload::File(content))?;
        Ok(kept)
    }
}
