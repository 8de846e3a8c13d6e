use super::error::{FsError, FsResult};
use super::limits::STAGING_DIR;
use super::namespace::Namespace;
use super::node::{NodeId, NodeKind, Payload};

/// Successful result of [`Namespace::install`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// A copy now lives at `/apps/<name>`.
    Installed(NodeId),
    /// `/apps` already had a file of that name; nothing changed.
    AlreadyInstalled,
}

impl Namespace {
    /// Stage a file from the cursor directory into `/apps`, creating the
    /// staging directory on first use. Installing the same name twice is a
    /// no-op.
    pub fn install(&mut self, filename: &str) -> FsResult<InstallOutcome> {
        let dir = self.cursor_dir()?;
        let (_, source) = self
            .lookup_kind(dir, filename, NodeKind::File)
            .ok_or(FsError::NotFound)?;
        let apps = self.staging_dir()?;

        if let Some((_, existing)) = self.lookup(apps, filename) {
            return match self.node(existing).kind() {
                NodeKind::File => Ok(InstallOutcome::AlreadyInstalled),
                NodeKind::Directory => Err(FsError::AlreadyExists),
            };
        }

        let content = self.content_of(source)?.clone();
        let id = self.create(apps, filename, Payload::File(content))?;
        crate::log_info!("installed {} into /{}", self.node(id).name(), STAGING_DIR);
        Ok(InstallOutcome::Installed(id))
    }

    /// Find `/apps`, or make it through `mkdir` with the cursor parked at the
    /// root for the duration.
    fn staging_dir(&mut self) -> FsResult<NodeId> {
        if let Some((_, apps)) = self.lookup_kind(NodeId::ROOT, STAGING_DIR, NodeKind::Directory) {
            return Ok(apps);
        }
        let saved = self.cursor;
        self.cursor = NodeId::ROOT;
        let created = self.mkdir(STAGING_DIR);
        self.cursor = saved;
        created.map_err(|e| {
            crate::log_error!("cannot create /{}: {}", STAGING_DIR, e);
            FsError::InstallFailed
        })
    }
}
