pub mod limits;
pub mod bounded;
pub mod error;
pub mod node;
pub mod arena;
pub mod namespace;
pub mod walk;
pub mod ops;
pub mod install;
pub mod ingest;

use spin::Mutex;

use bounded::Content;
use node::{Children, Payload};

pub use error::{FsError, FsResult};
pub use install::InstallOutcome;
pub use namespace::Namespace;
pub use node::{Node, NodeId, NodeKind};

/// The namespace shared by everything in the kernel, built at compile time
/// in its static. Hold the lock for the whole of an operation so check,
/// allocate and link stay together.
pub static NAMESPACE: Mutex<Namespace> = Mutex::new(Namespace::new());

const README: &[u8] = b"This is the readme file for zOS.\n";
const INFO: &[u8] = b"zOS is a minimal OS with Linux-like FS commands and an app installer.\n";

/// Seed the global namespace with its default files.
pub fn init() {
    let mut ns = NAMESPACE.lock();
    if let Err(e) = seed_default_files(&mut ns) {
        crate::log_error!("namespace seeding failed: {}", e);
    }
    crate::log_info!(
        "Namespace initialized: {} of {} pool slots free.",
        ns.arena().remaining(),
        limits::POOL_CAPACITY
    );
}

/// `/readme.txt` and `/docs/info.txt`, in the reserved boot slots. The pool
/// stays untouched and the cursor stays where it was.
pub fn seed_default_files(ns: &mut Namespace) -> FsResult<()> {
    let root = ns.root();
    ns.preload(root, "readme.txt", Payload::File(Content::from_bytes(README)))?;
    let docs = ns.preload(root, "docs", Payload::Directory(Children::EMPTY))?;
    ns.preload(docs, "info.txt", Payload::File(Content::from_bytes(INFO)))?;
    Ok(())
}
