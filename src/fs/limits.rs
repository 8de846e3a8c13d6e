//! Fixed capacities of the namespace. None of these grow at runtime.

/// Maximum number of entries a single directory can hold.
pub const DIR_CAPACITY: usize = 10;

/// Maximum size of a file's content in bytes. Longer input is truncated.
pub const CONTENT_CAPACITY: usize = 1024;

/// Number of allocatable node slots. The root and the boot files live
/// outside the pool.
pub const POOL_CAPACITY: usize = 50;

/// Nodes preloaded at boot: `readme.txt`, `docs` and `docs/info.txt`.
pub const BOOT_NODES: usize = 3;

/// Slots set aside ahead of the pool: the root plus the boot nodes.
pub const RESERVED_SLOTS: usize = 1 + BOOT_NODES;

/// Maximum length of a node name in bytes.
pub const NAME_CAPACITY: usize = 31;

/// Maximum length of one line of console input in bytes.
pub const LINE_CAPACITY: usize = 128;

/// Total node slots in the arena: the reserved slots plus the pool.
pub const SLOT_COUNT: usize = RESERVED_SLOTS + POOL_CAPACITY;

/// Upper bound of a rendered path: every slot on one chain, each with a separator.
pub const PATH_CAPACITY: usize = (NAME_CAPACITY + 1) * SLOT_COUNT;

/// Name of the top-level directory `install` stages files into.
pub const STAGING_DIR: &str = "apps";

/// Line that ends an `edit` session.
pub const EDIT_SENTINEL: &str = ".save";
