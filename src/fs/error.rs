use core::fmt;

/// Namespace error kinds. All of them are recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    NotADirectory,
    NotFound,
    AlreadyExists,
    /// `cd ..` at the root. Informational, the cursor is left alone.
    AlreadyAtRoot,
    DirectoryFull,
    NotEmpty,
    /// The node pool is used up. Stays true for the life of the process.
    PoolExhausted,
    /// The staging directory could not be found or created.
    InstallFailed,
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FsError::NotADirectory => write!(f, "Not a directory"),
            FsError::NotFound => write!(f, "No such file or directory"),
            FsError::AlreadyExists => write!(f, "A file or directory with that name already exists"),
            FsError::AlreadyAtRoot => write!(f, "Already at root directory"),
            FsError::DirectoryFull => write!(f, "Directory is full"),
            FsError::NotEmpty => write!(f, "Directory is not empty"),
            FsError::PoolExhausted => write!(f, "Node pool exhausted"),
            FsError::InstallFailed => write!(f, "Failed to create apps directory"),
        }
    }
}

pub type FsResult<T> = Result<T, FsError>;
