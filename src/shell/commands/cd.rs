use crate::emitln;
use crate::fs::FsError;
use crate::shell::Shell;

/// cd <dir> — enter a child directory; `..` goes up one level.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 2, "cd <directory>") {
        return;
    }
    let target = args[1];
    match sh.fs.change_directory(target) {
        Ok(_) => {}
        Err(FsError::AlreadyAtRoot) => emitln!(sh.out, "Already at root directory."),
        Err(FsError::NotFound) => emitln!(sh.out, "Directory not found: {}", target),
        Err(e) => sh.report("cd", target, e),
    }
}
