use crate::emitln;
use crate::shell::Shell;

/// rmdir <dir> — remove an empty directory.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 2, "rmdir <directory>") {
        return;
    }
    match sh.fs.rmdir(args[1]) {
        Ok(_) => emitln!(sh.out, "Directory removed."),
        Err(e) => sh.report("rmdir", args[1], e),
    }
}
