use crate::emitln;
use crate::shell::Shell;

/// rm <file> — remove a file. Directories need `rmdir`.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 2, "rm <file>") {
        return;
    }
    match sh.fs.rm(args[1]) {
        Ok(_) => emitln!(sh.out, "File removed."),
        Err(e) => sh.report("rm", args[1], e),
    }
}
