use crate::emitln;
use crate::shell::Shell;

/// cp <src> <dest> — copy a file within the current directory.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 3, "cp <src> <dest>") {
        return;
    }
    match sh.fs.cp(args[1], args[2]) {
        Ok(_) => emitln!(sh.out, "File copied."),
        Err(e) => sh.report("cp", args[1], e),
    }
}
