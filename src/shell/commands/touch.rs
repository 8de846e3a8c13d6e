use crate::emitln;
use crate::shell::Shell;

/// touch <file> — create an empty file in the current directory.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 2, "touch <file>") {
        return;
    }
    match sh.fs.touch(args[1]) {
        Ok(_) => emitln!(sh.out, "File created."),
        Err(e) => sh.report("touch", args[1], e),
    }
}
