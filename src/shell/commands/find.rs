use crate::emitln;
use crate::shell::Shell;

/// find <name> — print every match below the current directory.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 2, "find <name>") {
        return;
    }
    let fs = &*sh.fs;
    for hit in fs.find(fs.cursor(), args[1]) {
        emitln!(sh.out, "{}", hit.path());
    }
}
