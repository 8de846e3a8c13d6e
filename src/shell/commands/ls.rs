use crate::emitln;
use crate::shell::Shell;

/// ls — list the current directory, marking subdirectories with `/`.
pub fn run(sh: &mut Shell, _args: &[&str]) {
    let fs = &*sh.fs;
    let entries = match fs.list(fs.cursor()) {
        Ok(entries) => entries,
        Err(e) => return emitln!(sh.out, "ls: {}", e),
    };
    for node in entries {
        if node.is_dir() {
            emitln!(sh.out, "{}/", node.name());
        } else {
            emitln!(sh.out, "{}", node.name());
        }
    }
}
