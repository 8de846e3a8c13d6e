use crate::console::{Console, LineInput};
use crate::emitln;
use crate::fs::bounded::Line;
use crate::fs::limits::EDIT_SENTINEL;
use crate::shell::Shell;

/// Line input that shows `> ` before every read.
struct Prompted<'s> {
    out: &'s mut dyn Console,
    input: &'s mut dyn LineInput,
}

impl LineInput for Prompted<'_> {
    fn read_line(&mut self) -> Option<Line> {
        self.out.emit("> ");
        self.input.read_line()
    }
}

/// edit <file> — replace a file's content with lines typed until `.save`.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 2, "edit <file>") {
        return;
    }
    let name = args[1];
    if let Err(e) = sh.fs.cat(name) {
        return sh.report("edit", name, e);
    }
    emitln!(sh.out, "Editing {} (type {} to finish):", name, EDIT_SENTINEL);
    let mut lines = Prompted {
        out: &mut *sh.out,
        input: &mut *sh.input,
    };
    match sh.fs.edit(name, &mut lines) {
        Ok(_) => emitln!(sh.out, "File saved."),
        Err(e) => sh.report("edit", name, e),
    }
}
