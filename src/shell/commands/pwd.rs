use crate::emitln;
use crate::shell::Shell;

pub fn run(sh: &mut Shell, _args: &[&str]) {
    emitln!(sh.out, "{}", sh.fs.working_path(sh.fs.cursor()));
}
