use crate::emitln;
use crate::shell::Shell;

/// mv <src> <dest> — rename in place. Nothing moves between directories.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 3, "mv <src> <dest>") {
        return;
    }
    match sh.fs.mv(args[1], args[2]) {
        Ok(_) => emitln!(sh.out, "Moved/Renamed successfully."),
        Err(e) => sh.report("mv", args[1], e),
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::tests::{seeded, session};

    #[test]
    fn renames_directories_too() {
        let mut ns = seeded();
        let out = session(&mut ns, &["mv docs manual", "ls", "mv ghost x"], &[]);
        assert_eq!(
            out,
            "Moved/Renamed successfully.\nreadme.txt\nmanual/\nmv: ghost: No such file or directory\n"
        );
    }
}
