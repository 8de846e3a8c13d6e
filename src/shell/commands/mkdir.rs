use crate::emitln;
use crate::shell::Shell;

/// mkdir <dir> — create a directory in the current directory.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 2, "mkdir <directory>") {
        return;
    }
    match sh.fs.mkdir(args[1]) {
        Ok(_) => emitln!(sh.out, "Directory created."),
        Err(e) => sh.report("mkdir", args[1], e),
    }
}

#[cfg(test)]
mod tests {
    use crate::fs::Namespace;
    use crate::shell::tests::session;
    use std::format;
    use std::string::String;
    use std::vec::Vec;

    #[test]
    fn full_directory_is_reported() {
        let mut ns = Namespace::new();
        let cmds: Vec<String> = (0..11).map(|i| format!("mkdir d{}", i)).collect();
        let cmds: Vec<&str> = cmds.iter().map(String::as_str).collect();
        let out = session(&mut ns, &cmds, &[]);
        assert!(out.ends_with("Directory created.\nmkdir: d10: Directory is full\n"));
        assert_eq!(out.matches("Directory created.").count(), 10);
    }
}
