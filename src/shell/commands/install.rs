use crate::emitln;
use crate::fs::InstallOutcome;
use crate::shell::Shell;

/// install <file> — stage a file from the current directory into `/apps`.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 2, "install <file>") {
        return;
    }
    let name = args[1];
    match sh.fs.install(name) {
        Ok(InstallOutcome::Installed(_)) => emitln!(sh.out, "Installation complete: {}", name),
        Ok(InstallOutcome::AlreadyInstalled) => emitln!(sh.out, "File already installed: {}", name),
        Err(e) => sh.report("install", name, e),
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::tests::{seeded, session};

    #[test]
    fn second_install_is_a_no_op() {
        let mut ns = seeded();
        let out = session(
            &mut ns,
            &["install readme.txt", "install readme.txt", "cd apps", "ls", "pwd"],
            &[],
        );
        assert_eq!(
            out,
            "Installation complete: readme.txt\n\
             File already installed: readme.txt\n\
             readme.txt\n\
             //apps\n"
        );
    }

    #[test]
    fn failure_to_stage_is_reported() {
        let mut ns = seeded();
        let cmds = [
            "touch a", "touch b", "touch c", "touch d",
            "touch e", "touch f", "touch g", "touch h",
            "install a",
        ];
        let out = session(&mut ns, &cmds, &[]);
        assert!(out.ends_with("install: a: Failed to create apps directory\n"));
    }
}
