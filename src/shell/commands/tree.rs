use crate::{emit, emitln};
use crate::shell::Shell;

/// tree — indented pre-order dump from the current directory down.
pub fn run(sh: &mut Shell, _args: &[&str]) {
    let fs = &*sh.fs;
    for entry in fs.tree(fs.cursor(), 0) {
        for _ in 0..entry.depth {
            emit!(sh.out, "  ");
        }
        let node = entry.node;
        let mark = if node.is_dir() { "/" } else { "" };
        emitln!(sh.out, "{}{}", node.name(), mark);
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::tests::{seeded, session};

    #[test]
    fn indents_by_depth() {
        let mut ns = seeded();
        let out = session(&mut ns, &["cd docs", "mkdir sub", "cd ..", "tree"], &[]);
        assert_eq!(
            out,
            "Directory created.\n//\n  readme.txt\n  docs/\n    info.txt\n    sub/\n"
        );
    }

    #[test]
    fn starts_at_the_cursor() {
        let mut ns = seeded();
        let out = session(&mut ns, &["cd docs", "tree"], &[]);
        assert_eq!(out, "docs/\n  info.txt\n");
    }
}
