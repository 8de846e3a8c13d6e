use crate::shell::Shell;

/// cat <file> — write a file's bytes out as-is; invalid UTF-8 shows as U+FFFD.
pub fn run(sh: &mut Shell, args: &[&str]) {
    if !sh.require(args, 2, "cat <file>") {
        return;
    }
    let content = match sh.fs.cat(args[1]) {
        Ok(content) => content,
        Err(e) => return sh.report("cat", args[1], e),
    };
    for chunk in content.utf8_chunks() {
        sh.out.emit(chunk.valid());
        if !chunk.invalid().is_empty() {
            sh.out.emit("\u{FFFD}");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::tests::{seeded, session};

    #[test]
    fn prints_content_verbatim() {
        let mut ns = seeded();
        let out = session(&mut ns, &["cat readme.txt", "cat docs", "cat"], &[]);
        assert_eq!(
            out,
            "This is the readme file for zOS.\n\
             cat: docs: No such file or directory\n\
             Usage: cat <file>\n"
        );
    }

    #[test]
    fn replaces_invalid_bytes() {
        let mut ns = seeded();
        ns.ingest("bin", b"ok\xffok").unwrap();
        assert_eq!(session(&mut ns, &["cat bin"], &[]), "ok\u{FFFD}ok");
    }
}
