use crate::shell::Shell;

pub fn run(sh: &mut Shell, args: &[&str]) {
    if args.len() < 2 {
        return;
    }
    for (i, word) in args[1..].iter().enumerate() {
        if i > 0 {
            sh.out.emit(" ");
        }
        sh.out.emit(word);
    }
    sh.out.emit("\n");
}
