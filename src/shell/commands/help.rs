use crate::emitln;
use crate::shell::Shell;

pub fn run(sh: &mut Shell, _args: &[&str]) {
    emitln!(sh.out, "zOS Shell - Available commands:");
    emitln!(sh.out, "  help              Show this help message");
    emitln!(sh.out, "  ls                List the current directory");
    emitln!(sh.out, "  cd <dir>          Enter a directory, or .. to go up");
    emitln!(sh.out, "  pwd               Show working directory");
    emitln!(sh.out, "  tree              Show the tree below the current directory");
    emitln!(sh.out, "  find <name>       Search below the current directory");
    emitln!(sh.out, "  cat <file>        Show file contents");
    emitln!(sh.out, "  edit <file>       Rewrite a file line by line");
    emitln!(sh.out, "  mkdir <dir>       Create a directory");
    emitln!(sh.out, "  touch <file>      Create an empty file");
    emitln!(sh.out, "  rm <file>         Remove a file");
    emitln!(sh.out, "  rmdir <dir>       Remove an empty directory");
    emitln!(sh.out, "  cp <src> <dest>   Copy a file");
    emitln!(sh.out, "  mv <src> <dest>   Rename a file or directory");
    emitln!(sh.out, "  install <file>    Stage a file into /apps");
    emitln!(sh.out, "  echo <text>       Print text");
    emitln!(sh.out, "  exit              Halt the machine");
}
