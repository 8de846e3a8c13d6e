pub mod commands;

use crate::console::{Console, LineInput};
use crate::fs::{FsError, Namespace};
use crate::{emit, emitln};

/// Commands take at most this many whitespace-separated tokens; the rest of
/// the line is ignored.
pub const MAX_ARGS: usize = 4;

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a namespace.
pub struct Shell<'a> {
    pub fs: &'a mut Namespace,
    pub out: &'a mut dyn Console,
    pub input: &'a mut dyn LineInput,
}

/// Split `line` on whitespace into `argv`. Returns the token count.
pub fn tokenize<'l>(line: &'l str, argv: &mut [&'l str; MAX_ARGS]) -> usize {
    let mut argc = 0;
    for (slot, token) in argv.iter_mut().zip(line.split_whitespace()) {
        *slot = token;
        argc += 1;
    }
    argc
}

impl<'a> Shell<'a> {
    pub fn new(fs: &'a mut Namespace, out: &'a mut dyn Console, input: &'a mut dyn LineInput) -> Self {
        Shell { fs, out, input }
    }

    pub fn prompt(&mut self) {
        emit!(self.out, "zOS:{}> ", self.fs.working_path(self.fs.cursor()));
    }

    /// Parse one input line and run it.
    pub fn exec_command(&mut self, line: &str) -> Flow {
        let mut argv = [""; MAX_ARGS];
        let argc = tokenize(line, &mut argv);
        if argc == 0 {
            return Flow::Continue;
        }
        let args = &argv[..argc];

        match args[0] {
            "help"    => commands::help::run(self, args),
            "ls"      => commands::ls::run(self, args),
            "cd"      => commands::cd::run(self, args),
            "pwd"     => commands::pwd::run(self, args),
            "tree"    => commands::tree::run(self, args),
            "find"    => commands::find::run(self, args),
            "cat"     => commands::cat::run(self, args),
            "edit"    => commands::edit::run(self, args),
            "mkdir"   => commands::mkdir::run(self, args),
            "touch"   => commands::touch::run(self, args),
            "rm"      => commands::rm::run(self, args),
            "rmdir"   => commands::rmdir::run(self, args),
            "cp"      => commands::cp::run(self, args),
            "mv"      => commands::mv::run(self, args),
            "install" => commands::install::run(self, args),
            "echo"    => commands::echo::run(self, args),
            "exit"    => {
                emitln!(self.out, "Exiting CLI. Halting...");
                return Flow::Exit;
            }
            cmd       => emitln!(self.out, "Unknown command: {}", cmd),
        }
        Flow::Continue
    }

    /// Prompt, read and dispatch until `exit` or the input runs dry.
    pub fn run(&mut self) {
        loop {
            self.prompt();
            let Some(line) = self.input.read_line() else {
                return;
            };
            if self.exec_command(&line) == Flow::Exit {
                return;
            }
        }
    }

    /// Print `Usage: <usage>` unless `args` has at least `needed` tokens.
    pub(crate) fn require(&mut self, args: &[&str], needed: usize, usage: &str) -> bool {
        if args.len() < needed {
            emitln!(self.out, "Usage: {}", usage);
            return false;
        }
        true
    }

    pub(crate) fn report(&mut self, cmd: &str, arg: &str, err: FsError) {
        emitln!(self.out, "{}: {}: {}", cmd, arg, err);
    }
}
