//! Text I/O seams between the namespace and whatever drives it.

use core::fmt;

use crate::fs::bounded::Line;

/// Append-only text sink. Output failures are never reported back.
pub trait Console {
    fn emit(&mut self, text: &str);

    fn emit_fmt(&mut self, args: fmt::Arguments) {
        let _ = fmt::write(&mut Sink(self), args);
    }
}

/// Blocking source of input lines. `None` means the input is gone for good.
pub trait LineInput {
    fn read_line(&mut self) -> Option<Line>;
}

struct Sink<'a, C: ?Sized>(&'a mut C);

impl<C: Console + ?Sized> fmt::Write for Sink<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.emit(s);
        Ok(())
    }
}

/// Format into a [`Console`].
#[macro_export]
macro_rules! emit {
    ($con:expr, $($arg:tt)*) => {
        $crate::console::Console::emit_fmt(&mut *$con, format_args!($($arg)*))
    };
}

/// Format into a [`Console`], followed by a newline.
#[macro_export]
macro_rules! emitln {
    ($con:expr) => {
        $crate::console::Console::emit(&mut *$con, "\n")
    };
    ($con:expr, $($arg:tt)*) => {{
        $crate::emit!($con, $($arg)*);
        $crate::console::Console::emit(&mut *$con, "\n");
    }};
}
