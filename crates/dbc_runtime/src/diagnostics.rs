//! The error-diagnostic stream `insist!` writes to before it raises.
//!
//! Messages go to stderr, one line each. [`capture`] redirects them into a string for the current
//! thread, which is how tests observe what an always-on check printed.

use std::cell::RefCell;
use std::fmt::{self, Write as _};

thread_local! {
    static CAPTURED: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Write one diagnostic line.
pub fn emit(args: fmt::Arguments<'_>) {
    let captured = CAPTURED.with(|slot| match slot.borrow_mut().as_mut() {
        Some(buf) => {
            // Writing to a String cannot fail.
            let _ = writeln!(buf, "{args}");
            true
        }
        None => false,
    });
    if !captured {
        eprintln!("{args}");
    }
    tracing::debug!(diagnostic = %args, "always-on check failed");
}

/// Run `f`, collecting every diagnostic line it emits on this thread instead of printing it.
///
/// ## Returns
/// - `(R, String)`: the closure's result and the captured lines, each terminated by `\n`.
///
/// ## Notes
/// - Captures nest: the previous capture (if any) is restored when `f` returns or unwinds.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    let restore = Restore(Some(CAPTURED.with(|slot| slot.replace(Some(String::new())))));
    let result = f();
    let captured = CAPTURED.with(|slot| slot.borrow_mut().take()).unwrap_or_default();
    drop(restore);
    (result, captured)
}

/// Puts the enclosing capture back in the slot, including when the closure panics.
struct Restore(Option<Option<String>>);

impl Drop for Restore {
    fn drop(&mut self) {
        if let Some(previous) = self.0.take() {
            let _ = CAPTURED.try_with(|slot| slot.replace(previous));
        }
    }
}
