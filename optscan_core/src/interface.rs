use std::ffi::OsString;
use std::path::Path;
use thiserror::Error;

use crate::prelude::Reporter;

/// The diagnostics a [`Scanner`](crate::Scanner) may report.
///
/// The `Display` form is the human readable reason, naming the offending option.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Diagnostic {
    /// The character is not a declared option.
    #[error("invalid option '-{0}'")]
    InvalidOption(char),

    /// The option requires a value, but none was given.
    #[error("argument required for option '-{0}'")]
    MissingArgument(char),
}

impl Diagnostic {
    /// The offending option character.
    pub fn character(&self) -> char {
        match self {
            Diagnostic::InvalidOption(c) | Diagnostic::MissingArgument(c) => *c,
        }
    }
}

// Used when the program name cannot be determined.
const FALLBACK_PROGRAM: &str = "Error";

/// A [`Reporter`] that writes messages to stdout and diagnostics to stderr.
///
/// Diagnostics are prefixed with the program name: `example : invalid option '-x'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleReporter<'p> {
    program: &'p str,
}

impl<'p> ConsoleReporter<'p> {
    /// Report under an explicit program name.
    pub fn new(program: &'p str) -> Self {
        Self { program }
    }

    /// Report under the file name of `args[0]`, or `Error` when there isn't one.
    pub fn from_args<S: AsRef<str>>(args: &'p [S]) -> Self {
        Self::new(program_name(args))
    }

    /// The program name used in diagnostics.
    pub fn program(&self) -> &'p str {
        self.program
    }

    /// The line written for `diagnostic`, ex: `example : invalid option '-x'`.
    pub fn format_error(&self, diagnostic: Diagnostic) -> String {
        format!("{} : {diagnostic}", self.program)
    }
}

impl Default for ConsoleReporter<'_> {
    fn default() -> Self {
        Self::new(FALLBACK_PROGRAM)
    }
}

impl Reporter for ConsoleReporter<'_> {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, diagnostic: Diagnostic) {
        eprintln!("{}", self.format_error(diagnostic));
    }

    fn print_error_context(&self, message: String) {
        eprintln!("{message}");
    }
}

/// Derive a program name from `args[0]`, dropping any leading directories.
pub fn program_name<S: AsRef<str>>(args: &[S]) -> &str {
    args.first()
        .map(|arg0| arg0.as_ref())
        .and_then(|arg0| {
            // Windows style separators are stripped too, regardless of platform.
            let tail = arg0.rsplit('\\').next().unwrap_or(arg0);
            Path::new(tail).file_name().and_then(|name| name.to_str())
        })
        .unwrap_or(FALLBACK_PROGRAM)
}

/// Convert raw arguments (ex: `std::env::args_os()`) for scanning.
///
/// Arguments which are not valid UTF-8 are kept, with the invalid sequences replaced by `U+FFFD`.
pub fn args_lossy<I: IntoIterator<Item = OsString>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|arg| match arg.into_string() {
            Ok(arg) => arg,
            Err(arg) => arg.to_string_lossy().into_owned(),
        })
        .collect()
}

/// *Available using 'unit_test' crate feature only.*
#[cfg(any(test, feature = "unit_test"))]
pub mod testing {
    use std::cell::RefCell;

    use crate::interface::Diagnostic;
    use crate::prelude::Reporter;

    /// A [`Reporter`] which records everything in memory, for use in tests.
    #[derive(Debug, Default)]
    pub struct InMemoryReporter {
        messages: RefCell<Vec<String>>,
        errors: RefCell<Vec<Diagnostic>>,
        error_context: RefCell<Vec<String>>,
    }

    impl Reporter for InMemoryReporter {
        fn print(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }

        fn print_error(&self, diagnostic: Diagnostic) {
            self.errors.borrow_mut().push(diagnostic);
        }

        fn print_error_context(&self, message: String) {
            self.error_context.borrow_mut().push(message);
        }
    }

    impl InMemoryReporter {
        /// Take the recorded messages, joined by newlines.
        pub fn consume_message(&self) -> Option<String> {
            let messages = self.messages.take();

            if messages.is_empty() {
                None
            } else {
                Some(messages.join("\n"))
            }
        }

        /// Take the recorded diagnostics.
        pub fn consume_errors(&self) -> Vec<Diagnostic> {
            self.errors.take()
        }

        /// Take the recorded error channel messages, joined by newlines.
        pub fn consume_error_context(&self) -> Option<String> {
            let messages = self.error_context.take();

            if messages.is_empty() {
                None
            } else {
                Some(messages.join("\n"))
            }
        }
    }
}
