//! Traits which, typically, may be imported without concern: `use optscan::prelude::*`.

use crate::interface::Diagnostic;

/// Behaviour for a sink that receives scanner diagnostics and usage text.
// Needs to be imported in order to implement a custom `Reporter`.
pub trait Reporter {
    /// Emit a regular message (help, usage, etc).
    fn print(&self, message: String);

    /// Emit a scanner diagnostic.
    fn print_error(&self, diagnostic: Diagnostic);

    /// Emit a message on the error channel, ex: the usage that follows an error.
    fn print_error_context(&self, message: String);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn print(&self, message: String) {
        (**self).print(message);
    }

    fn print_error(&self, diagnostic: Diagnostic) {
        (**self).print_error(diagnostic);
    }

    fn print_error_context(&self, message: String) {
        (**self).print_error_context(message);
    }
}
