//! Core module for `optscan`.
//! See [documentation root](https://docs.rs/optscan/latest/optscan/index.html) for full details.
#![deny(missing_docs)]
mod interface;
mod model;
mod options;
pub mod prelude;
mod scanner;
mod usage;

pub use interface::{args_lossy, program_name, ConsoleReporter, Diagnostic};
pub use model::Outcome;
pub use options::{InvalidOptionString, OptionString, Requirement};
pub use scanner::{Scan, Scanner};
pub use usage::Usage;

#[cfg(feature = "unit_test")]
pub use interface::testing;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
