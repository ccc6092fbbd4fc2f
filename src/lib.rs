//! `optscan` is a POSIX `getopt` style option scanner for Rust.
//!
//! It scans single character options the way POSIX utilities expect, one call at a time:
//! * *POSIX option strings*:
//! Options are declared with the classic `getopt` option string, ex: `":hva1f:"`.
//! A `:` after an option character means the option requires a value; a leading `:` selects silent mode.
//! * *Clusters and values*:
//! `-av` is the same as `-a -v`, and a value may be embedded (`-fname`) or follow as the next argument (`-f name`).
//! * *No permutation*:
//! Scanning stops at the first non-option argument, at a bare `-`, or after `--`.
//! The remaining arguments are positional, and are left for the caller.
//! * *Explicit state*:
//! All parse state lives in a [`Scanner`] value owned by the caller, rather than in process wide globals.
//! Independent parses simply use independent scanners.
//! * *No allocation*:
//! Returned values are borrowed views into the argument list.
//!
//! Errors are ordinary [`Outcome`]s; the scanner never exits the program on your behalf.
//!
//! # Usage
//! The demo program below lives in `demos/example.rs`.
//! ```no_run
#![doc = include_str!("../demos/example.rs")]
//! ```
//!
//! ```console
//! $ example -a -1 -f data.txt left right
//! You supplied the option flag 'a'
//! You supplied the option flag '1'
//! You supplied the filename "data.txt"
//!
//! non-option argv elements : left right
//!
//! $ example -x
//! Error : unknown option 'x'
//! Usage : example [-h] [-v] [-a] [-1] [-f <filename>] [non-option-arguments]
//! For help : example -h
//! ```
//!
//! # Option strings
//! An [`OptionString`] validates the `getopt` syntax up front.
//! The following are rejected, since POSIX does not define them:
//! * `-` as an option character,
//! * a leading `+`,
//! * optional values (`::`).
//!
//! # Outcomes
//! Each call to [`Scanner::scan_next`] produces one [`Outcome`]:
//! * [`Outcome::Option`] for a declared option, with its value if it requires one.
//! * [`Outcome::UnknownOption`] for an undeclared option character.
//! Outside of silent mode, this is also what a missing value produces.
//! * [`Outcome::MissingValue`] for a missing value in silent mode.
//! * [`Outcome::Done`] once the options are exhausted.
//! From then on, [`Scanner::next_index`] is the index of the first positional argument.
//!
//! Outside of silent mode, errors are also written to a [`prelude::Reporter`] (stderr by default), unless disabled via [`Scanner::set_report_errors`].
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events for the scanner's state transitions.
//! * `unit_test`: expose the `testing` module, with an in-memory reporter.
pub use optscan_core::*;
