#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::interface::{ConsoleReporter, Diagnostic};
use crate::model::Outcome;
use crate::options::{OptionString, Requirement};
use crate::prelude::Reporter;

/// The POSIX option scanner.
///
/// All parse state lives in this value: the argument cursor, the offset within a clustered
/// argument (ex: `-av`), the last considered option character, and the value of the last option.
/// Independent parses use independent scanners.
///
/// Call [`Scanner::scan_next`] until it returns [`Outcome::Done`], then read the positional
/// arguments from [`Scanner::remaining`] (or from [`Scanner::next_index`] onwards).
///
/// ### Example
/// ```
/// # use optscan_core::{OptionString, Outcome, Scanner};
/// let args = ["program", "-av", "-f", "out.txt", "input"];
/// let options = OptionString::parse("avf:").unwrap();
/// let mut scanner = Scanner::console(&args);
///
/// assert_eq!(scanner.scan_next(&args, &options), Outcome::Option('a', None));
/// assert_eq!(scanner.scan_next(&args, &options), Outcome::Option('v', None));
/// assert_eq!(scanner.scan_next(&args, &options), Outcome::Option('f', Some("out.txt")));
/// assert_eq!(scanner.scan_next(&args, &options), Outcome::Done);
/// assert_eq!(scanner.remaining(&args), &["input"]);
/// ```
#[derive(Debug)]
pub struct Scanner<'a, R = ConsoleReporter<'a>> {
    next_index: usize,
    // Byte offset into the argument at `next_index`; 0 exactly when on an argument boundary.
    char_offset: usize,
    last_char: Option<char>,
    current_value: Option<&'a str>,
    report_errors: bool,
    finished: bool,
    reporter: R,
}

// Index 0 holds the program name.
const FIRST_INDEX: usize = 1;

impl<'a> Scanner<'a> {
    /// A scanner which reports diagnostics to stderr under the program name found in `args[0]`.
    pub fn console<S: AsRef<str>>(args: &'a [S]) -> Self {
        Self::new(ConsoleReporter::from_args(args))
    }
}

impl Default for Scanner<'_> {
    fn default() -> Self {
        Self::new(ConsoleReporter::default())
    }
}

impl<'a, R: Reporter> Scanner<'a, R> {
    /// A scanner which sends its diagnostics to `reporter`.
    /// Error reporting starts enabled.
    pub fn new(reporter: R) -> Self {
        Self {
            next_index: FIRST_INDEX,
            char_offset: 0,
            last_char: None,
            current_value: None,
            report_errors: true,
            finished: false,
            reporter,
        }
    }

    /// Enable or disable diagnostics, builder style.
    pub fn with_report_errors(mut self, report_errors: bool) -> Self {
        self.report_errors = report_errors;
        self
    }

    /// Enable or disable diagnostics.
    /// Option strings starting with `:` never produce diagnostics, regardless of this flag.
    pub fn set_report_errors(&mut self, report_errors: bool) {
        self.report_errors = report_errors;
    }

    /// Whether diagnostics are enabled.
    pub fn report_errors(&self) -> bool {
        self.report_errors
    }

    /// The reporter receiving diagnostics.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Index of the next unconsumed argument.
    /// After [`Outcome::Done`] this is where the positional arguments begin.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Byte offset into the current argument while inside a cluster, `0` otherwise.
    pub fn char_offset(&self) -> usize {
        self.char_offset
    }

    /// The most recently considered option character.
    /// After an error, this is the offending character.
    pub fn last_char(&self) -> Option<char> {
        self.last_char
    }

    /// The value attached to the option returned by the latest call, if any.
    pub fn value(&self) -> Option<&'a str> {
        self.current_value
    }

    /// Whether scanning has reached the end of the options.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Prepare for a fresh parse.
    /// The error reporting flag and reporter are kept.
    pub fn reset(&mut self) {
        self.next_index = FIRST_INDEX;
        self.char_offset = 0;
        self.last_char = None;
        self.current_value = None;
        self.finished = false;
    }

    /// The arguments from the cursor onwards.
    /// Once scanning is done, these are the positional arguments.
    pub fn remaining<S: AsRef<str>>(&self, args: &'a [S]) -> &'a [S] {
        args.get(self.next_index..).unwrap_or(&[])
    }

    /// Iterate the outcomes of [`Scanner::scan_next`] up to (but excluding) [`Outcome::Done`].
    ///
    /// ### Example
    /// ```
    /// # use optscan_core::{OptionString, Outcome, Scanner};
    /// let args = ["program", "-ab", "rest"];
    /// let options = OptionString::parse("ab").unwrap();
    /// let mut scanner = Scanner::console(&args);
    /// let outcomes: Vec<Outcome> = scanner.iter(&args, options).collect();
    ///
    /// assert_eq!(outcomes, vec![Outcome::Option('a', None), Outcome::Option('b', None)]);
    /// assert_eq!(scanner.next_index(), 2);
    /// ```
    pub fn iter<'s, 'o, S: AsRef<str>>(
        &'s mut self,
        args: &'a [S],
        options: OptionString<'o>,
    ) -> Scan<'s, 'a, 'o, R, S> {
        Scan {
            scanner: self,
            args,
            options,
        }
    }

    /// Scan the next option out of `args`.
    ///
    /// `args` and `options` must be the same for every call of a parse.
    /// Errors are returned as outcomes, and the scanner always advances past the offending
    /// character so that scanning may continue.
    pub fn scan_next<S: AsRef<str>>(
        &mut self,
        args: &'a [S],
        options: &OptionString<'_>,
    ) -> Outcome<'a> {
        self.current_value = None;

        if self.finished {
            return Outcome::Done;
        }

        let Some((arg, c)) = self.resume(args) else {
            return self.finish();
        };

        self.last_char = Some(c);
        let after = self.char_offset + c.len_utf8();

        match options.requirement(c) {
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Unknown option '{c}' at {}:{}.", self.next_index, self.char_offset);
                }

                self.report(options, Diagnostic::InvalidOption(c));
                self.step(arg, after);
                Outcome::UnknownOption(c)
            }
            Some(Requirement::Switch) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Switch '{c}' at {}:{}.", self.next_index, self.char_offset);
                }

                self.step(arg, after);
                Outcome::Option(c, None)
            }
            Some(Requirement::Value) => {
                let value = if after < arg.len() {
                    // Embedded, ex: `-fname`.
                    self.next_index += 1;
                    arg.get(after..)
                } else if let Some(next) = args.get(self.next_index + 1) {
                    self.next_index += 2;
                    Some(next.as_ref())
                } else {
                    self.next_index += 1;
                    None
                };
                self.char_offset = 0;

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option '{c}' with value {value:?}, resuming at {}.", self.next_index);
                }

                match value {
                    Some(value) => {
                        self.current_value = Some(value);
                        Outcome::Option(c, Some(value))
                    }
                    None => {
                        self.report(options, Diagnostic::MissingArgument(c));

                        if options.is_silent() {
                            Outcome::MissingValue(c)
                        } else {
                            Outcome::UnknownOption(c)
                        }
                    }
                }
            }
        }
    }

    fn current<S: AsRef<str>>(&self, args: &'a [S]) -> Option<&'a str> {
        args.get(self.next_index).map(|arg| arg.as_ref())
    }

    // Locate the next option character, entering a new cluster when on an argument boundary.
    // `None` means the end of the options.
    fn resume<S: AsRef<str>>(&mut self, args: &'a [S]) -> Option<(&'a str, char)> {
        if self.char_offset > 0 {
            if let Some(arg) = self.current(args) {
                if let Some(c) = arg.get(self.char_offset..).and_then(|rest| rest.chars().next()) {
                    return Some((arg, c));
                }
            }

            // The arguments changed underneath an unfinished cluster.
            self.char_offset = 0;
        }

        let arg = self.current(args)?;

        if arg == "--" {
            self.next_index += 1;
            return None;
        }

        if arg == "-" || !arg.starts_with('-') {
            return None;
        }

        let c = arg.get(1..).and_then(|rest| rest.chars().next())?;
        self.char_offset = 1;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Entering cluster '{arg}' at {}.", self.next_index);
        }

        Some((arg, c))
    }

    // Move past the option character ending at `after`, leaving the cluster when it is exhausted.
    fn step(&mut self, arg: &str, after: usize) {
        if after < arg.len() {
            self.char_offset = after;
        } else {
            self.next_index += 1;
            self.char_offset = 0;
        }
    }

    fn finish(&mut self) -> Outcome<'a> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("End of options, positional arguments start at {}.", self.next_index);
        }

        self.finished = true;
        Outcome::Done
    }

    fn report(&self, options: &OptionString<'_>, diagnostic: Diagnostic) {
        if self.report_errors && !options.is_silent() {
            self.reporter.print_error(diagnostic);
        }
    }
}

/// Iterator over the outcomes of a [`Scanner`], built with [`Scanner::iter`].
pub struct Scan<'s, 'a, 'o, R, S> {
    scanner: &'s mut Scanner<'a, R>,
    args: &'a [S],
    options: OptionString<'o>,
}

impl<'a, R: Reporter, S: AsRef<str>> Iterator for Scan<'_, 'a, '_, R, S> {
    type Item = Outcome<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.scanner.scan_next(self.args, &self.options) {
            Outcome::Done => None,
            outcome => Some(outcome),
        }
    }
}
