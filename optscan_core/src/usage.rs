use std::collections::HashMap;
use terminal_size::{terminal_size, Width};

use crate::options::{OptionString, Requirement};
use crate::prelude::Reporter;

const DEFAULT_WIDTH: usize = 80;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_DESCRIPTION_WIDTH: usize = 17;
const OPTION_INDENT: usize = 4;
const DEFAULT_META: &str = "value";

/// Usage and help text for the options of an [`OptionString`].
///
/// ### Example
/// ```
/// # use optscan_core::{OptionString, Usage};
/// let options = OptionString::parse(":hf:").unwrap();
/// let usage = Usage::new("example", options)
///     .help('h', "Display this help text")
///     .help('f', "Specify the filename to operate on")
///     .meta('f', "filename")
///     .operands("files", "the files to process");
///
/// assert_eq!(usage.synopsis(), "Usage : example [-h] [-f <filename>] [files]");
/// assert_eq!(usage.lines()[1], "    -h Display this help text");
/// ```
#[derive(Debug, Clone)]
pub struct Usage<'s> {
    program: String,
    options: OptionString<'s>,
    help: HashMap<char, String>,
    meta: HashMap<char, String>,
    operands: Option<(String, String)>,
    width: Option<usize>,
}

impl<'s> Usage<'s> {
    /// Usage text wrapped at 80 columns.
    pub fn new(program: impl Into<String>, options: OptionString<'s>) -> Self {
        Self {
            program: program.into(),
            options,
            help: HashMap::default(),
            meta: HashMap::default(),
            operands: None,
            width: None,
        }
    }

    /// Usage text wrapped at the width of the current terminal, when there is one.
    pub fn terminal(program: impl Into<String>, options: OptionString<'s>) -> Self {
        let width = terminal_size().map(|(Width(width), _)| width as usize);
        Self::new(program, options).width(width)
    }

    /// Wrap the help listing at `width` columns (80 when `None`).
    pub fn width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    /// Document an option.
    /// If repeated, only the final description applies.
    pub fn help(mut self, option: char, description: impl Into<String>) -> Self {
        self.help.insert(option, description.into());
        self
    }

    /// Name the value of a value-requiring option (default: `value`).
    pub fn meta(mut self, option: char, name: impl Into<String>) -> Self {
        self.meta.insert(option, name.into());
        self
    }

    /// Name and describe the positional arguments.
    pub fn operands(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.operands = Some((name.into(), description.into()));
        self
    }

    /// The one line synopsis, ex: `Usage : example [-h] [-f <filename>] [files]`.
    pub fn synopsis(&self) -> String {
        let mut synopsis = format!("Usage : {}", self.program);

        for (option, requirement) in self.options.options() {
            match requirement {
                Requirement::Switch => synopsis.push_str(&format!(" [-{option}]")),
                Requirement::Value => {
                    let meta = self.meta.get(&option).map_or(DEFAULT_META, String::as_str);
                    synopsis.push_str(&format!(" [-{option} <{meta}>]"));
                }
            }
        }

        if let Some((name, _)) = &self.operands {
            synopsis.push_str(&format!(" [{name}]"));
        }

        synopsis
    }

    /// The full help text: the synopsis, one entry per option, then the positional arguments.
    pub fn lines(&self) -> Vec<String> {
        let total = self.width.unwrap_or(DEFAULT_WIDTH);
        let mut out = vec![self.synopsis()];

        for (option, _) in self.options.options() {
            let left = format!("{}-{option}", " ".repeat(OPTION_INDENT));
            let description = self.help.get(&option).map_or("", String::as_str);
            render(&mut out, &left, description, total);
        }

        if let Some((name, description)) = &self.operands {
            render(&mut out, &format!("{name} :"), description, total);
        }

        out
    }

    /// Print the synopsis followed by a pointer to the help option (if `h` is declared) on the error channel.
    pub fn print_usage(&self, reporter: &(impl Reporter + ?Sized)) {
        reporter.print_error_context(self.synopsis());

        if self.options.requirement('h').is_some() {
            reporter.print_error_context(format!("For help : {} -h", self.program));
        }
    }

    /// Print the full help text.
    pub fn print_help(&self, reporter: &(impl Reporter + ?Sized)) {
        reporter.print(self.lines().join("\n"));
    }
}

// Append `left` and `description` to `out`, wrapping the description into a column after `left`.
fn render(out: &mut Vec<String>, left: &str, description: &str, total: usize) {
    let indent = left.chars().count() + 1;
    let width = std::cmp::max(total.saturating_sub(indent), MINIMUM_DESCRIPTION_WIDTH);
    let mut parts = wrap(description, width).into_iter();

    match parts.next() {
        Some(first) => out.push(format!("{left} {first}")),
        None => out.push(left.to_string()),
    }

    for part in parts {
        out.push(format!("{:indent$}{part}", ""));
    }
}

// Greedy word wrap; words longer than `width` are kept whole on their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::default();
    let mut current = String::default();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::testing::InMemoryReporter;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn example(width: Option<usize>) -> Usage<'static> {
        Usage::new("example", OptionString::parse(":hva1f:").unwrap())
            .width(width)
            .help('h', "Display this help text")
            .help('v', "Display the program version number")
            .help('a', "Set the 'a' flag for the program")
            .help('1', "Set the '1' flag for the program")
            .help('f', "Specify the filename to operate on")
            .meta('f', "filename")
            .operands("non-option-arguments", "other arguments not parsed by the scanner")
    }

    #[test]
    fn synopsis() {
        assert_eq!(
            example(None).synopsis(),
            "Usage : example [-h] [-v] [-a] [-1] [-f <filename>] [non-option-arguments]"
        );
    }

    #[test]
    fn synopsis_defaults() {
        let usage = Usage::new("program", OptionString::parse("ab:").unwrap());
        assert_eq!(usage.synopsis(), "Usage : program [-a] [-b <value>]");
    }

    #[test]
    fn lines() {
        assert_eq!(
            example(None).lines(),
            vec![
                "Usage : example [-h] [-v] [-a] [-1] [-f <filename>] [non-option-arguments]",
                "    -h Display this help text",
                "    -v Display the program version number",
                "    -a Set the 'a' flag for the program",
                "    -1 Set the '1' flag for the program",
                "    -f Specify the filename to operate on",
                "non-option-arguments : other arguments not parsed by the scanner",
            ]
        );
    }

    #[test]
    fn lines_undocumented() {
        let usage = Usage::new("program", OptionString::parse("a").unwrap());
        assert_eq!(usage.lines(), vec!["Usage : program [-a]", "    -a"]);
    }

    #[test]
    fn lines_wrapped() {
        let lines = example(Some(30)).lines();

        assert_eq!(lines[1], "    -h Display this help text");
        assert_eq!(lines[2], "    -v Display the program");
        assert_eq!(lines[3], "       version number");
    }

    #[test]
    fn lines_wrapped_non_ascii() {
        let usage = Usage::new("program", OptionString::parse("éa").unwrap())
            .width(Some(25))
            .help('é', "one two three four five six")
            .help('a', "one two three four five six");
        let lines = usage.lines();

        assert_eq!(lines[1], "    -é one two three four");
        assert_eq!(lines[2], "       five six");
        assert_eq!(lines[3], "    -a one two three four");
        assert_eq!(lines[4], "       five six");
    }

    #[rstest]
    #[case("", 10, vec![])]
    #[case("one two three", 20, vec!["one two three"])]
    #[case("one two three", 7, vec!["one two", "three"])]
    #[case("one two three", 3, vec!["one", "two", "three"])]
    #[case("abcdefghij k", 4, vec!["abcdefghij", "k"])]
    #[case("  spaced   out  ", 20, vec!["spaced out"])]
    fn wrap_words(#[case] text: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(wrap(text, width), expected);
    }

    #[test]
    fn print_usage() {
        let reporter = InMemoryReporter::default();

        example(None).print_usage(&reporter);

        let message = reporter.consume_error_context().unwrap();
        assert_contains!(message, "Usage : example [-h]");
        assert_contains!(message, "\nFor help : example -h");
        assert_eq!(reporter.consume_message(), None);
    }

    #[test]
    fn print_usage_without_help() {
        let reporter = InMemoryReporter::default();

        Usage::new("program", OptionString::parse("a").unwrap()).print_usage(&reporter);

        assert_eq!(
            reporter.consume_error_context(),
            Some("Usage : program [-a]".to_string())
        );
    }

    #[test]
    fn print_help() {
        let reporter = InMemoryReporter::default();

        example(None).print_help(&reporter);

        let message = reporter.consume_message().unwrap();
        assert_contains!(message, "    -f Specify the filename to operate on\n");
        assert!(reporter.consume_errors().is_empty());
    }
}
