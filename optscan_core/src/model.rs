/// The result of a single [`Scanner::scan_next`](crate::Scanner::scan_next) step.
///
/// Values are borrowed views into the argument list that was scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// No more options; the cursor rests on the first positional argument.
    Done,
    /// A recognized option, with its value when the option string requires one.
    Option(char, Option<&'a str>),
    /// The character is not declared in the option string (or is literally `:`).
    /// Also reported for a missing value outside of silent mode.
    UnknownOption(char),
    /// A value-requiring option had no value, and the option string starts with `:`.
    MissingValue(char),
}

impl<'a> Outcome<'a> {
    /// Whether this outcome ends option scanning.
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done)
    }

    /// Whether this outcome signals a user error.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::UnknownOption(_) | Outcome::MissingValue(_))
    }

    /// The option character involved in this outcome, if any.
    pub fn character(&self) -> Option<char> {
        match self {
            Outcome::Done => None,
            Outcome::Option(c, _) | Outcome::UnknownOption(c) | Outcome::MissingValue(c) => {
                Some(*c)
            }
        }
    }

    /// The value attached to a recognized option, if any.
    pub fn value(&self) -> Option<&'a str> {
        match self {
            Outcome::Option(_, value) => *value,
            _ => None,
        }
    }

    /// The classic `getopt` return code for this outcome.
    ///
    /// `-1` when done, the option character itself for a recognized option, `'?'` for an unknown option,
    /// and `':'` for a missing value in silent mode.
    pub fn posix_code(&self) -> i32 {
        match self {
            Outcome::Done => -1,
            Outcome::Option(c, _) => *c as i32,
            Outcome::UnknownOption(_) => '?' as i32,
            Outcome::MissingValue(_) => ':' as i32,
        }
    }
}

impl std::fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Done => write!(f, "done"),
            Outcome::Option(c, None) => write!(f, "-{c}"),
            Outcome::Option(c, Some(value)) => write!(f, "-{c} {value}"),
            Outcome::UnknownOption(c) => write!(f, "unknown option '-{c}'"),
            Outcome::MissingValue(c) => write!(f, "missing value for '-{c}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::Done, -1)]
    #[case(Outcome::Option('a', None), 'a' as i32)]
    #[case(Outcome::Option('f', Some("name")), 'f' as i32)]
    #[case(Outcome::UnknownOption('x'), '?' as i32)]
    #[case(Outcome::MissingValue('f'), ':' as i32)]
    fn posix_code(#[case] outcome: Outcome, #[case] expected: i32) {
        assert_eq!(outcome.posix_code(), expected);
    }

    #[test]
    fn accessors() {
        let outcome = Outcome::Option('f', Some("name.txt"));
        assert_eq!(outcome.character(), Some('f'));
        assert_eq!(outcome.value(), Some("name.txt"));
        assert!(!outcome.is_done());
        assert!(!outcome.is_error());

        assert_eq!(Outcome::Done.character(), None);
        assert!(Outcome::Done.is_done());
        assert!(Outcome::MissingValue('f').is_error());
        assert_eq!(Outcome::UnknownOption('x').value(), None);
    }

    #[rstest]
    #[case(Outcome::Done, "done")]
    #[case(Outcome::Option('a', None), "-a")]
    #[case(Outcome::Option('f', Some("x y")), "-f x y")]
    #[case(Outcome::UnknownOption('x'), "unknown option '-x'")]
    #[case(Outcome::MissingValue('f'), "missing value for '-f'")]
    fn display(#[case] outcome: Outcome, #[case] expected: &str) {
        assert_eq!(outcome.to_string(), expected);
    }
}
