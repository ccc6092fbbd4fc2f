use thiserror::Error;

/// How a declared option consumes its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// A plain switch, such as `-a`.
    Switch,
    /// The option requires a value, either embedded (`-fname`) or as the next argument (`-f name`).
    Value,
}

/// Option strings that use syntax outside of POSIX `getopt`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidOptionString {
    /// `-` appears in the option string.
    #[error("'-' cannot be declared as an option character (offset={offset}).")]
    DashOption {
        /// Byte offset of the `-`.
        offset: usize,
    },

    /// The option string starts with `+`.
    #[error("leading '+' is not supported.")]
    LeadingPlus,

    /// The option string contains `::`.
    #[error("optional values ('::') are not supported (offset={offset}).")]
    OptionalValue {
        /// Byte offset of the first `:` in the pair.
        offset: usize,
    },
}

/// A validated POSIX option string, such as `":hva1f:"`.
///
/// * A leading `:` selects silent mode: missing values are reported as
/// [`Outcome::MissingValue`](crate::Outcome::MissingValue) and no diagnostics are written.
/// * Every other character declares an option; a `:` immediately after it marks the option as requiring a value.
///
/// The option string only borrows its text, so lookups never allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionString<'s> {
    raw: &'s str,
}

impl<'s> OptionString<'s> {
    /// Validate an option string.
    ///
    /// ### Example
    /// ```
    /// # use optscan_core::{OptionString, Requirement};
    /// let options = OptionString::parse(":ab:").unwrap();
    /// assert!(options.is_silent());
    /// assert_eq!(options.requirement('a'), Some(Requirement::Switch));
    /// assert_eq!(options.requirement('b'), Some(Requirement::Value));
    /// assert_eq!(options.requirement('c'), None);
    /// ```
    pub fn parse(raw: &'s str) -> Result<Self, InvalidOptionString> {
        if raw.starts_with('+') {
            return Err(InvalidOptionString::LeadingPlus);
        }

        if let Some(offset) = raw.find('-') {
            return Err(InvalidOptionString::DashOption { offset });
        }

        if let Some(offset) = raw.find("::") {
            return Err(InvalidOptionString::OptionalValue { offset });
        }

        Ok(Self { raw })
    }

    /// The option string as written.
    pub fn as_str(&self) -> &'s str {
        self.raw
    }

    /// Whether the option string starts with `:`.
    pub fn is_silent(&self) -> bool {
        self.raw.starts_with(':')
    }

    /// Look up how the option character `c` is declared.
    /// `None` means the character is unknown; `:` is never an option.
    pub fn requirement(&self, c: char) -> Option<Requirement> {
        if c == ':' {
            return None;
        }

        self.options()
            .find(|(declared, _)| *declared == c)
            .map(|(_, requirement)| requirement)
    }

    /// Iterate the declared options in order of declaration.
    pub fn options(&self) -> impl Iterator<Item = (char, Requirement)> + 's {
        let raw = self.raw;

        raw.char_indices()
            .filter(|(_, c)| *c != ':')
            .map(move |(index, c)| {
                if raw[index + c.len_utf8()..].starts_with(':') {
                    (c, Requirement::Value)
                } else {
                    (c, Requirement::Switch)
                }
            })
    }
}

impl<'s> TryFrom<&'s str> for OptionString<'s> {
    type Error = InvalidOptionString;

    fn try_from(value: &'s str) -> Result<Self, Self::Error> {
        OptionString::parse(value)
    }
}

impl std::fmt::Display for OptionString<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
