//! File-qualified names
//!
//! Every identifier is qualified by the file (program) that declares
//! it. Two names are only equal if both the file and the text agree,
//! which is what keeps the variables of an inlined macro apart from
//! the variables of its caller.
use std::fmt;
use std::fmt::Display;

/// An identifier together with the file that declares it
///
/// Ordering is by file and then by text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    file: String,
    text: String,
}

impl Name {
    pub fn new<F: AsRef<str>, T: AsRef<str>>(file: F, text: T) -> Self {
        Name {
            file: file.as_ref().to_string(),
            text: text.as_ref().to_string(),
        }
    }

    /// The file that declares the name
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The identifier text as written
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if the name was declared by `file`
    pub fn declared_in(&self, file: &str) -> bool {
        self.file == file
    }

    /// A name in `file` which no parsed identifier can ever equal
    ///
    /// Identifiers cannot contain `+` so reserved names start with
    /// one.
    pub fn reserved<F: AsRef<str>>(file: F, text: &str) -> Self {
        Name::new(file, format!("+{}", text))
    }

    /// True for names minted by `reserved`
    pub fn is_reserved(&self) -> bool {
        self.text.starts_with('+')
    }
}

/// The bare identifier text; program text qualifies names declared
/// by other files
impl Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
