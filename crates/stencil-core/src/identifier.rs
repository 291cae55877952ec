//! Identifier management using string interning.
//!
//! Element identifiers are short literal strings repeated across element
//! tables and connection tables; interning keeps comparisons cheap and the
//! `Id` type `Copy`.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient identifier type using string interning.
///
/// # Examples
///
/// ```
/// use stencil_core::identifier::Id;
///
/// let login = Id::new("login");
/// assert_eq!(login, Id::new("login"));
/// assert_eq!(login.to_string(), "login");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a &str, interning the name.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        Self(interner.get_or_intern(name))
    }

    /// Resolves this identifier back to its string form.
    pub fn resolve(&self) -> String {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        interner
            .resolve(self.0)
            .expect("Id symbols always originate from the global interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.resolve() == *other
    }
}
