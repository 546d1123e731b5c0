//! Email format templates and rendering.
//!
//! A template is a pattern with `{first}`, `{last}`, `{initial}`,
//! `{random_num}`, and `{domain}` placeholders. Rendering substitutes the
//! supplied parts and strips every whitespace character from the result.

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Lower bound of the `{random_num}` placeholder.
pub const RANDOM_NUM_MIN: u16 = 1;

/// Upper bound of the `{random_num}` placeholder.
pub const RANDOM_NUM_MAX: u16 = 999;

/// One of the fixed address layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailFormat {
    /// `{first}.{last}@{domain}`
    Dotted,
    /// `{first}{last}@{domain}`
    Joined,
    /// `{first}_{last}@{domain}`
    Underscored,
    /// `{first}{random_num}@{domain}`
    Numbered,
    /// `{initial}{last}@{domain}`
    Initialled,
}

impl EmailFormat {
    /// Every template, in table order.
    pub const ALL: [Self; 5] = [
        Self::Dotted,
        Self::Joined,
        Self::Underscored,
        Self::Numbered,
        Self::Initialled,
    ];

    /// Returns the placeholder pattern.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Dotted => "{first}.{last}@{domain}",
            Self::Joined => "{first}{last}@{domain}",
            Self::Underscored => "{first}_{last}@{domain}",
            Self::Numbered => "{first}{random_num}@{domain}",
            Self::Initialled => "{initial}{last}@{domain}",
        }
    }

    /// Returns `true` if the pattern references `{random_num}`.
    #[must_use]
    pub fn uses_random_num(self) -> bool {
        self.pattern().contains("{random_num}")
    }

    /// Returns `true` if the pattern references `{initial}`.
    #[must_use]
    pub fn uses_initial(self) -> bool {
        self.pattern().contains("{initial}")
    }

    /// Picks a template uniformly at random.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(Self::Dotted)
    }

    /// Renders the template with `parts`.
    ///
    /// First and last names are lowercased here; the initial and domain are
    /// used as given.
    ///
    /// # Example
    ///
    /// ```
    /// use email_generator::{EmailFormat, EmailParts};
    ///
    /// let parts = EmailParts {
    ///     first: "Mary",
    ///     last: "Smith",
    ///     domain: "gmail.com",
    ///     initial: None,
    ///     random_num: None,
    /// };
    /// assert_eq!(EmailFormat::Dotted.render(&parts), "mary.smith@gmail.com");
    /// ```
    #[must_use]
    pub fn render(self, parts: &EmailParts<'_>) -> String {
        let initial = parts.initial.map(String::from).unwrap_or_default();
        let random_num = parts
            .random_num
            .map(|num| num.to_string())
            .unwrap_or_default();
        self.pattern()
            .replace("{first}", &parts.first.to_lowercase())
            .replace("{last}", &parts.last.to_lowercase())
            .replace("{initial}", &initial)
            .replace("{random_num}", &random_num)
            .replace("{domain}", parts.domain)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

impl fmt::Display for EmailFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Values substituted into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailParts<'a> {
    /// First name, any case.
    pub first: &'a str,
    /// Last name, any case.
    pub last: &'a str,
    /// Domain after the `@`.
    pub domain: &'a str,
    /// Lowercase first character of the first name, when the template needs it.
    pub initial: Option<char>,
    /// Number for `{random_num}`, when the template needs it.
    pub random_num: Option<u16>,
}
