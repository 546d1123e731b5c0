//! Static reference tables: genders, cultures, name pools, and domains.
//!
//! The generic culture keys its first names by gender. Every other culture
//! has one first-name list shared by all genders, so the requested gender is
//! recorded but does not influence name selection there.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogueError, InputError};
use crate::validation::validate_choice;

const DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
];

const GENERIC_MALE: &[&str] = &[
    "James",
    "Michael",
    "William",
    "David",
    "John",
    "Robert",
    "Thomas",
    "Charles",
    "Christopher",
    "Daniel",
];
const GENERIC_FEMALE: &[&str] = &[
    "Mary",
    "Patricia",
    "Jennifer",
    "Linda",
    "Elizabeth",
    "Barbara",
    "Susan",
    "Jessica",
    "Sarah",
    "Karen",
];
const GENERIC_NEUTRAL: &[&str] = &[
    "Alex", "Taylor", "Jordan", "Casey", "Riley", "Morgan", "Avery", "Skyler", "Quinn", "Peyton",
];
const GENERIC_LAST: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

const IRISH_FIRST: &[&str] = &["Sean", "Liam", "Siobhan", "Maeve"];
const IRISH_LAST: &[&str] = &["O'Connor", "Murphy", "Kelly", "Ryan"];
const ITALIAN_FIRST: &[&str] = &["Giovanni", "Sofia", "Marco", "Giulia"];
const ITALIAN_LAST: &[&str] = &["Rossi", "Russo", "Ferrari", "Esposito"];
const JAPANESE_FIRST: &[&str] = &["Hiroshi", "Yuki", "Sakura", "Aiko"];
const JAPANESE_LAST: &[&str] = &["Sato", "Suzuki", "Takahashi", "Tanaka"];
const INDIAN_FIRST: &[&str] = &["Arjun", "Priya", "Rahul", "Anika"];
const INDIAN_LAST: &[&str] = &["Patel", "Sharma", "Kumar", "Singh"];

/// Gender a generated address is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male first names.
    Male,
    /// Female first names.
    Female,
    /// Gender-neutral first names.
    Neutral,
}

impl Gender {
    /// Every gender, in prompt order.
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Neutral];

    /// Lowercase keys accepted at the prompt, in prompt order.
    pub const KEYS: [&'static str; 3] = ["male", "female", "neutral"];

    /// Returns the lowercase key stored in history records.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Neutral => "neutral",
        }
    }

    /// Returns the capitalised label shown in menu output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Gender {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = validate_choice(value, &Self::KEYS)?;
        Self::ALL
            .into_iter()
            .find(|gender| gender.key() == key)
            .ok_or_else(|| InputError::InvalidChoice {
                value: value.to_owned(),
                allowed: Self::KEYS.join(", "),
            })
    }
}

/// Named grouping of first and last name pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Culture {
    /// English-language names with gendered first-name pools.
    Generic,
    /// Irish names.
    Irish,
    /// Italian names.
    Italian,
    /// Japanese names.
    Japanese,
    /// Indian names.
    Indian,
}

impl Culture {
    /// Every culture, in prompt order.
    pub const ALL: [Self; 5] = [
        Self::Generic,
        Self::Irish,
        Self::Italian,
        Self::Japanese,
        Self::Indian,
    ];

    /// Lowercase keys accepted at the prompt, in prompt order.
    pub const KEYS: [&'static str; 5] = ["generic", "irish", "italian", "japanese", "indian"];

    /// Returns the lowercase key stored in history records.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Irish => "irish",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Indian => "indian",
        }
    }

    /// Returns the capitalised label shown in menu output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::Irish => "Irish",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
            Self::Indian => "Indian",
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Culture {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = validate_choice(value, &Self::KEYS)?;
        Self::ALL
            .into_iter()
            .find(|culture| culture.key() == key)
            .ok_or_else(|| InputError::InvalidChoice {
                value: value.to_owned(),
                allowed: Self::KEYS.join(", "),
            })
    }
}

/// A non-empty list of names or domains to pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    head: &'static str,
    entries: &'static [&'static str],
}

impl Pool {
    /// Wraps `entries`, rejecting an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::EmptyPool`] naming `pool` when `entries` is
    /// empty.
    pub fn new(pool: &str, entries: &'static [&'static str]) -> Result<Self, CatalogueError> {
        let (&head, _) = entries
            .split_first()
            .ok_or_else(|| CatalogueError::EmptyPool {
                pool: pool.to_owned(),
            })?;
        Ok(Self { head, entries })
    }

    /// Returns every entry in table order.
    #[must_use]
    pub const fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    /// Picks one entry uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        // `head` only backs the impossible empty case.
        self.entries.choose(rng).copied().unwrap_or(self.head)
    }
}

/// Where a culture's first names come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstNames {
    /// Separate pools per gender.
    ByGender {
        /// Male first names.
        male: Pool,
        /// Female first names.
        female: Pool,
        /// Gender-neutral first names.
        neutral: Pool,
    },
    /// One pool used for every gender.
    Shared(Pool),
}

impl FirstNames {
    /// Resolves the pool used for `gender`.
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> &Pool {
        match self {
            Self::ByGender {
                male,
                female,
                neutral,
            } => match gender {
                Gender::Male => male,
                Gender::Female => female,
                Gender::Neutral => neutral,
            },
            Self::Shared(pool) => pool,
        }
    }
}

/// First- and last-name pools of a single culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CultureNames {
    first: FirstNames,
    last: Pool,
}

impl CultureNames {
    /// Returns the first-name source.
    #[must_use]
    pub const fn first(&self) -> &FirstNames {
        &self.first
    }

    /// Returns the last-name pool.
    #[must_use]
    pub const fn last(&self) -> &Pool {
        &self.last
    }
}

/// Validated reference tables used for generation.
///
/// # Example
///
/// ```
/// use email_generator::{Culture, Gender, NameCatalogue};
///
/// let catalogue = NameCatalogue::builtin().expect("built-in tables are valid");
/// let pool = catalogue.culture(Culture::Generic).first().for_gender(Gender::Female);
/// assert!(pool.entries().contains(&"Mary"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCatalogue {
    domains: Pool,
    generic: CultureNames,
    irish: CultureNames,
    italian: CultureNames,
    japanese: CultureNames,
    indian: CultureNames,
}

impl NameCatalogue {
    /// Builds the built-in tables, checking that every pool is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::EmptyPool`] if any table has no entries.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Ok(Self {
            domains: Pool::new("domains", DOMAINS)?,
            generic: CultureNames {
                first: FirstNames::ByGender {
                    male: Pool::new("generic/male first names", GENERIC_MALE)?,
                    female: Pool::new("generic/female first names", GENERIC_FEMALE)?,
                    neutral: Pool::new("generic/neutral first names", GENERIC_NEUTRAL)?,
                },
                last: Pool::new("generic last names", GENERIC_LAST)?,
            },
            irish: shared("irish", IRISH_FIRST, IRISH_LAST)?,
            italian: shared("italian", ITALIAN_FIRST, ITALIAN_LAST)?,
            japanese: shared("japanese", JAPANESE_FIRST, JAPANESE_LAST)?,
            indian: shared("indian", INDIAN_FIRST, INDIAN_LAST)?,
        })
    }

    /// Returns the email domain pool.
    #[must_use]
    pub const fn domains(&self) -> &Pool {
        &self.domains
    }

    /// Returns the name pools for `culture`.
    #[must_use]
    pub const fn culture(&self, culture: Culture) -> &CultureNames {
        match culture {
            Culture::Generic => &self.generic,
            Culture::Irish => &self.irish,
            Culture::Italian => &self.italian,
            Culture::Japanese => &self.japanese,
            Culture::Indian => &self.indian,
        }
    }
}

fn shared(
    culture: &str,
    first: &'static [&'static str],
    last: &'static [&'static str],
) -> Result<CultureNames, CatalogueError> {
    Ok(CultureNames {
        first: FirstNames::Shared(Pool::new(&format!("{culture} first names"), first)?),
        last: Pool::new(&format!("{culture} last names"), last)?,
    })
}
