//! Random email synthesis over the name catalogue.
//!
//! Each address picks a first name, last name, domain, and template
//! independently and uniformly at random. Seeding the generator makes the
//! sequence of addresses reproducible; timestamps come from the injected
//! clock.

use std::sync::Arc;

use mockable::Clock;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::catalogue::{Culture, Gender, NameCatalogue};
use crate::error::HistoryError;
use crate::history::HistoryStore;
use crate::record::EmailRecord;
use crate::template::{EmailFormat, EmailParts, RANDOM_NUM_MAX, RANDOM_NUM_MIN};

/// Produces synthetic addresses and records them in a [`HistoryStore`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use email_generator::{Culture, EmailGenerator, Gender, NameCatalogue};
/// use mockable::DefaultClock;
///
/// let catalogue = NameCatalogue::builtin().expect("valid tables");
/// let mut generator = EmailGenerator::with_seed(catalogue, Arc::new(DefaultClock), 42);
/// let email = generator.generate_email(Gender::Female, Culture::Generic);
///
/// assert!(email.contains('@'));
/// ```
pub struct EmailGenerator {
    catalogue: NameCatalogue,
    clock: Arc<dyn Clock>,
    rng: ChaCha8Rng,
}

impl EmailGenerator {
    /// Creates a generator seeded from the thread RNG.
    #[must_use]
    pub fn new(catalogue: NameCatalogue, clock: Arc<dyn Clock>) -> Self {
        Self::with_seed(catalogue, clock, rand::rng().random())
    }

    /// Creates a generator whose address sequence is fixed by `seed`.
    #[must_use]
    pub fn with_seed(catalogue: NameCatalogue, clock: Arc<dyn Clock>, seed: u64) -> Self {
        Self {
            catalogue,
            clock,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the reference tables in use.
    #[must_use]
    pub const fn catalogue(&self) -> &NameCatalogue {
        &self.catalogue
    }

    /// Synthesises one address for `gender` and `culture`.
    ///
    /// Only the generic culture distinguishes genders when choosing a first
    /// name. Addresses are neither unique nor real.
    pub fn generate_email(&mut self, gender: Gender, culture: Culture) -> String {
        let names = self.catalogue.culture(culture);
        let first = names.first().for_gender(gender).pick(&mut self.rng);
        let last = names.last().pick(&mut self.rng);
        let domain = self.catalogue.domains().pick(&mut self.rng);
        let format = EmailFormat::pick(&mut self.rng);
        debug!(%format, %culture, "template chosen");

        let random_num = format
            .uses_random_num()
            .then(|| self.rng.random_range(RANDOM_NUM_MIN..=RANDOM_NUM_MAX));
        let initial = if format.uses_initial() {
            first.chars().next().and_then(|c| c.to_lowercase().next())
        } else {
            None
        };

        format.render(&EmailParts {
            first,
            last,
            domain,
            initial,
            random_num,
        })
    }

    /// Generates `count` records, appending and persisting each one before
    /// generating the next.
    ///
    /// Returns the records produced by this call, in generation order.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] as soon as persisting a record fails; records
    /// already appended stay in the store.
    pub fn generate_multiple(
        &mut self,
        store: &mut HistoryStore,
        count: usize,
        gender: Gender,
        culture: Culture,
    ) -> Result<Vec<EmailRecord>, HistoryError> {
        let mut generated = Vec::with_capacity(count);
        for _ in 0..count {
            let email = self.generate_email(gender, culture);
            let record = EmailRecord::new(email, gender, culture, &self.clock.local());
            store.append(record.clone())?;
            generated.push(record);
        }
        info!(count, %gender, %culture, "emails generated");
        Ok(generated)
    }
}
