use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    amount::validate_amount,
    corpus::WordCorpus,
    error::Result,
    generator::PhraseSource,
    random::{RandSource, TimeSeededRandom},
};

/// A lock-based phrase generator suitable for multi-threaded environments.
///
/// The corpus is shared read-only. The two pieces of mutable state are each
/// guarded on their own:
///
/// - the default amount sits behind an [`RwLock`], so concurrent `speak`
///   calls only ever take a shared read;
/// - the random source sits behind a [`Mutex`] that is held for a single
///   index draw, never while strings are copied or joined.
///
/// No lock is held across a whole phrase, so concurrent callers interleave
/// their draws instead of queueing behind each other.
///
/// ## See Also
/// - [`PhraseSource`]
/// - [`TimeSeededRandom`]
pub struct PhraseGenerator<R = TimeSeededRandom>
where
    R: RandSource,
{
    corpus: Arc<WordCorpus>,
    amount: RwLock<usize>,
    #[cfg(feature = "cache-padded")]
    rng: crossbeam_utils::CachePadded<Mutex<R>>,
    #[cfg(not(feature = "cache-padded"))]
    rng: Mutex<R>,
}

impl PhraseGenerator {
    /// Creates a generator over the embedded wordlist with a time-seeded
    /// random source.
    ///
    /// # Errors
    /// - [`InvalidAmount`] if `default_amount` is outside
    ///   [`MIN_AMOUNT`]..=[`MAX_AMOUNT`]
    /// - [`ResourceError`] if the wordlist cannot be loaded
    ///
    /// # Example
    /// ```
    /// use godsays::PhraseGenerator;
    ///
    /// let generator = PhraseGenerator::new(3).unwrap();
    /// assert!(!generator.speak().is_empty());
    /// ```
    ///
    /// [`InvalidAmount`]: crate::InvalidAmount
    /// [`ResourceError`]: crate::ResourceError
    /// [`MIN_AMOUNT`]: crate::MIN_AMOUNT
    /// [`MAX_AMOUNT`]: crate::MAX_AMOUNT
    pub fn new(default_amount: i64) -> Result<Self> {
        let amount = validate_amount(default_amount)?;
        let corpus = WordCorpus::load()?;
        Ok(Self::from_parts(
            Arc::new(corpus),
            amount,
            TimeSeededRandom::new(),
        ))
    }

    /// Creates a generator over an already loaded corpus.
    ///
    /// Use this to share one corpus between several generators.
    ///
    /// # Errors
    /// Returns [`InvalidAmount`](crate::InvalidAmount) if `default_amount` is
    /// out of range.
    pub fn with_corpus(corpus: Arc<WordCorpus>, default_amount: i64) -> Result<Self> {
        let amount = validate_amount(default_amount)?;
        Ok(Self::from_parts(corpus, amount, TimeSeededRandom::new()))
    }
}

impl<R> PhraseGenerator<R>
where
    R: RandSource,
{
    /// Creates a generator with an explicit random source.
    ///
    /// # Errors
    /// Returns [`InvalidAmount`](crate::InvalidAmount) if `default_amount` is
    /// out of range.
    pub fn with_rng(corpus: Arc<WordCorpus>, default_amount: i64, rng: R) -> Result<Self> {
        let amount = validate_amount(default_amount)?;
        Ok(Self::from_parts(corpus, amount, rng))
    }

    fn from_parts(corpus: Arc<WordCorpus>, amount: usize, rng: R) -> Self {
        Self {
            corpus,
            amount: RwLock::new(amount),
            #[cfg(feature = "cache-padded")]
            rng: crossbeam_utils::CachePadded::new(Mutex::new(rng)),
            #[cfg(not(feature = "cache-padded"))]
            rng: Mutex::new(rng),
        }
    }

    /// The corpus phrases are drawn from.
    pub fn corpus(&self) -> &Arc<WordCorpus> {
        &self.corpus
    }

    /// Produces a phrase using the stored default amount.
    ///
    /// Returns an empty string if the corpus is empty.
    pub fn speak(&self) -> String {
        if self.corpus.is_empty() {
            return String::new();
        }
        let amount = *self.amount.read();
        self.generate(amount)
    }

    /// Produces a phrase of `amount` entries. The stored default is not
    /// modified.
    ///
    /// # Errors
    /// Returns [`InvalidAmount`](crate::InvalidAmount) if `amount` is out of
    /// range.
    pub fn speak_with_amount(&self, amount: i64) -> Result<String> {
        let amount = validate_amount(amount)?;
        if self.corpus.is_empty() {
            return Ok(String::new());
        }
        Ok(self.generate(amount))
    }

    /// Replaces the stored default amount.
    ///
    /// # Errors
    /// Returns [`InvalidAmount`](crate::InvalidAmount) if `amount` is out of
    /// range, in which case the stored value is unchanged.
    pub fn set_amount(&self, amount: i64) -> Result<()> {
        let amount = validate_amount(amount)?;
        *self.amount.write() = amount;
        Ok(())
    }

    /// Returns the stored default amount.
    pub fn amount(&self) -> usize {
        *self.amount.read()
    }

    /// Returns the number of corpus entries.
    pub fn words_count(&self) -> usize {
        self.corpus.len()
    }

    /// Draws `amount` entries with replacement and joins them with single
    /// spaces in draw order.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn generate(&self, amount: usize) -> String {
        let upper = self.corpus.len();
        let mut selected = Vec::with_capacity(amount);
        for _ in 0..amount {
            // Only the draw is serialized; the lookup below runs unlocked.
            let index = self.rng.lock().rand_index(upper);
            if let Some(entry) = self.corpus.get(index) {
                selected.push(entry);
            }
        }
        selected.join(" ")
    }
}

impl<R> PhraseSource for PhraseGenerator<R>
where
    R: RandSource + Send,
{
    fn speak(&self) -> String {
        self.speak()
    }

    fn speak_with_amount(&self, amount: i64) -> Result<String> {
        self.speak_with_amount(amount)
    }

    fn set_amount(&self, amount: i64) -> Result<()> {
        self.set_amount(amount)
    }

    fn amount(&self) -> usize {
        self.amount()
    }

    fn words_count(&self) -> usize {
        self.words_count()
    }
}
