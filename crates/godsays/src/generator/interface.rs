use crate::error::Result;

/// A thread-safe source of phrases.
///
/// This is the seam between phrase generation and its front ends (the CLI and
/// the HTTP server). [`PhraseGenerator`] is the production implementation;
/// front ends hold a `dyn PhraseSource` so they can be exercised with a stub.
///
/// [`PhraseGenerator`]: crate::PhraseGenerator
pub trait PhraseSource: Send + Sync {
    /// Produces a phrase using the stored default amount.
    fn speak(&self) -> String;

    /// Produces a phrase of exactly `amount` entries without touching the
    /// stored default.
    ///
    /// # Errors
    /// Returns [`InvalidAmount`](crate::InvalidAmount) if `amount` is out of
    /// range.
    fn speak_with_amount(&self, amount: i64) -> Result<String>;

    /// Replaces the stored default amount.
    ///
    /// # Errors
    /// Returns [`InvalidAmount`](crate::InvalidAmount) if `amount` is out of
    /// range; the stored value is left untouched.
    fn set_amount(&self, amount: i64) -> Result<()>;

    /// Returns the stored default amount.
    fn amount(&self) -> usize;

    /// Returns the number of entries phrases are drawn from.
    fn words_count(&self) -> usize;
}
