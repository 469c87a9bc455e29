use std::fmt;
use std::str;

use crate::cache::{BoundedCache, Cache};
use crate::error::StemError;
use crate::registry;

pub const DEFAULT_CACHE_SIZE: usize = 10_000;
pub const DEFAULT_KEEP_RATIO: f64 = 0.75;

/// A word (or stem) tagged with its text representation.
///
/// `Bytes` is assumed to hold UTF-8 encoded text. Stemming preserves the
/// representation: `Text` in means `Text` out, `Bytes` in means `Bytes`
/// out, and both representations of the same word share one cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Word {
    Text(String),
    Bytes(Vec<u8>),
}

impl Word {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Word::Text(text) => Some(text),
            Word::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Word::Text(text) => text.as_bytes(),
            Word::Bytes(bytes) => bytes,
        }
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Word {
        Word::Text(text.to_string())
    }
}

impl From<String> for Word {
    fn from(text: String) -> Word {
        Word::Text(text)
    }
}

impl From<&[u8]> for Word {
    fn from(bytes: &[u8]) -> Word {
        Word::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Word {
    fn from(bytes: Vec<u8>) -> Word {
        Word::Bytes(bytes)
    }
}

/// Cached front-end over one Snowball stemming algorithm.
///
/// Created for a canonical algorithm name or an ISO 639 alias. Every stem
/// request probes the cache first; misses fall through to the backend and
/// the result is memoized. Caching is transparent: output never depends on
/// the cache configuration, only throughput does.
///
/// The backend algorithms expect lowercase input; words are passed through
/// unchanged, so fold case beforehand if you need folded stems.
pub struct Stemmer {
    algorithm: &'static str,
    backend: rust_stemmers::Stemmer,
    cache: BoundedCache<String, String>,
}

impl Stemmer {
    /// Front end with the default cache (10 000 entries, keep ratio 0.75).
    pub fn new(algorithm: &str) -> Result<Stemmer, StemError> {
        Stemmer::with_cache(algorithm, DEFAULT_CACHE_SIZE, DEFAULT_KEEP_RATIO)
    }

    /// Front end with an explicit cache configuration. A `max_cache_size`
    /// of 0 disables caching. Fails before the cache is built if the
    /// algorithm name does not resolve.
    pub fn with_cache(
        algorithm: &str,
        max_cache_size: usize,
        keep_ratio: f64,
    ) -> Result<Stemmer, StemError> {
        let (canonical, tag) = registry::global().resolve(algorithm)?;
        Ok(Stemmer {
            algorithm: canonical,
            backend: rust_stemmers::Stemmer::create(tag),
            cache: BoundedCache::new(max_cache_size, keep_ratio),
        })
    }

    /// Canonical name of the resolved algorithm.
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Stem one decoded word, consulting the cache.
    pub fn stem(&mut self, word: &str) -> String {
        if let Some(stem) = self.cache.get(word) {
            return stem;
        }
        let stem = self.backend.stem(word).into_owned();
        self.cache.set(word.to_string(), stem.clone());
        stem
    }

    /// Stem one word, preserving its representation. `Bytes` input that is
    /// not valid UTF-8 is rejected, never truncated or substituted.
    pub fn stem_word(&mut self, word: Word) -> Result<Word, StemError> {
        match word {
            Word::Text(text) => Ok(Word::Text(self.stem(&text))),
            Word::Bytes(bytes) => {
                let text = str::from_utf8(&bytes).map_err(StemError::InvalidUtf8)?;
                Ok(Word::Bytes(self.stem(text).into_bytes()))
            }
        }
    }

    /// Stem a batch of words independently, preserving order and each
    /// word's representation.
    pub fn stem_words<I>(&mut self, words: I) -> Result<Vec<Word>, StemError>
    where
        I: IntoIterator<Item = Word>,
    {
        words.into_iter().map(|word| self.stem_word(word)).collect()
    }

    pub fn max_cache_size(&self) -> usize {
        self.cache.max_size()
    }

    pub fn set_max_cache_size(&mut self, max_cache_size: usize) {
        self.cache.set_max_size(max_cache_size);
    }
}

// Manual impl: the backend stemmer is not Debug.
impl fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Stemmer")
            .field("algorithm", &self.algorithm)
            .field("cache", &self.cache)
            .finish()
    }
}
