use std::collections::HashMap;

use rust_stemmers::Algorithm;

use crate::error::StemError;

/// Registration table: canonical Snowball name, ISO 639 codes, backend tag.
/// Adding a language means adding one line here.
const ALGORITHMS: &[(&str, &[&str], Algorithm)] = &[
    ("arabic", &["ar", "ara"], Algorithm::Arabic),
    ("danish", &["da", "dan"], Algorithm::Danish),
    ("dutch", &["nl", "dut", "nld"], Algorithm::Dutch),
    ("english", &["en", "eng"], Algorithm::English),
    ("finnish", &["fi", "fin"], Algorithm::Finnish),
    ("french", &["fr", "fre", "fra"], Algorithm::French),
    ("german", &["de", "ger", "deu"], Algorithm::German),
    ("greek", &["el", "ell"], Algorithm::Greek),
    ("hungarian", &["hu", "hun"], Algorithm::Hungarian),
    ("italian", &["it", "ita"], Algorithm::Italian),
    ("norwegian", &["no", "nor"], Algorithm::Norwegian),
    ("portuguese", &["pt", "por"], Algorithm::Portuguese),
    ("romanian", &["ro", "rum", "ron"], Algorithm::Romanian),
    ("russian", &["ru", "rus"], Algorithm::Russian),
    ("spanish", &["es", "esl", "spa"], Algorithm::Spanish),
    ("swedish", &["sv", "swe"], Algorithm::Swedish),
    ("tamil", &["ta", "tam"], Algorithm::Tamil),
    ("turkish", &["tr", "tur"], Algorithm::Turkish),
];

/// Read-only index over the registration table. Built once (see
/// [`global`]) and safe to share across threads afterwards.
pub struct AlgorithmRegistry {
    algorithms: HashMap<&'static str, Algorithm>,
    aliases: HashMap<&'static str, &'static str>,
}

impl AlgorithmRegistry {
    fn new() -> AlgorithmRegistry {
        let mut algorithms = HashMap::new();
        let mut aliases = HashMap::new();
        for (name, codes, algorithm) in ALGORITHMS {
            algorithms.insert(*name, *algorithm);
            for code in *codes {
                aliases.insert(*code, *name);
            }
        }
        AlgorithmRegistry { algorithms, aliases }
    }

    /// Map a canonical name or alias to its backend algorithm. Canonical
    /// names win over aliases. Returns the canonical name alongside the
    /// algorithm so callers can report what an alias resolved to.
    pub fn resolve(&self, name: &str) -> Result<(&'static str, Algorithm), StemError> {
        if let Some((canonical, algorithm)) = self.algorithms.get_key_value(name) {
            return Ok((*canonical, *algorithm));
        }
        if let Some(canonical) = self.aliases.get(name) {
            if let Some(algorithm) = self.algorithms.get(canonical) {
                debug!("algorithm alias '{}' resolved to '{}'", name, canonical);
                return Ok((*canonical, *algorithm));
            }
        }
        Err(StemError::UnknownAlgorithm {
            name: name.to_string(),
        })
    }

    /// Sorted canonical names; with `include_aliases` the ISO codes are
    /// mixed in as well.
    pub fn names(&self, include_aliases: bool) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.algorithms.keys().cloned().collect();
        if include_aliases {
            names.extend(self.aliases.keys().cloned());
        }
        names.sort();
        names
    }
}

lazy_static! {
    static ref REGISTRY: AlgorithmRegistry = AlgorithmRegistry::new();
}

/// The process-wide registry, built on first use.
pub fn global() -> &'static AlgorithmRegistry {
    &REGISTRY
}
