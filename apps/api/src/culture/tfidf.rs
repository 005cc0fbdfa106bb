//! Term-frequency / inverse-document-frequency vector space.
//!
//! Documents are lower-cased and split into runs of two or more word
//! characters. IDF is smoothed (`ln((1 + n) / (1 + df)) + 1`) and every
//! vector is L2-normalized, so cosine similarity reduces to a dot product.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

/// Sparse vector: `(term index, weight)` pairs sorted by term index.
pub type SparseVector = Vec<(usize, f64)>;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"))
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stop_words: HashSet<String>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words.into_iter().map(|w| w.as_ref().to_string()).collect(),
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    fn tokenize<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        token_pattern()
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(*token))
    }

    /// Learns the vocabulary and IDF weights, returning the corpus vectors.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<SparseVector> {
        let lowered: Vec<String> = documents.iter().map(|d| d.as_ref().to_lowercase()).collect();

        // Term indices follow alphabetical order of the vocabulary.
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &lowered {
            let unique: HashSet<&str> = self.tokenize(doc).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = lowered.len() as f64;
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), index);
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
        }
        self.vocabulary = vocabulary;
        self.idf = idf;

        lowered.iter().map(|doc| self.vectorize_lowered(doc)).collect()
    }

    /// Projects `text` onto the fitted vocabulary. Unknown terms are dropped.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.vectorize_lowered(&text.to_lowercase())
    }

    fn vectorize_lowered(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in self.tokenize(text) {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut vector {
                *w /= norm;
            }
        }
        vector
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Cosine similarity of two L2-normalized sparse vectors; 0 if either is empty.
pub fn cosine(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j, mut dot) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}
