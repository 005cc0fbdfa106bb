use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::culture::stop_words::ENGLISH_STOP_WORDS;
use crate::culture::tfidf::{cosine, SparseVector, TfidfVectorizer};
use crate::errors::InitError;

/// Negators stay in the vocabulary; culture text polarity depends on them.
const KEPT_NEGATORS: [&str; 2] = ["no", "not"];
const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompanyProfile {
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Industry", default)]
    pub industry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CultureMatch {
    pub company_name: String,
    pub similarity_score: f64,
    pub culture_description: String,
    pub location: String,
    pub industry: String,
}

/// Company corpus and its fitted vector space. Immutable after construction.
pub struct CultureMatcher {
    profiles: Vec<CompanyProfile>,
    vectors: Vec<SparseVector>,
    vectorizer: TfidfVectorizer,
}

impl CultureMatcher {
    pub fn new(profiles: Vec<CompanyProfile>) -> Result<Self, InitError> {
        if profiles.is_empty() {
            return Err(InitError::Empty("culture corpus".to_string()));
        }

        let stop_words = ENGLISH_STOP_WORDS
            .iter()
            .filter(|w| !KEPT_NEGATORS.contains(*w));
        let mut vectorizer = TfidfVectorizer::new(stop_words);
        let texts: Vec<&str> = profiles.iter().map(|p| p.text.as_str()).collect();
        let vectors = vectorizer.fit_transform(&texts);
        if vectorizer.vocabulary_size() == 0 {
            return Err(InitError::Empty("culture vocabulary".to_string()));
        }

        info!(
            "Culture matcher fitted over {} companies ({} terms)",
            profiles.len(),
            vectorizer.vocabulary_size()
        );
        Ok(Self {
            profiles,
            vectors,
            vectorizer,
        })
    }

    pub fn load(path: &Path) -> Result<Self, InitError> {
        let file = File::open(path).map_err(|source| InitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(read_profiles(file, path)?)
    }

    /// Top `top_n` companies by cosine similarity, highest first.
    /// Equal scores keep corpus order.
    pub fn rank(&self, preferences: &str, top_n: usize) -> Vec<CultureMatch> {
        let query = self.vectorizer.transform(preferences);
        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, cosine(&query, v)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .take(top_n)
            .map(|(i, score)| {
                let profile = &self.profiles[i];
                CultureMatch {
                    company_name: profile.company_name.clone(),
                    similarity_score: score,
                    culture_description: profile.text.clone(),
                    location: or_not_specified(profile.location.as_deref()),
                    industry: or_not_specified(profile.industry.as_deref()),
                }
            })
            .collect()
    }

    pub fn company_count(&self) -> usize {
        self.profiles.len()
    }
}

fn or_not_specified(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// Parses company profiles from CSV; `origin` is only used in errors.
pub fn read_profiles<R: Read>(reader: R, origin: &Path) -> Result<Vec<CompanyProfile>, InitError> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<CompanyProfile>, _>>()
        .map_err(|source| InitError::Csv {
            path: origin.to_path_buf(),
            source,
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const CULTURE_CSV: &str = "\
Company Name,Text,Location,Industry
Acme Labs,Remote first team with flexible hours and async collaboration,Berlin,Software
Globex,Fast paced office culture with long hours and strict hierarchy,,Finance
Initech,Not remote. No flexible hours. Formal dress code,Austin,
Umbrella,Innovation driven research culture with mentorship and learning budget,Tokyo,Biotech
";

    pub(crate) fn fixture_matcher() -> CultureMatcher {
        let profiles = read_profiles(CULTURE_CSV.as_bytes(), Path::new("fixture")).unwrap();
        CultureMatcher::new(profiles).unwrap()
    }

    #[test]
    fn test_reads_optional_columns() {
        let profiles = read_profiles(CULTURE_CSV.as_bytes(), Path::new("fixture")).unwrap();
        assert_eq!(profiles.len(), 4);
        assert_eq!(profiles[1].location, None);
        assert_eq!(profiles[0].location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_columns_without_metadata() {
        let csv = "Company Name,Text\nSolo,Small friendly team\n";
        let matcher = CultureMatcher::new(read_profiles(csv.as_bytes(), Path::new("x")).unwrap())
            .unwrap();
        let ranked = matcher.rank("friendly", 5);
        assert_eq!(ranked[0].location, "Not specified");
        assert_eq!(ranked[0].industry, "Not specified");
    }

    #[test]
    fn test_self_similarity_ranks_first() {
        let matcher = fixture_matcher();
        for profile in &matcher.profiles {
            let ranked = matcher.rank(&profile.text, matcher.company_count());
            assert_eq!(ranked[0].company_name, profile.company_name);
            assert!((ranked[0].similarity_score - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_company_count_matches_corpus() {
        assert_eq!(fixture_matcher().company_count(), 4);
    }

    #[test]
    fn test_top_n_limits_results() {
        let matcher = fixture_matcher();
        assert_eq!(matcher.rank("remote flexible", 2).len(), 2);
        assert_eq!(matcher.rank("remote flexible", 10).len(), 4);
    }

    #[test]
    fn test_missing_metadata_renders_not_specified() {
        let matcher = fixture_matcher();
        let ranked = matcher.rank("strict hierarchy", 1);
        assert_eq!(ranked[0].company_name, "Globex");
        assert_eq!(ranked[0].location, "Not specified");
        assert_eq!(ranked[0].industry, "Finance");
    }

    #[test]
    fn test_negators_are_kept() {
        let matcher = fixture_matcher();
        let ranked = matcher.rank("not", 1);
        assert_eq!(ranked[0].company_name, "Initech");
        assert!(ranked[0].similarity_score > 0.0);
    }

    #[test]
    fn test_unknown_terms_keep_corpus_order() {
        let matcher = fixture_matcher();
        let ranked = matcher.rank("zzzz qqqq", 4);
        let names: Vec<&str> = ranked.iter().map(|m| m.company_name.as_str()).collect();
        assert_eq!(names, ["Acme Labs", "Globex", "Initech", "Umbrella"]);
        assert!(ranked.iter().all(|m| m.similarity_score == 0.0));
    }

    #[test]
    fn test_empty_corpus_fails_at_init() {
        let err = CultureMatcher::new(Vec::new()).err().unwrap();
        assert!(matches!(err, InitError::Empty(_)));
    }

    #[test]
    fn test_missing_file_fails_at_init() {
        let err = CultureMatcher::load(Path::new("/nonexistent/culture.csv")).err().unwrap();
        assert!(matches!(err, InitError::Io { .. }));
    }
}
