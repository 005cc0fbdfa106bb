//! Career transition recommendations backed by the trained Q-table.

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::career::dataset::TransitionRecord;
use crate::career::domains::domain_of;
use crate::career::encoder::LabelEncoder;
use crate::career::qlearning::{train, EncodedTransition, QTable, TrainingParams};
use crate::errors::{AppError, InitError};

const DEFAULT_EDUCATION: &str = "Bachelors";
const FRESHER_ROLE: &str = "fresher";
const MAX_RECOMMENDATIONS: usize = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct CareerQuery {
    #[serde(default)]
    pub current_role: String,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub years_experience: f64,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub current_salary: f64,
}

/// Accepts `10`, `10.5` or `"10"` for numeric query fields.
fn number_or_numeric_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got '{s}'"))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub next_role: String,
    pub skills_to_learn: String,
    pub predicted_salary: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_increase: Option<f64>,
    /// Number of the user's keywords found in `skills_to_learn` (fresher path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_match: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    Recommended(Vec<Recommendation>),
    NoSuitableTransitions,
    /// The caller has no current role; the fresher path applies instead.
    UseFresherPath,
}

/// Read-only recommender built once at startup.
pub struct CareerRecommender {
    records: Vec<TransitionRecord>,
    /// Next-role code per record, parallel to `records`.
    next_codes: Vec<usize>,
    /// Domain of each record's next role, parallel to `records`.
    domains: Vec<Option<&'static str>>,
    current_roles: LabelEncoder,
    next_roles: LabelEncoder,
    education_levels: LabelEncoder,
    q_table: QTable,
}

impl CareerRecommender {
    /// Encodes the dataset and trains the Q-table. Blocks until training ends.
    pub fn train<R: Rng>(
        records: Vec<TransitionRecord>,
        params: &TrainingParams,
        rng: &mut R,
    ) -> Result<Self, InitError> {
        if records.is_empty() {
            return Err(InitError::Empty("career dataset".to_string()));
        }

        let current_roles = LabelEncoder::fit(records.iter().map(|r| r.current_role.as_str()));
        let next_roles = LabelEncoder::fit(records.iter().map(|r| r.next_role.as_str()));
        let education_levels =
            LabelEncoder::fit(records.iter().map(|r| r.education_level.as_str()));

        let mut encoded = Vec::with_capacity(records.len());
        let mut next_codes = Vec::with_capacity(records.len());
        let mut domains = Vec::with_capacity(records.len());
        for record in &records {
            let current_role = current_roles
                .encode(&record.current_role)
                .ok_or_else(|| {
                    InitError::Malformed(format!("unencodable role {}", record.current_role))
                })?;
            let next_role = next_roles
                .encode(&record.next_role)
                .ok_or_else(|| {
                    InitError::Malformed(format!("unencodable role {}", record.next_role))
                })?;
            encoded.push(EncodedTransition {
                current_role,
                next_role,
                salary_gain: record.predicted_salary - record.current_salary,
            });
            next_codes.push(next_role);
            domains.push(domain_of(&record.next_role));
        }

        let mut q_table = QTable::zeros(current_roles.len(), next_roles.len());
        train(&mut q_table, &encoded, params, rng);
        info!(
            "Trained career Q-table ({} x {}) over {} episodes",
            q_table.rows(),
            q_table.cols(),
            params.episodes
        );

        Ok(Self {
            records,
            next_codes,
            domains,
            current_roles,
            next_roles,
            education_levels,
            q_table,
        })
    }

    /// Resolves a user-supplied role: exact case-insensitive match first, then
    /// the first known role (in code order) containing the input.
    pub fn resolve_role(&self, input: &str) -> Option<&str> {
        let wanted = input.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        let classes = self.current_roles.classes();
        classes
            .iter()
            .find(|role| role.to_lowercase() == wanted)
            .or_else(|| classes.iter().find(|role| role.to_lowercase().contains(&wanted)))
            .map(String::as_str)
    }

    /// Resolves an education level, defaulting to Bachelors.
    pub fn resolve_education(&self, input: Option<&str>) -> String {
        input
            .map(|e| e.trim().to_lowercase())
            .and_then(|wanted| {
                self.education_levels
                    .classes()
                    .iter()
                    .find(|level| level.to_lowercase() == wanted)
                    .cloned()
            })
            .unwrap_or_else(|| DEFAULT_EDUCATION.to_string())
    }

    /// Ranks next roles for an experienced user by learned value.
    pub fn recommend(&self, query: &CareerQuery) -> Result<TransitionOutcome, AppError> {
        let raw_role = query.current_role.trim();
        if raw_role.is_empty() {
            return Err(AppError::Validation("current_role is required".to_string()));
        }
        if raw_role.eq_ignore_ascii_case(FRESHER_ROLE) {
            return Ok(TransitionOutcome::UseFresherPath);
        }

        let actual_role = self
            .resolve_role(raw_role)
            .ok_or_else(|| AppError::Validation("Role not recognized.".to_string()))?;
        let role_code = self
            .current_roles
            .encode(actual_role)
            .ok_or_else(|| AppError::Validation("Role not recognized.".to_string()))?;
        let education = self.resolve_education(query.education.as_deref());
        debug!(
            "Career query: role={actual_role} education={education} experience={} salary={}",
            query.years_experience, query.current_salary
        );

        let Some(user_domain) = domain_of(actual_role) else {
            return Ok(TransitionOutcome::NoSuitableTransitions);
        };

        let mut candidates: Vec<(usize, f64)> = Vec::new();
        for (action, &value) in self.q_table.row(role_code).iter().enumerate() {
            let in_domain = (0..self.records.len())
                .find(|&i| self.next_codes[i] == action && self.domains[i] == Some(user_domain));
            let Some(sample) = in_domain.map(|i| &self.records[i]) else {
                continue;
            };
            if sample.predicted_salary > query.current_salary && sample.next_role != actual_role {
                candidates.push((action, value));
            }
        }

        if candidates.is_empty() {
            return Ok(TransitionOutcome::NoSuitableTransitions);
        }

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        let recommendations = candidates
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .filter_map(|(action, _)| {
                let info = self.first_record_for(action)?;
                Some(Recommendation {
                    next_role: self.next_roles.decode(action)?.to_string(),
                    skills_to_learn: info.skills_to_learn.clone(),
                    predicted_salary: info.predicted_salary,
                    salary_increase: Some(info.predicted_salary - query.current_salary),
                    skill_match: None,
                })
            })
            .collect();

        Ok(TransitionOutcome::Recommended(recommendations))
    }

    /// Suggests next roles for users without a current role, by how many of
    /// their keywords appear in each row's `skills_to_learn`.
    pub fn recommend_for_fresher(
        &self,
        skills: &[String],
    ) -> Result<Vec<Recommendation>, AppError> {
        let keywords: Vec<String> = skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(AppError::Validation("Skills are required".to_string()));
        }

        let mut seen_roles: Vec<&str> = Vec::new();
        let mut scored: Vec<(usize, &TransitionRecord)> = Vec::new();
        for record in &self.records {
            let haystack = record.skills_to_learn.to_lowercase();
            let count = keywords.iter().filter(|k| haystack.contains(k.as_str())).count();
            if count == 0 || seen_roles.contains(&record.next_role.as_str()) {
                continue;
            }
            seen_roles.push(&record.next_role);
            scored.push((count, record));
        }

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(scored
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|(count, record)| Recommendation {
                next_role: record.next_role.clone(),
                skills_to_learn: record.skills_to_learn.clone(),
                predicted_salary: record.predicted_salary,
                salary_increase: None,
                skill_match: Some(count),
            })
            .collect())
    }

    fn first_record_for(&self, next_code: usize) -> Option<&TransitionRecord> {
        self.next_codes
            .iter()
            .position(|&code| code == next_code)
            .map(|i| &self.records[i])
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::fixtures::fixture_recommender;

    fn query(role: &str, salary: f64) -> CareerQuery {
        CareerQuery {
            current_role: role.to_string(),
            years_experience: 3.0,
            education: None,
            current_salary: salary,
        }
    }

    #[test]
    fn test_query_accepts_numeric_strings() {
        let q: CareerQuery = serde_json::from_str(
            r#"{"current_role": "Data Analyst", "years_experience": "2.5", "current_salary": 10}"#,
        )
        .unwrap();
        assert_eq!(q.years_experience, 2.5);
        assert_eq!(q.current_salary, 10.0);

        let q: CareerQuery = serde_json::from_str(r#"{"current_role": "Data Analyst"}"#).unwrap();
        assert_eq!(q.current_salary, 0.0);

        assert!(serde_json::from_str::<CareerQuery>(r#"{"current_salary": "lots"}"#).is_err());
    }

    #[test]
    fn test_resolve_role_exact_case_insensitive() {
        let rec = fixture_recommender();
        assert_eq!(rec.resolve_role("software engineer"), Some("Software Engineer"));
        assert_eq!(rec.resolve_role("  DATA ANALYST "), Some("Data Analyst"));
    }

    #[test]
    fn test_resolve_role_substring_fallback() {
        let rec = fixture_recommender();
        assert_eq!(rec.resolve_role("help desk"), Some("Help Desk Technician"));
        assert_eq!(rec.resolve_role("astronaut"), None);
    }

    #[test]
    fn test_resolve_education_defaults_to_bachelors() {
        let rec = fixture_recommender();
        assert_eq!(rec.resolve_education(Some("masters")), "Masters");
        assert_eq!(rec.resolve_education(Some("bootcamp")), "Bachelors");
        assert_eq!(rec.resolve_education(None), "Bachelors");
    }

    #[test]
    fn test_recommends_top_two_in_domain() {
        let rec = fixture_recommender();
        let outcome = rec.recommend(&query("Software Engineer", 10.0)).unwrap();
        let TransitionOutcome::Recommended(recs) = outcome else {
            panic!("expected recommendations, got {outcome:?}");
        };
        assert_eq!(recs.len(), 2);

        let mut roles: Vec<&str> = recs.iter().map(|r| r.next_role.as_str()).collect();
        roles.sort_unstable();
        assert_eq!(roles, vec!["DevOps Engineer", "Full Stack Developer"]);

        for r in &recs {
            assert!(r.predicted_salary > 10.0);
            assert_eq!(r.salary_increase, Some(r.predicted_salary - 10.0));
        }
    }

    #[test]
    fn test_never_recommends_current_role() {
        let rec = fixture_recommender();
        if let TransitionOutcome::Recommended(recs) =
            rec.recommend(&query("Software Engineer", 0.0)).unwrap()
        {
            assert!(recs.iter().all(|r| r.next_role != "Software Engineer"));
        }
    }

    #[test]
    fn test_salary_filter_yields_no_suitable_transitions() {
        let rec = fixture_recommender();
        let outcome = rec.recommend(&query("Help Desk Technician", 10.0)).unwrap();
        assert_eq!(outcome, TransitionOutcome::NoSuitableTransitions);
    }

    #[test]
    fn test_role_without_domain_yields_no_suitable_transitions() {
        let rec = fixture_recommender();
        let outcome = rec.recommend(&query("Barista", 1.0)).unwrap();
        assert_eq!(outcome, TransitionOutcome::NoSuitableTransitions);
    }

    #[test]
    fn test_unknown_role_is_validation_error() {
        let rec = fixture_recommender();
        let err = rec.recommend(&query("Astronaut", 10.0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_role_is_validation_error() {
        let rec = fixture_recommender();
        assert!(matches!(
            rec.recommend(&query("   ", 10.0)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_fresher_role_redirects() {
        let rec = fixture_recommender();
        assert_eq!(
            rec.recommend(&query("Fresher", 0.0)).unwrap(),
            TransitionOutcome::UseFresherPath
        );
    }

    #[test]
    fn test_fresher_single_keyword_match() {
        let rec = fixture_recommender();
        let recs = rec.recommend_for_fresher(&["python".to_string()]).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].next_role, "Data Scientist");
        assert_eq!(recs[0].skill_match, Some(1));
        assert_eq!(recs[0].salary_increase, None);
    }

    #[test]
    fn test_fresher_ranks_by_keyword_count() {
        let rec = fixture_recommender();
        let recs = rec
            .recommend_for_fresher(&[
                "Docker".to_string(),
                "React".to_string(),
                "kubernetes".to_string(),
            ])
            .unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].next_role, "Full Stack Developer");
        assert_eq!(recs[0].skill_match, Some(2));
        assert!(recs[1].skill_match.unwrap() <= 2);
    }

    #[test]
    fn test_fresher_requires_skills() {
        let rec = fixture_recommender();
        assert!(matches!(
            rec.recommend_for_fresher(&[]),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            rec.recommend_for_fresher(&["  ".to_string()]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_dataset_fails_fast() {
        let mut rng = rand::thread_rng();
        let result = CareerRecommender::train(Vec::new(), &TrainingParams::default(), &mut rng);
        assert!(matches!(result, Err(InitError::Empty(_))));
    }

    #[test]
    fn test_record_count() {
        assert_eq!(fixture_recommender().record_count(), 7);
    }
}
