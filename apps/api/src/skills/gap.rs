//! Skill-gap analysis: candidate skills vs a role's requirements.
//!
//! Matching is bidirectional, case-insensitive substring containment so that
//! "git" satisfies "Version Control (Git)" and vice versa.

use crate::skills::models::{CategorizedSkills, SkillMatch};

/// Splits `required` into matched and missing skills for the given candidate.
///
/// `match_percentage` is `100 * matched / required`, and 0 when nothing is
/// required.
pub fn analyze_skill_match<S: AsRef<str>>(
    candidate: &CategorizedSkills,
    required: &[S],
) -> SkillMatch {
    let candidate_lower: Vec<String> = candidate.flatten().map(str::to_lowercase).collect();

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for req in required {
        let req = req.as_ref();
        let req_lower = req.to_lowercase();
        let is_match = candidate_lower
            .iter()
            .any(|c| req_lower.contains(c.as_str()) || c.contains(req_lower.as_str()));

        if is_match {
            matched_skills.push(req.to_string());
        } else {
            missing_skills.push(req.to_string());
        }
    }

    let match_percentage = if required.is_empty() {
        0.0
    } else {
        matched_skills.len() as f64 / required.len() as f64 * 100.0
    };

    SkillMatch {
        match_percentage,
        matched_skills,
        missing_skills,
    }
}
