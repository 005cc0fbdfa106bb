//! Skill extraction: scans document text for taxonomy skills.

use regex::Regex;

use crate::skills::models::CategorizedSkills;

struct CompiledSkill {
    name: String,
    pattern: Regex,
}

/// Matches whole-word occurrences of taxonomy skills in free text.
///
/// Patterns are compiled once at startup; `extract` is pure and shared
/// read-only across requests.
pub struct SkillExtractor {
    categories: Vec<(String, Vec<CompiledSkill>)>,
}

impl SkillExtractor {
    pub fn new(taxonomy: &[(&str, &[&str])]) -> Result<Self, regex::Error> {
        let categories = taxonomy
            .iter()
            .map(|(category, skills)| {
                let compiled = skills
                    .iter()
                    .map(|skill| {
                        Ok(CompiledSkill {
                            name: skill.to_string(),
                            pattern: Regex::new(&skill_pattern(skill))?,
                        })
                    })
                    .collect::<Result<Vec<_>, regex::Error>>()?;
                Ok((category.to_string(), compiled))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { categories })
    }

    /// Returns the skills present in `text`, grouped by category in taxonomy
    /// order. Categories without a match are omitted.
    pub fn extract(&self, text: &str) -> CategorizedSkills {
        let mut found = CategorizedSkills::new();
        if text.trim().is_empty() {
            return found;
        }

        let text_lower = text.to_lowercase();
        for (category, skills) in &self.categories {
            let matched: Vec<String> = skills
                .iter()
                .filter(|skill| skill.pattern.is_match(&text_lower))
                .map(|skill| skill.name.clone())
                .collect();
            found.push(category.clone(), matched);
        }
        found
    }

    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|(_, skills)| skills.len()).sum()
    }
}

/// `\b` only marks a boundary next to a word character, so skills that
/// start or end with punctuation (`c++`, `c#`) are delimited by a non-word
/// character or the text edge on that side instead.
fn skill_pattern(skill: &str) -> String {
    let lower = skill.to_lowercase();
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let start = match lower.chars().next() {
        Some(c) if is_word(c) => r"\b",
        _ => r"(?:^|\W)",
    };
    let end = match lower.chars().last() {
        Some(c) if is_word(c) => r"\b",
        _ => r"(?:\W|$)",
    };
    format!("{start}{}{end}", regex::escape(&lower))
}
