use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Skills found in one document, grouped by taxonomy category.
///
/// Serialized as a JSON object whose keys keep insertion order, so the
/// taxonomy's declaration order survives into the response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedSkills(Vec<(String, Vec<String>)>);

impl CategorizedSkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a category. Empty skill lists are dropped so that a category
    /// without matches never appears as a key.
    pub fn push(&mut self, category: impl Into<String>, skills: Vec<String>) {
        if !skills.is_empty() {
            self.0.push((category.into(), skills));
        }
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, skills)| skills.as_slice())
    }

    #[cfg(test)]
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    /// All skills across categories, in category order.
    pub fn flatten(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .flat_map(|(_, skills)| skills.iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for CategorizedSkills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, skills) in &self.0 {
            map.serialize_entry(category, skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategorizedSkills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategorizedVisitor;

        impl<'de> Visitor<'de> for CategorizedVisitor {
            type Value = CategorizedSkills;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to skill lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut skills = CategorizedSkills::new();
                while let Some((category, list)) = access.next_entry::<String, Vec<String>>()? {
                    skills.push(category, list);
                }
                Ok(skills)
            }
        }

        deserializer.deserialize_map(CategorizedVisitor)
    }
}

/// Result of comparing a candidate's skills against a role's requirements.
///
/// Every required skill lands in exactly one of `matched_skills` or
/// `missing_skills`, both in the requirement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}
