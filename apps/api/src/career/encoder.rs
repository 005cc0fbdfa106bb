use std::collections::HashMap;

/// Bijective string ↔ dense integer mapping.
///
/// Codes follow the sorted order of the distinct values, so the same data
/// always yields the same codes.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEncoder {
    classes: Vec<String>,
    codes: HashMap<String, usize>,
}

impl LabelEncoder {
    pub fn fit<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classes: Vec<String> = values.into_iter().map(|v| v.as_ref().to_string()).collect();
        classes.sort();
        classes.dedup();

        let codes = classes
            .iter()
            .enumerate()
            .map(|(code, class)| (class.clone(), code))
            .collect();

        Self { classes, codes }
    }

    pub fn encode(&self, value: &str) -> Option<usize> {
        self.codes.get(value).copied()
    }

    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// Known values in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}
