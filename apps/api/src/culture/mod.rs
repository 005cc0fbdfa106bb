// Company culture matching: a TF-IDF space fitted once over the company
// corpus, queried with free-text preferences.

pub mod handlers;
pub mod matcher;
pub mod stop_words;
pub mod tfidf;
