//! Question catalog
//!
//! Static, validated question sets per topic. A [`QuestionSet`] can only be
//! built from questions that satisfy the option/answer invariants, so the
//! quiz session never has to re-check them.

mod javascript;
mod react;
pub mod resources;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use resources::TopicResources;

/// Topics a quiz can be taken on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    #[default]
    JavaScript,
    React,
}

impl Topic {
    /// Stable key used on the command line and in config
    pub fn key(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::React => "react",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::React => "React",
        }
    }

    /// Parse a topic key (case-insensitive, with short aliases)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "javascript" | "js" => Some(Self::JavaScript),
            "react" | "jsx" => Some(Self::React),
            _ => None,
        }
    }

    /// All topics in display order
    pub fn all() -> &'static [Topic] {
        &[Self::JavaScript, Self::React]
    }

    /// The topic after this one, wrapping around
    pub fn next(&self) -> Self {
        let all = Self::all();
        let pos = all.iter().position(|t| t == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown topic: {}. Options: javascript, react", s))
    }
}

/// Question difficulty. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Prompt, may contain a fenced code sample
    pub text: String,
    /// Answer options in display order
    pub options: Vec<String>,
    /// Index of the correct option
    pub correct_index: usize,
    /// Short label sent to the explanation provider
    pub concept: String,
    /// Canned explanation shown after answering
    pub explanation: String,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: &[&str],
        correct_index: usize,
        concept: impl Into<String>,
        explanation: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
            concept: concept.into(),
            explanation: explanation.into(),
            difficulty,
        }
    }

    /// Whether `index` is the correct option
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    /// Letter label for an option index (A, B, C, ...)
    pub fn option_label(index: usize) -> char {
        u8::try_from(index).ok().filter(|i| *i < 26).map(|i| (b'A' + i) as char).unwrap_or('?')
    }
}

/// Violations of the catalog invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("question set for {0} is empty")]
    Empty(Topic),

    #[error("question {question} has {count} option(s), at least 2 required")]
    TooFewOptions { question: usize, count: usize },

    #[error("question {question} marks option {correct_index} correct but has only {options} options")]
    CorrectIndexOutOfRange { question: usize, correct_index: usize, options: usize },
}

/// Ordered, validated questions for one topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    topic: Topic,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a question set, rejecting any question that breaks the invariants
    pub fn new(topic: Topic, questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty(topic));
        }

        for (i, q) in questions.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(CatalogError::TooFewOptions { question: i, count: q.options.len() });
            }
            if q.correct_index >= q.options.len() {
                return Err(CatalogError::CorrectIndexOutOfRange {
                    question: i,
                    correct_index: q.correct_index,
                    options: q.options.len(),
                });
            }
        }

        Ok(Self { topic, questions })
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

/// The built-in question sets, one per topic
#[derive(Debug, Clone)]
pub struct Catalog {
    javascript: Arc<QuestionSet>,
    react: Arc<QuestionSet>,
}

impl Catalog {
    /// Load and validate the built-in questions
    pub fn builtin() -> Result<Self, CatalogError> {
        let javascript = QuestionSet::new(Topic::JavaScript, javascript::questions())?;
        let react = QuestionSet::new(Topic::React, react::questions())?;
        tracing::debug!(
            javascript = javascript.len(),
            react = react.len(),
            "Loaded question catalog"
        );
        Ok(Self { javascript: Arc::new(javascript), react: Arc::new(react) })
    }

    /// Question set for a topic
    pub fn question_set(&self, topic: Topic) -> Arc<QuestionSet> {
        match topic {
            Topic::JavaScript => Arc::clone(&self.javascript),
            Topic::React => Arc::clone(&self.react),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn question(options: &[&str], correct: usize) -> Question {
        Question::new("Q?", options, correct, "concept", "because", Difficulty::Beginner)
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        for topic in Topic::all() {
            let set = catalog.question_set(*topic);
            assert_eq!(set.topic(), *topic);
            assert!(!set.is_empty());
            for q in set.iter() {
                assert!(q.options.len() >= 2);
                assert!(q.correct_index < q.options.len());
                assert!(!q.concept.is_empty());
            }
        }
    }

    #[test]
    fn builtin_sets_have_ten_questions() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.question_set(Topic::JavaScript).len(), 10);
        assert_eq!(catalog.question_set(Topic::React).len(), 10);
    }

    #[test]
    fn first_javascript_question_answer_is_b() {
        let catalog = Catalog::builtin().unwrap();
        let set = catalog.question_set(Topic::JavaScript);
        assert_eq!(set.get(0).unwrap().correct_index, 1);
    }

    #[test]
    fn rejects_empty_set() {
        assert_eq!(QuestionSet::new(Topic::React, vec![]), Err(CatalogError::Empty(Topic::React)));
    }

    #[test]
    fn rejects_single_option() {
        let err = QuestionSet::new(Topic::JavaScript, vec![question(&["a", "b"], 0), question(&["only"], 0)])
            .unwrap_err();
        assert_eq!(err, CatalogError::TooFewOptions { question: 1, count: 1 });
    }

    #[test]
    fn rejects_correct_index_out_of_range() {
        let err = QuestionSet::new(Topic::JavaScript, vec![question(&["a", "b", "c"], 3)]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::CorrectIndexOutOfRange { question: 0, correct_index: 3, options: 3 }
        );
    }

    #[test]
    fn accepts_three_option_question() {
        let set = QuestionSet::new(Topic::React, vec![question(&["a", "b", "c"], 1)]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn topic_parse_aliases() {
        assert_eq!(Topic::parse("javascript"), Some(Topic::JavaScript));
        assert_eq!(Topic::parse("JS"), Some(Topic::JavaScript));
        assert_eq!(Topic::parse("React"), Some(Topic::React));
        assert_eq!(Topic::parse(" jsx "), Some(Topic::React));
        assert_eq!(Topic::parse("rust"), None);
    }

    #[test]
    fn topic_next_wraps() {
        assert_eq!(Topic::JavaScript.next(), Topic::React);
        assert_eq!(Topic::React.next(), Topic::JavaScript);
    }

    #[test]
    fn topic_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Topic::React).unwrap(), "\"react\"");
        let t: Topic = serde_json::from_str("\"javascript\"").unwrap();
        assert_eq!(t, Topic::JavaScript);
    }

    #[test]
    fn option_labels() {
        assert_eq!(Question::option_label(0), 'A');
        assert_eq!(Question::option_label(3), 'D');
        assert_eq!(Question::option_label(30), '?');
    }
}
