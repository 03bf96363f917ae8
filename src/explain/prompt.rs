//! Prompt composition for explanation requests

use crate::catalog::Topic;

/// System prompt framing the model as a tutor
pub const SYSTEM_PROMPT: &str = "You are a patient programming tutor helping a learner who just got \
stuck on a quiz question. Be accurate and concrete, and keep code samples short.";

/// Build the user prompt asking for an explanation of `concept` in `topic`
pub fn explanation_prompt(topic: Topic, concept: &str) -> String {
    format!(
        "Explain {concept} in {topic} in a way that's easy to understand. Include:\n\
         1. Simple explanation\n\
         2. Real-world example\n\
         3. Common pitfalls to avoid\n\
         4. Best practices\n\
         Please format the response in Markdown.",
        concept = concept.trim(),
        topic = topic.display_name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_concept_and_topic() {
        let prompt = explanation_prompt(Topic::JavaScript, "generators");
        assert!(prompt.starts_with("Explain generators in JavaScript"));
    }

    #[test]
    fn prompt_asks_for_four_sections() {
        let prompt = explanation_prompt(Topic::React, "memoization hooks");
        let sections = [
            "1. Simple explanation",
            "2. Real-world example",
            "3. Common pitfalls to avoid",
            "4. Best practices",
        ];
        for section in sections {
            assert!(prompt.contains(section), "missing {section}");
        }
        assert!(prompt.ends_with("Markdown."));
    }

    #[test]
    fn prompt_trims_concept() {
        let prompt = explanation_prompt(Topic::React, "  useLayoutEffect \n");
        assert!(prompt.contains("Explain useLayoutEffect in React"));
    }
}
