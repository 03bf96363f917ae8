//! Learning resources per topic

use super::Topic;

/// External links and quick tips for a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicResources {
    pub title: &'static str,
    pub video_url: &'static str,
    pub docs_url: &'static str,
    pub tips: [&'static str; 3],
}

const JAVASCRIPT: TopicResources = TopicResources {
    title: "JavaScript Resources",
    video_url: "https://www.youtube.com/watch?v=lfmg-EJ8gm4",
    docs_url: "https://devdocs.io/javascript/",
    tips: [
        "Use const by default, let when needed, avoid var",
        "Learn async/await for better async code handling",
        "Master array methods like map, filter, and reduce",
    ],
};

const REACT: TopicResources = TopicResources {
    title: "React Resources",
    video_url: "https://www.youtube.com/watch?v=CgkZ7MvWUAA",
    docs_url: "https://devdocs.io/react/",
    tips: [
        "Keep components small and focused",
        "Use hooks for state and side effects",
        "Understand the component lifecycle",
    ],
};

/// Which resource link to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLink {
    Video,
    Docs,
}

impl ResourceLink {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "video" | "v" | "tutorial" => Some(Self::Video),
            "docs" | "d" | "documentation" => Some(Self::Docs),
            _ => None,
        }
    }
}

impl Topic {
    pub fn resources(&self) -> &'static TopicResources {
        match self {
            Self::JavaScript => &JAVASCRIPT,
            Self::React => &REACT,
        }
    }
}

impl TopicResources {
    pub fn link(&self, which: ResourceLink) -> &'static str {
        match which {
            ResourceLink::Video => self.video_url,
            ResourceLink::Docs => self.docs_url,
        }
    }
}
