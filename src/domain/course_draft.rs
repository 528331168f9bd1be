use serde::Serialize;

/// A validated course outline as returned by the provider, before any
/// of it has been persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub estimated_minutes: Option<u32>,
    pub modules: Vec<ModuleDraft>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDraft {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub quiz: Option<QuizDraft>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizDraft {
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<QuizQuestion>,
}

/// Quiz questions are stored as an opaque jsonb blob, so they serialize
/// in exactly this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}
