use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct FinalExamDraft {
    pub questions: Vec<FinalExamQuestion>,
}

/// Exam answers are keyed by value, not index: `correct_answer` must be
/// one of `options`, byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalExamQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}
