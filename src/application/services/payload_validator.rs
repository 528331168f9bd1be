use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    CourseDraft, FinalExamDraft, FinalExamQuestion, ModuleDraft, QuizDraft, QuizQuestion,
};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("invalid payload: {0}")]
    Invalid(String),
}

// Raw shapes as the provider returns them. Field aliases absorb the
// camelCase spelling some models produce regardless of instructions.

#[derive(Debug, Deserialize)]
struct CoursePayload {
    title: String,
    description: String,
    #[serde(default, alias = "estimatedMinutes")]
    estimated_minutes: Option<u32>,
    modules: Vec<ModulePayload>,
}

#[derive(Debug, Deserialize)]
struct ModulePayload {
    title: String,
    summary: String,
    #[serde(alias = "content")]
    body: String,
    #[serde(default)]
    quiz: Option<QuizPayload>,
}

#[derive(Debug, Deserialize)]
struct QuizPayload {
    title: String,
    #[serde(default)]
    description: Option<String>,
    questions: Vec<QuestionPayload>,
}

#[derive(Debug, Deserialize)]
struct QuestionPayload {
    #[serde(alias = "question")]
    prompt: String,
    options: Vec<String>,
    #[serde(alias = "correctIndex")]
    correct_index: usize,
}

#[derive(Debug, Deserialize)]
struct FinalExamPayload {
    questions: Vec<ExamQuestionPayload>,
}

#[derive(Debug, Deserialize)]
struct ExamQuestionPayload {
    question: String,
    options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    correct_answer: String,
    #[serde(default)]
    explanation: Option<String>,
}

/// Checks a parsed provider payload against the course schema and, if it
/// holds, builds the draft. Drafts are only ever constructed here, so
/// downstream code never sees unvalidated provider output.
pub fn course_draft_from_value(value: Value) -> Result<CourseDraft, PayloadError> {
    let payload: CoursePayload =
        serde_json::from_value(value).map_err(|e| PayloadError::Malformed(e.to_string()))?;

    if payload.modules.is_empty() {
        return Err(PayloadError::Invalid(
            "course outline has no modules".to_string(),
        ));
    }

    let mut modules = Vec::with_capacity(payload.modules.len());
    for module in payload.modules {
        let quiz = match module.quiz {
            Some(quiz) => Some(validate_quiz(quiz)?),
            None => None,
        };
        modules.push(ModuleDraft {
            title: module.title,
            summary: module.summary,
            content: module.body,
            quiz,
        });
    }

    Ok(CourseDraft {
        title: payload.title,
        description: payload.description,
        estimated_minutes: payload.estimated_minutes,
        modules,
    })
}

/// Checks a parsed provider payload against the final-exam schema. A bare
/// question array is accepted in place of the wrapping object.
pub fn final_exam_from_value(value: Value) -> Result<FinalExamDraft, PayloadError> {
    let payload = match value {
        Value::Array(_) => FinalExamPayload {
            questions: serde_json::from_value(value)
                .map_err(|e| PayloadError::Malformed(e.to_string()))?,
        },
        other => serde_json::from_value(other)
            .map_err(|e| PayloadError::Malformed(e.to_string()))?,
    };

    if payload.questions.is_empty() {
        return Err(PayloadError::Invalid("final exam has no questions".to_string()));
    }

    let mut questions = Vec::with_capacity(payload.questions.len());
    for question in payload.questions {
        if question.options.len() < 2 {
            return Err(PayloadError::Invalid(format!(
                "exam question \"{}\" has fewer than two options",
                question.question
            )));
        }
        if !question.options.iter().any(|o| *o == question.correct_answer) {
            return Err(PayloadError::Invalid(format!(
                "exam question \"{}\" has correct_answer \"{}\" which is not one of its options",
                question.question, question.correct_answer
            )));
        }
        questions.push(FinalExamQuestion {
            question: question.question,
            options: question.options,
            correct_answer: question.correct_answer,
            explanation: question.explanation,
        });
    }

    Ok(FinalExamDraft { questions })
}

fn validate_quiz(quiz: QuizPayload) -> Result<QuizDraft, PayloadError> {
    let mut questions = Vec::with_capacity(quiz.questions.len());
    for question in quiz.questions {
        if question.options.len() < 2 {
            return Err(PayloadError::Invalid(format!(
                "quiz question \"{}\" has fewer than two options",
                question.prompt
            )));
        }
        let distinct: HashSet<&str> = question.options.iter().map(String::as_str).collect();
        if distinct.len() != question.options.len() {
            return Err(PayloadError::Invalid(format!(
                "quiz question \"{}\" has duplicate options",
                question.prompt
            )));
        }
        if question.correct_index >= question.options.len() {
            return Err(PayloadError::Invalid(format!(
                "quiz question \"{}\" has correct_index {} but only {} options",
                question.prompt,
                question.correct_index,
                question.options.len()
            )));
        }
        questions.push(QuizQuestion {
            prompt: question.prompt,
            options: question.options,
            correct_index: question.correct_index,
        });
    }

    Ok(QuizDraft {
        title: quiz.title,
        description: quiz.description,
        questions,
    })
}
