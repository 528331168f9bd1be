use coursegen::application::services::{
    course_draft_from_value, final_exam_from_value, PayloadError,
};
use serde_json::json;

fn course_value(quiz: Option<serde_json::Value>) -> serde_json::Value {
    let mut module = json!({
        "title": "Ownership",
        "summary": "How Rust manages memory.",
        "body": "Long instructional text about ownership.",
    });
    if let Some(quiz) = quiz {
        module["quiz"] = quiz;
    }
    json!({
        "title": "Rust Fundamentals",
        "description": "A course on the Rust language.",
        "estimated_minutes": 300,
        "modules": [module],
    })
}

#[test]
fn given_valid_course_payload_when_validating_then_draft_is_built() {
    let quiz = json!({
        "title": "Ownership quiz",
        "description": "Check your understanding.",
        "questions": [
            {"prompt": "Who owns a value?", "options": ["One binding", "Everyone"], "correct_index": 0}
        ]
    });

    let draft = course_draft_from_value(course_value(Some(quiz))).unwrap();
    assert_eq!(draft.title, "Rust Fundamentals");
    assert_eq!(draft.estimated_minutes, Some(300));
    assert_eq!(draft.modules.len(), 1);
    let quiz = draft.modules[0].quiz.as_ref().unwrap();
    assert_eq!(quiz.questions[0].correct_index, 0);
}

#[test]
fn given_module_without_quiz_when_validating_then_draft_has_no_quiz() {
    let draft = course_draft_from_value(course_value(None)).unwrap();
    assert!(draft.modules[0].quiz.is_none());
}

#[test]
fn given_correct_index_out_of_range_when_validating_then_rejected() {
    let quiz = json!({
        "title": "Quiz",
        "questions": [
            {"prompt": "Pick one", "options": ["a", "b"], "correct_index": 2}
        ]
    });

    let result = course_draft_from_value(course_value(Some(quiz)));
    assert!(matches!(result, Err(PayloadError::Invalid(_))));
}

#[test]
fn given_single_option_question_when_validating_then_rejected() {
    let quiz = json!({
        "title": "Quiz",
        "questions": [
            {"prompt": "Pick one", "options": ["only"], "correct_index": 0}
        ]
    });

    let result = course_draft_from_value(course_value(Some(quiz)));
    assert!(matches!(result, Err(PayloadError::Invalid(_))));
}

#[test]
fn given_duplicate_options_when_validating_then_rejected() {
    let quiz = json!({
        "title": "Quiz",
        "questions": [
            {"prompt": "Pick one", "options": ["same", "same"], "correct_index": 0}
        ]
    });

    let result = course_draft_from_value(course_value(Some(quiz)));
    assert!(matches!(result, Err(PayloadError::Invalid(_))));
}

#[test]
fn given_empty_modules_when_validating_then_rejected() {
    let value = json!({
        "title": "Empty",
        "description": "No modules at all.",
        "modules": [],
    });

    let result = course_draft_from_value(value);
    assert!(matches!(result, Err(PayloadError::Invalid(_))));
}

#[test]
fn given_missing_required_field_when_validating_then_malformed() {
    let value = json!({"title": "No description"});
    let result = course_draft_from_value(value);
    assert!(matches!(result, Err(PayloadError::Malformed(_))));
}

#[test]
fn given_camel_case_fields_when_validating_then_aliases_are_accepted() {
    let value = json!({
        "title": "Rust",
        "description": "desc",
        "estimatedMinutes": 120,
        "modules": [
            {
                "title": "M1",
                "summary": "s",
                "content": "body via content alias",
                "quiz": {
                    "title": "q",
                    "questions": [
                        {"question": "prompt alias", "options": ["a", "b"], "correctIndex": 1}
                    ]
                }
            }
        ]
    });

    let draft = course_draft_from_value(value).unwrap();
    assert_eq!(draft.estimated_minutes, Some(120));
    assert_eq!(draft.modules[0].content, "body via content alias");
    let quiz = draft.modules[0].quiz.as_ref().unwrap();
    assert_eq!(quiz.questions[0].prompt, "prompt alias");
    assert_eq!(quiz.questions[0].correct_index, 1);
}

#[test]
fn given_valid_exam_payload_when_validating_then_draft_is_built() {
    let value = json!({
        "questions": [
            {
                "question": "Capital of France?",
                "options": ["London", "Paris"],
                "correct_answer": "Paris",
                "explanation": "Paris is the capital."
            }
        ]
    });

    let exam = final_exam_from_value(value).unwrap();
    assert_eq!(exam.questions.len(), 1);
    assert_eq!(exam.questions[0].correct_answer, "Paris");
}

#[test]
fn given_correct_answer_absent_from_options_when_validating_then_rejected() {
    let value = json!({
        "questions": [
            {
                "question": "Capital of France?",
                "options": ["London", "Berlin", "Rome"],
                "correct_answer": "Paris"
            }
        ]
    });

    let result = final_exam_from_value(value);
    assert!(matches!(result, Err(PayloadError::Invalid(_))));
}

#[test]
fn given_bare_question_array_when_validating_then_accepted() {
    let value = json!([
        {"question": "Q", "options": ["a", "b"], "correct_answer": "b"}
    ]);

    let exam = final_exam_from_value(value).unwrap();
    assert_eq!(exam.questions.len(), 1);
}

#[test]
fn given_exam_with_no_questions_when_validating_then_rejected() {
    let result = final_exam_from_value(json!({"questions": []}));
    assert!(matches!(result, Err(PayloadError::Invalid(_))));
}

#[test]
fn given_exam_question_with_one_option_when_validating_then_rejected() {
    let value = json!({
        "questions": [
            {"question": "Q", "options": ["only"], "correct_answer": "only"}
        ]
    });

    let result = final_exam_from_value(value);
    assert!(matches!(result, Err(PayloadError::Invalid(_))));
}
