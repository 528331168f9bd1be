use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{ChatMessage, TextGenerationError, TextGenerator};
use crate::domain::MIN_MODULES;

/// Canned provider for scaffold mode and tests: returns a schema-valid
/// course or exam payload depending on which prompt it was handed, after
/// an optional artificial delay.
pub struct MockTextGenerator {
    delay: Duration,
}

impl MockTextGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _temperature: f32,
    ) -> Result<String, TextGenerationError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let wants_exam = messages
            .iter()
            .any(|m| m.role == "user" && m.content.contains("final exam"));

        if wants_exam {
            Ok(canned_exam().to_string())
        } else {
            Ok(canned_course().to_string())
        }
    }
}

fn canned_course() -> serde_json::Value {
    let modules: Vec<serde_json::Value> = (1..=MIN_MODULES)
        .map(|n| {
            json!({
                "title": format!("Module {}", n),
                "summary": format!("A short summary of module {}.", n),
                "body": format!("Placeholder instructional text for module {}.", n),
                "quiz": {
                    "title": format!("Module {} quiz", n),
                    "description": "Check your understanding.",
                    "questions": [
                        {
                            "prompt": "Which module is this quiz attached to?",
                            "options": ["The previous one", format!("Module {}", n), "The next one"],
                            "correct_index": 1
                        }
                    ]
                }
            })
        })
        .collect();

    json!({
        "title": "Scaffold Course",
        "description": "A canned course produced without calling any provider.",
        "estimated_minutes": 120,
        "modules": modules,
    })
}

fn canned_exam() -> serde_json::Value {
    json!({
        "questions": [
            {
                "question": "Where does this exam come from?",
                "options": ["A real provider", "The scaffold generator"],
                "correct_answer": "The scaffold generator",
                "explanation": "Scaffold mode never calls a provider."
            },
            {
                "question": "How many providers were contacted to produce it?",
                "options": ["Two", "One", "None"],
                "correct_answer": "None",
                "explanation": "The payload is canned."
            }
        ]
    })
}
