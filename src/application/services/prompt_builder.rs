use crate::application::ports::ChatMessage;
use crate::domain::{CourseRequest, MIN_MODULES};

const DEFAULT_AUDIENCE: &str = "general learners";

const COURSE_SYSTEM_PROMPT: &str = "You are an expert curriculum designer. You respond with a \
single valid JSON document and nothing else.";

const EXAM_SYSTEM_PROMPT: &str = "You are an expert assessment designer. You respond with a \
single valid JSON document and nothing else.";

const COURSE_SCHEMA: &str = r#"Respond with one JSON object in exactly this shape:

{
  "title": "course title",
  "description": "two to three sentences describing the course",
  "estimated_minutes": 480,
  "modules": [
    {
      "title": "module title",
      "summary": "one paragraph summarising the module",
      "body": "the full instructional text of the module",
      "quiz": {
        "title": "quiz title",
        "description": "what the quiz covers",
        "questions": [
          {
            "prompt": "question text",
            "options": ["first option", "second option", "third option", "fourth option"],
            "correct_index": 0
          }
        ]
      }
    }
  ]
}
"#;

const EXAM_SCHEMA: &str = r#"Respond with one JSON object in exactly this shape:

{
  "questions": [
    {
      "question": "question text",
      "options": ["first option", "second option", "third option", "fourth option"],
      "correct_answer": "first option",
      "explanation": "one sentence explaining the right answer"
    }
  ]
}
"#;

/// Builds the full-course instruction messages. Everything the provider
/// needs to know is in the user message; the request has already been
/// clamped, so the bounds quoted here are trustworthy.
pub fn course_prompt(request: &CourseRequest) -> Vec<ChatMessage> {
    let mut instructions = String::new();

    if let Some(description) = &request.description {
        instructions.push_str(&format!(
            "Guidance from the requester: {}\n\n",
            description
        ));
    }

    instructions.push_str(&format!(
        "Design a complete online course about \"{}\" for {}, at {} difficulty, written in a {} tone.\n\n",
        request.topic,
        audience_phrase(&request.audience),
        request.difficulty,
        request.tone,
    ));

    if let Some(title) = &request.title {
        instructions.push_str(&format!("Title the course \"{}\".\n\n", title));
    }

    instructions.push_str(&format!(
        "The modules array must contain at least {} and at most {} modules. \
Each module's body must be between {} and {} characters of instructional text. \
Give each module a quiz of three to five multiple-choice questions; \"correct_index\" \
is the zero-based index of the right option, and every option within a question must be distinct.\n\n",
        MIN_MODULES,
        request.num_modules,
        request.module_length_min,
        request.module_length_max,
    ));

    instructions.push_str(COURSE_SCHEMA);
    instructions.push_str(
        "\nReturn only the JSON object. Do not wrap it in markdown fences and do not add prose \
before or after it.",
    );

    vec![
        ChatMessage::system(COURSE_SYSTEM_PROMPT.to_string()),
        ChatMessage::user(instructions),
    ]
}

/// Builds the final-exam instruction messages, grounded in the module
/// titles the course step already produced.
pub fn final_exam_prompt(request: &CourseRequest, module_titles: &[String]) -> Vec<ChatMessage> {
    let mut instructions = String::new();

    instructions.push_str(&format!(
        "Write the final exam for a {} difficulty course about \"{}\".\n\n",
        request.exam_difficulty(),
        request.topic,
    ));

    instructions.push_str(&format!(
        "The exam must contain exactly {} multiple-choice questions, each offering exactly {} \
answer options. \"correct_answer\" must match one of that question's \"options\" exactly, \
character for character. Include a short explanation for every question.\n\n",
        request.final_exam_questions, request.final_exam_options,
    ));

    if !module_titles.is_empty() {
        instructions.push_str(&format!(
            "Ground the questions in the course's modules: {}.\n\n",
            module_titles.join("; "),
        ));
    }

    instructions.push_str(EXAM_SCHEMA);
    instructions.push_str(
        "\nReturn only the JSON object. Do not wrap it in markdown fences and do not add prose \
before or after it.",
    );

    vec![
        ChatMessage::system(EXAM_SYSTEM_PROMPT.to_string()),
        ChatMessage::user(instructions),
    ]
}

fn audience_phrase(audience: &[String]) -> String {
    if audience.is_empty() {
        DEFAULT_AUDIENCE.to_string()
    } else {
        audience.join(", ")
    }
}
