pub const MIN_MODULES: u32 = 8;
pub const MAX_MODULES: u32 = 20;

const DEFAULT_MODULES: u32 = 12;
const DEFAULT_DIFFICULTY: &str = "beginner";
const DEFAULT_TONE: &str = "professional";
const DEFAULT_MODULE_LENGTH_MIN: u32 = 2200;
const DEFAULT_MODULE_LENGTH_MAX: u32 = 3200;
const MIN_EXAM_OPTIONS: u32 = 2;
const MAX_EXAM_OPTIONS: u32 = 6;
const DEFAULT_EXAM_OPTIONS: u32 = 4;
const MIN_EXAM_QUESTIONS: u32 = 5;
const MAX_EXAM_QUESTIONS: u32 = 50;
const DEFAULT_EXAM_QUESTIONS: u32 = 20;

/// Raw knobs as they arrive from a trigger payload, before any
/// defaulting or clamping has happened.
#[derive(Debug, Clone, Default)]
pub struct CourseRequestOptions {
    pub topic: Option<String>,
    pub title: Option<String>,
    pub difficulty: Option<String>,
    pub num_modules: Option<u32>,
    pub audience: Vec<String>,
    pub tone: Option<String>,
    pub description: Option<String>,
    pub module_length_min: Option<u32>,
    pub module_length_max: Option<u32>,
    pub include_final_exam: Option<bool>,
    pub final_exam_difficulty: Option<String>,
    pub final_exam_options: Option<u32>,
    pub final_exam_questions: Option<u32>,
}

/// A validated course request. Construction is the only place defaults
/// and clamps are applied, so everything downstream can trust the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRequest {
    pub topic: String,
    pub title: Option<String>,
    pub difficulty: String,
    pub num_modules: u32,
    pub audience: Vec<String>,
    pub tone: String,
    pub description: Option<String>,
    pub module_length_min: u32,
    pub module_length_max: u32,
    pub include_final_exam: bool,
    pub final_exam_difficulty: Option<String>,
    pub final_exam_options: u32,
    pub final_exam_questions: u32,
}

impl CourseRequest {
    pub fn new(options: CourseRequestOptions) -> Result<Self, String> {
        let title = non_empty(options.title);
        let topic = match non_empty(options.topic).or_else(|| title.clone()) {
            Some(topic) => topic,
            None => return Err("A course topic or title is required".to_string()),
        };

        let module_length_min = options
            .module_length_min
            .unwrap_or(DEFAULT_MODULE_LENGTH_MIN);
        let module_length_max = options
            .module_length_max
            .unwrap_or(DEFAULT_MODULE_LENGTH_MAX)
            .max(module_length_min);

        let audience: Vec<String> = options
            .audience
            .into_iter()
            .filter_map(|entry| non_empty(Some(entry)))
            .collect();

        Ok(Self {
            topic,
            title,
            difficulty: non_empty(options.difficulty)
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            num_modules: options
                .num_modules
                .unwrap_or(DEFAULT_MODULES)
                .clamp(MIN_MODULES, MAX_MODULES),
            audience,
            tone: non_empty(options.tone).unwrap_or_else(|| DEFAULT_TONE.to_string()),
            description: non_empty(options.description),
            module_length_min,
            module_length_max,
            include_final_exam: options.include_final_exam.unwrap_or(true),
            final_exam_difficulty: non_empty(options.final_exam_difficulty),
            final_exam_options: options
                .final_exam_options
                .unwrap_or(DEFAULT_EXAM_OPTIONS)
                .clamp(MIN_EXAM_OPTIONS, MAX_EXAM_OPTIONS),
            final_exam_questions: options
                .final_exam_questions
                .unwrap_or(DEFAULT_EXAM_QUESTIONS)
                .clamp(MIN_EXAM_QUESTIONS, MAX_EXAM_QUESTIONS),
        })
    }

    /// Difficulty used for the final exam prompt: its own override, or
    /// the course difficulty.
    pub fn exam_difficulty(&self) -> &str {
        self.final_exam_difficulty
            .as_deref()
            .unwrap_or(&self.difficulty)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
