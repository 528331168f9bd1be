use coursegen::domain::{CourseRequest, CourseRequestOptions, MAX_MODULES, MIN_MODULES};

fn options_with_topic(topic: &str) -> CourseRequestOptions {
    CourseRequestOptions {
        topic: Some(topic.to_string()),
        ..Default::default()
    }
}

#[test]
fn given_minimal_input_when_building_request_then_defaults_are_applied() {
    let request = CourseRequest::new(options_with_topic("Rust")).unwrap();

    assert_eq!(request.topic, "Rust");
    assert_eq!(request.difficulty, "beginner");
    assert_eq!(request.tone, "professional");
    assert_eq!(request.num_modules, 12);
    assert_eq!(request.module_length_min, 2200);
    assert_eq!(request.module_length_max, 3200);
    assert!(request.include_final_exam);
    assert_eq!(request.final_exam_options, 4);
    assert_eq!(request.final_exam_questions, 20);
}

#[test]
fn given_too_few_modules_when_building_request_then_count_is_raised_to_minimum() {
    let mut options = options_with_topic("Rust");
    options.num_modules = Some(5);

    let request = CourseRequest::new(options).unwrap();
    assert_eq!(request.num_modules, MIN_MODULES);
}

#[test]
fn given_too_many_modules_when_building_request_then_count_is_capped_at_maximum() {
    let mut options = options_with_topic("Rust");
    options.num_modules = Some(30);

    let request = CourseRequest::new(options).unwrap();
    assert_eq!(request.num_modules, MAX_MODULES);
}

#[test]
fn given_exam_knobs_out_of_range_when_building_request_then_they_are_clamped() {
    let mut options = options_with_topic("Rust");
    options.final_exam_options = Some(10);
    options.final_exam_questions = Some(2);

    let request = CourseRequest::new(options).unwrap();
    assert_eq!(request.final_exam_options, 6);
    assert_eq!(request.final_exam_questions, 5);
}

#[test]
fn given_no_topic_and_no_title_when_building_request_then_it_is_rejected() {
    let result = CourseRequest::new(CourseRequestOptions::default());
    assert!(result.is_err());
}

#[test]
fn given_title_but_no_topic_when_building_request_then_title_serves_as_topic() {
    let options = CourseRequestOptions {
        title: Some("Intro to Databases".to_string()),
        ..Default::default()
    };

    let request = CourseRequest::new(options).unwrap();
    assert_eq!(request.topic, "Intro to Databases");
    assert_eq!(request.title.as_deref(), Some("Intro to Databases"));
}

#[test]
fn given_whitespace_only_topic_when_building_request_then_it_is_rejected() {
    let result = CourseRequest::new(options_with_topic("   "));
    assert!(result.is_err());
}

#[test]
fn given_inverted_length_band_when_building_request_then_max_is_raised_to_min() {
    let mut options = options_with_topic("Rust");
    options.module_length_min = Some(3000);
    options.module_length_max = Some(1000);

    let request = CourseRequest::new(options).unwrap();
    assert_eq!(request.module_length_min, 3000);
    assert_eq!(request.module_length_max, 3000);
}

#[test]
fn given_exam_difficulty_override_when_asked_then_it_wins_over_course_difficulty() {
    let mut options = options_with_topic("Rust");
    options.difficulty = Some("beginner".to_string());
    options.final_exam_difficulty = Some("advanced".to_string());

    let request = CourseRequest::new(options).unwrap();
    assert_eq!(request.exam_difficulty(), "advanced");

    let request = CourseRequest::new(options_with_topic("Rust")).unwrap();
    assert_eq!(request.exam_difficulty(), "beginner");
}
