use coursegen::domain::{CourseId, JobOutput};

#[test]
fn given_events_and_modules_when_pushed_then_order_is_preserved() {
    let mut output = JobOutput::default();
    output.push_event("started".to_string());
    output.push_module(0, "First".to_string());
    output.push_module(1, "Second".to_string());
    output.push_event("done".to_string());

    assert_eq!(output.progress.len(), 2);
    assert_eq!(output.progress[0].message, "started");
    assert_eq!(output.modules[0].index, 0);
    assert_eq!(output.modules[1].title, "Second");
}

#[test]
fn given_output_without_course_id_when_serialized_then_field_is_omitted() {
    let output = JobOutput::default();
    let value = serde_json::to_value(&output).unwrap();
    assert!(value.get("course_id").is_none());
}

#[test]
fn given_serialized_output_when_deserialized_then_matches() {
    let mut output = JobOutput::default();
    output.push_event("validated".to_string());
    output.push_module(0, "Basics".to_string());
    output.course_id = Some(CourseId::new());

    let value = serde_json::to_value(&output).unwrap();
    let restored: JobOutput = serde_json::from_value(value).unwrap();
    assert_eq!(restored, output);
}

#[test]
fn given_empty_json_object_when_deserialized_then_defaults_apply() {
    let restored: JobOutput = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(restored.progress.is_empty());
    assert!(restored.modules.is_empty());
    assert!(restored.course_id.is_none());
}
