use followup_core::{EditorBuilder, EditorState, FilePlanStore, Touchpoint};
use jiff::tz::TimeZone;
use tempfile::TempDir;

/// Helper function to create a plan store in a temporary directory
pub fn create_test_store() -> (TempDir, FilePlanStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FilePlanStore::builder()
        .with_directory(Some(temp_dir.path().join("plans")))
        .build()
        .expect("Failed to create plan store");
    (temp_dir, store)
}

/// Helper function to create a UTC editor for a call ending 2024-03-04 15:00
pub fn create_test_editor(touchpoints: Vec<Touchpoint>) -> EditorState {
    EditorBuilder::new("lead-7", "2024-03-04T15:00:00Z".parse().unwrap())
        .with_touchpoints(touchpoints)
        .with_summary(Some("Discussed onboarding".to_string()))
        .with_time_zone(TimeZone::UTC)
        .build()
        .expect("Failed to build editor")
}

pub fn touchpoint(offset_hours: f64, channel: &str, message: &str) -> Touchpoint {
    Touchpoint {
        offset_hours: Some(offset_hours),
        channel: Some(channel.to_string()),
        message: Some(message.to_string()),
    }
}
