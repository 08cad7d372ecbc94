use super::*;

#[test]
fn project_path_embeds_identifier() {
    assert_eq!(project_path(ProjectId::new(42)), "/project/42");
}

#[test]
fn created_project_navigates_to_its_editor() {
    let created: crate::net::types::CreatedProject = serde_json::from_str(r#"{"project_id": 42}"#).unwrap();
    assert!(project_path(created.project_id).contains("42"));
}
