use super::*;

// =============================================================
// ProjectId
// =============================================================

#[test]
fn project_id_accepts_integer() {
    let id: ProjectId = serde_json::from_str("42").unwrap();
    assert_eq!(id.get(), 42);
}

#[test]
fn project_id_accepts_digit_string() {
    let id: ProjectId = serde_json::from_str(r#""17""#).unwrap();
    assert_eq!(id, ProjectId::new(17));
}

#[test]
fn project_id_rejects_path_characters() {
    for raw in [r#""a1b2""#, r#""1/2""#, r#""1?x=2""#, r#""""#, r#"" 7""#] {
        assert!(serde_json::from_str::<ProjectId>(raw).is_err(), "{raw}");
    }
}

#[test]
fn project_id_rejects_fractional_and_negative_numbers() {
    assert!(serde_json::from_str::<ProjectId>("4.5").is_err());
    assert!(serde_json::from_str::<ProjectId>("-3").is_err());
}

#[test]
fn project_id_serializes_as_number() {
    assert_eq!(serde_json::to_string(&ProjectId::new(7)).unwrap(), "7");
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn created_project_reads_numeric_project_id() {
    let created: CreatedProject = serde_json::from_str(r#"{"message":"Project created","project_id":42}"#).unwrap();
    assert_eq!(created.project_id.to_string(), "42");
}

#[test]
fn project_list_tolerates_missing_description() {
    let items: Vec<ProjectSummary> =
        serde_json::from_str(r#"[{"id":1,"title":"Spot A","description":"intro"},{"id":2,"title":"Spot B"}]"#).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].description.as_deref(), Some("intro"));
    assert_eq!(items[1].id, ProjectId::new(2));
    assert_eq!(items[1].description, None);
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_serializes_expected_fields() {
    let body = serde_json::to_value(LoginRequest { username: "alice", password: "secret1" }).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "alice", "password": "secret1" }));
}

#[test]
fn verify_sign_up_request_uses_code_field() {
    let body = serde_json::to_value(VerifySignUpRequest { username: "alice", code: "123456" }).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "alice", "code": "123456" }));
}
