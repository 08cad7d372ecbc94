use super::*;

#[test]
fn project_delete_endpoint_formats_expected_path() {
    assert_eq!(project_delete_endpoint(ProjectId::new(42)), "/api/projects/42/delete");
}

#[test]
fn refresh_is_attempted_only_for_refused_tokens() {
    assert!(should_refresh(&ApiError::Rejected { status: 401, message: Some("Token has expired".to_owned()) }));
    assert!(should_refresh(&ApiError::MalformedBody { status: 401 }));
    assert!(!should_refresh(&ApiError::Rejected { status: 500, message: None }));
    assert!(!should_refresh(&ApiError::Timeout));
}

#[test]
fn timeouts_are_bounded() {
    assert!((10_000..=30_000).contains(&REQUEST_TIMEOUT_MS));
    assert!(UPLOAD_TIMEOUT_MS > REQUEST_TIMEOUT_MS);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_are_unavailable() {
    let form = NewProjectForm { title: "Spot".to_owned(), description: "Intro".to_owned() };
    poll_once(async {
        assert_eq!(login("alice", "secret1").await, Err(ApiError::Unavailable));
        assert_eq!(list_projects().await, Err(ApiError::Unavailable));
        assert_eq!(create_project(&form, None).await, Err(ApiError::Unavailable));
        assert!(!verify_session().await);
    });
}

/// The non-hydrate stubs never await anything, so a single poll completes them.
#[cfg(not(feature = "hydrate"))]
fn poll_once<F: std::future::Future<Output = ()>>(future: F) {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    assert!(matches!(future.as_mut().poll(&mut cx), Poll::Ready(())));
}
