use crate::{CoreError, PROJECT_KEY_PREFIX, ProjectId};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_time_when_generated_then_id_has_prefix_millis_and_suffix() {
    let now = Utc.timestamp_millis_opt(1_767_225_600_123).unwrap();

    let id = ProjectId::generate(now);

    let rest = id.as_str().strip_prefix("project:1767225600123-").unwrap();
    assert_that!(rest.len(), eq(9));
    assert!(
        rest.chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    );
}

#[test]
fn given_same_instant_when_generated_twice_then_ids_differ() {
    let now = Utc::now();

    let first = ProjectId::generate(now);
    let second = ProjectId::generate(now);

    assert_that!(first, not(eq(&second)));
}

#[test]
fn given_project_key_when_parsed_then_ok() {
    let id = ProjectId::parse("project:999").unwrap();

    assert_that!(id.as_str(), eq("project:999"));
    assert_that!(id.to_string(), eq("project:999"));
}

#[test]
fn given_key_outside_namespace_when_parsed_then_invalid_project_id() {
    let result = ProjectId::parse("user:admin@example.com");

    assert!(matches!(result, Err(CoreError::InvalidProjectId { .. })));
}

#[test]
fn given_bare_prefix_when_parsed_then_invalid_project_id() {
    let result = ProjectId::parse(PROJECT_KEY_PREFIX);

    assert!(matches!(result, Err(CoreError::InvalidProjectId { .. })));
}
