use crate::{Project, ProjectDraft, sort_newest_first, timestamp};

use chrono::{DateTime, Duration, TimeZone, Utc};
use googletest::prelude::*;
use serde_json::json;

fn castle_draft() -> ProjectDraft {
    ProjectDraft::new(
        Some("Castle".to_string()),
        None,
        Some("https://x/1.png".to_string()),
        None,
    )
    .unwrap()
}

fn at(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

#[test]
fn given_draft_when_project_created_then_timestamps_match_and_optionals_empty() {
    let now = timestamp::now();

    let project = Project::new(castle_draft(), now);

    assert!(project.id.as_str().starts_with("project:"));
    assert_that!(project.description, eq(""));
    assert_that!(project.roblox_link, eq(""));
    assert_that!(project.created_at, some(eq(now)));
    assert_that!(project.updated_at, eq(project.created_at));
}

#[test]
fn given_project_when_serialized_then_uses_camel_case_wire_names() {
    let project = Project::new(castle_draft(), at(1_767_225_600_000));

    let value = serde_json::to_value(&project).unwrap();

    assert_that!(value["title"], eq(&json!("Castle")));
    assert_that!(value["imageUrl"], eq(&json!("https://x/1.png")));
    assert_that!(value["robloxLink"], eq(&json!("")));
    assert_that!(value["description"], eq(&json!("")));
    assert_that!(value["createdAt"], eq(&json!("2026-01-01T00:00:00.000Z")));
    assert_that!(value["updatedAt"], eq(&json!("2026-01-01T00:00:00.000Z")));
}

#[test]
fn given_later_time_when_applied_then_fields_replaced_and_created_at_kept() {
    let created = at(1_000);
    let mut project = Project::new(castle_draft(), created);
    let id = project.id.clone();
    let draft = ProjectDraft::new(
        Some("Tower".to_string()),
        Some("Tall".to_string()),
        Some("https://x/2.png".to_string()),
        Some("https://roblox.com/games/2".to_string()),
    )
    .unwrap();

    project.apply(draft, at(5_000));

    assert_that!(project.id, eq(&id));
    assert_that!(project.title, eq("Tower"));
    assert_that!(project.description, eq("Tall"));
    assert_that!(project.image_url, eq("https://x/2.png"));
    assert_that!(project.roblox_link, eq("https://roblox.com/games/2"));
    assert_that!(project.created_at, some(eq(created)));
    assert_that!(project.updated_at, some(eq(at(5_000))));
}

#[test]
fn given_same_millisecond_when_applied_then_updated_at_still_advances() {
    let now = at(1_000);
    let mut project = Project::new(castle_draft(), now);

    project.apply(castle_draft(), now);

    assert_that!(project.updated_at, some(eq(now + Duration::milliseconds(1))));
}

#[test]
fn given_clock_behind_when_applied_then_updated_at_still_advances() {
    let mut project = Project::new(castle_draft(), at(10_000));

    project.apply(castle_draft(), at(2_000));

    assert_that!(project.updated_at, some(eq(at(10_001))));
}

#[test]
fn given_stored_record_with_unknown_field_when_round_tripped_then_field_kept() {
    let stored = json!({
        "id": "project:1-abc",
        "title": "Castle",
        "imageUrl": "https://x/1.png",
        "featured": true
    });

    let project: Project = serde_json::from_value(stored).unwrap();
    let written = serde_json::to_value(&project).unwrap();

    assert_that!(project.created_at, none());
    assert_that!(project.description, eq(""));
    assert_that!(written["featured"], eq(&json!(true)));
    assert!(written.get("createdAt").is_none());
}

#[test]
fn given_projects_when_sorted_then_newest_first_and_undated_last() {
    let mut older = Project::new(castle_draft(), at(1_000));
    older.title = "older".into();
    let mut newer = Project::new(castle_draft(), at(2_000));
    newer.title = "newer".into();
    let mut undated = Project::new(castle_draft(), at(3_000));
    undated.title = "undated".into();
    undated.created_at = None;

    let mut projects = vec![undated, older, newer];
    sort_newest_first(&mut projects);

    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["newer", "older", "undated"]);
}
