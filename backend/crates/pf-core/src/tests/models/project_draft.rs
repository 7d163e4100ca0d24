use crate::{CoreError, ProjectDraft};

use googletest::prelude::*;

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn given_only_required_fields_when_created_then_optionals_default_to_empty() {
    let draft = ProjectDraft::new(text("Castle"), None, text("https://x/1.png"), None).unwrap();

    assert_that!(draft.title, eq("Castle"));
    assert_that!(draft.image_url, eq("https://x/1.png"));
    assert_that!(draft.description, eq(""));
    assert_that!(draft.roblox_link, eq(""));
}

#[test]
fn given_all_fields_when_created_then_kept_verbatim() {
    let draft = ProjectDraft::new(
        text("Castle"),
        text("A big castle"),
        text("https://x/1.png"),
        text("https://roblox.com/games/1"),
    )
    .unwrap();

    assert_that!(draft.description, eq("A big castle"));
    assert_that!(draft.roblox_link, eq("https://roblox.com/games/1"));
}

#[test]
fn given_missing_title_when_created_then_validation_error_on_title() {
    let result = ProjectDraft::new(None, None, text("https://x/1.png"), None);

    match result {
        Err(CoreError::Validation { message, field, .. }) => {
            assert_that!(message, eq("Title and image URL are required"));
            assert_that!(field, some(eq("title")));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_empty_image_url_when_created_then_validation_error_on_image_url() {
    let result = ProjectDraft::new(text("Castle"), None, text(""), None);

    match result {
        Err(CoreError::Validation { field, .. }) => {
            assert_that!(field, some(eq("imageUrl")));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_whitespace_title_when_created_then_counts_as_present() {
    let result = ProjectDraft::new(text("   "), None, text("https://x/1.png"), None);

    assert_that!(result, ok(anything()));
}
