use crate::{CredentialsRequest, ProjectRequest};

use googletest::prelude::*;

#[test]
fn given_camel_case_body_when_decoded_then_draft_has_all_fields() {
    let request: ProjectRequest = serde_json::from_str(
        r#"{"title":"Castle","description":"Big","imageUrl":"https://x/1.png","robloxLink":"https://roblox.com/games/1"}"#,
    )
    .unwrap();

    let draft = request.into_draft().unwrap();

    assert_that!(draft.title, eq("Castle"));
    assert_that!(draft.description, eq("Big"));
    assert_that!(draft.image_url, eq("https://x/1.png"));
    assert_that!(draft.roblox_link, eq("https://roblox.com/games/1"));
}

#[test]
fn given_empty_body_when_drafted_then_validation_fails() {
    let request: ProjectRequest = serde_json::from_str("{}").unwrap();

    assert_that!(request.into_draft(), err(anything()));
}

#[test]
fn given_empty_password_when_split_then_none() {
    let request: CredentialsRequest =
        serde_json::from_str(r#"{"email":"admin@example.com","password":""}"#).unwrap();

    assert_that!(request.into_parts(), none());
}

#[test]
fn given_both_credentials_when_split_then_returned() {
    let request: CredentialsRequest =
        serde_json::from_str(r#"{"email":"admin@example.com","password":"hunter22"}"#).unwrap();

    let (email, password) = request.into_parts().unwrap();

    assert_that!(email, eq("admin@example.com"));
    assert_that!(password, eq("hunter22"));
}
