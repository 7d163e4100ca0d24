use crate::Client;

use googletest::prelude::*;

#[test]
fn given_trailing_slash_when_created_then_base_url_joined_once() {
    let client = Client::new("http://localhost:8000/", "make-server-51fd9f23", None);

    assert_that!(client.base_url, eq("http://localhost:8000/make-server-51fd9f23"));
}

#[test]
fn given_prefix_with_slashes_when_created_then_slashes_trimmed() {
    let client = Client::new("http://localhost:8000", "/api/", None);

    assert_that!(client.base_url, eq("http://localhost:8000/api"));
}

#[test]
fn given_token_when_created_then_stored() {
    let client = Client::new("http://localhost:8000", "api", Some("abc"));

    assert_that!(client.token, some(eq("abc")));
}

#[test]
fn given_no_token_when_created_then_none() {
    let client = Client::new("http://localhost:8000", "api", None);

    assert_that!(client.token, none());
}
