pub mod admin_user;
pub mod api_json;
