pub mod local_auth_provider;
pub mod supabase_auth_provider;
