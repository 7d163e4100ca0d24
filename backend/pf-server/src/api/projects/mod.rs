pub mod project_list_response;
pub mod project_mutation_response;
pub mod project_request;
pub mod project_response;
#[allow(clippy::module_inception)]
pub mod projects;
