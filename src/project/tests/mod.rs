//! Unit and service tests for the project context.

mod authorization_tests;
mod comment_service_tests;
mod domain_tests;
mod overview_tests;
mod project_service_tests;
