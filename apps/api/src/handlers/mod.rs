//! HTTP handlers, grouped per resource.

pub mod associates;
pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod health;
pub mod projects;
pub mod revenue;
pub mod users;
