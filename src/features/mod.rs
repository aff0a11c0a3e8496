//! Backend resource areas (auth, employees, payroll, time entries, users,
//! dashboard). Each area keeps endpoint paths in its `client` module and wire
//! shapes in `types`; every call goes through the CSRF-aware [`crate::api::ApiClient`].

pub mod auth;
pub mod dashboard;
pub mod employees;
pub mod payroll;
pub mod time_entries;
pub mod users;
