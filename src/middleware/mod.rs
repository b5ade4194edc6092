//! Request middleware: bearer authentication and route-table RBAC.

pub mod auth;
pub mod rbac;

#[cfg(test)]
mod test;
