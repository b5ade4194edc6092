//! Domain models and operation parameter types.
//!
//! Parameter structs carry validated data from the controller layer into
//! services and repositories, keeping DTO shapes out of the data layer.
//! Pipeline artifact types for arena generation also live here since they
//! are persisted into the generation job's result column.

pub mod admin;
pub mod audit;
pub mod arena;
pub mod billing;
pub mod card;
pub mod cms;
pub mod generation;
pub mod player;
