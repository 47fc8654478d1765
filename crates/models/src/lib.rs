//! Persistence entities for the directory tables plus field-level validation
//! shared by every storage backend.

pub mod errors;
pub mod db;
pub mod company;
pub mod employee;
