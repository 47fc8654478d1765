//! Service layer for the company/employee directory.
//! - Directory services enforce existence and referential rules.
//! - Entity stores abstract the document store behind one async trait.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod store;
pub mod directory;
#[cfg(test)]
pub mod test_support;

pub use directory::{CompanyService, Directory, EmployeeService};
pub use errors::ServiceError;
pub use pagination::Pagination;
