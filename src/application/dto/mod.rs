/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod check_request;
mod outdated_report;

pub use check_request::CheckRequest;
pub use outdated_report::{OutdatedReport, OutdatedRow};
