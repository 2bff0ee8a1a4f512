/// Use cases module containing application business logic orchestration
mod check_outdated;

pub use check_outdated::CheckOutdatedUseCase;
