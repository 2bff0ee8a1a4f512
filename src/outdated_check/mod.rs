/// Domain layer for the outdated check
///
/// Pure models and services with no I/O: packages, package managers,
/// version classification, exclusion filtering.
pub mod domain;
pub mod services;
