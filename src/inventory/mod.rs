/// Domain layer - Package inventory models and services
///
/// Pure business logic: the package record model, derived report
/// metadata and statistics, and the install-directory sizing service.
pub mod domain;
pub mod services;
