/// Application layer - Use cases and application services
pub mod dto;
pub mod factories;
pub mod use_cases;
