/// Ports - Interface definitions between the application core and
/// infrastructure adapters.
pub mod outbound;
