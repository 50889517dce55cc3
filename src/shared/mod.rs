pub mod bytes;
pub mod error;
pub mod result;

pub use result::Result;
