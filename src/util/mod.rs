pub mod email;
pub mod error;
