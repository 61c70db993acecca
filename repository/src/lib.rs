pub mod crew;
pub mod error;
