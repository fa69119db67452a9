pub mod achievement;
pub mod profile;

// Re-exports
pub use achievement::*;
pub use profile::*;
