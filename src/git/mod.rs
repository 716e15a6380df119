pub mod branches;
pub mod operations;

// Re-export commonly used items
pub use branches::*;
pub use operations::*;
