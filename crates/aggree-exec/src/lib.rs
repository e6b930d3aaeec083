pub mod contracts;
pub mod driver;
pub mod insights;
pub mod scheduler;

pub use contracts::*;
pub use driver::*;
pub use insights::*;
pub use scheduler::*;
