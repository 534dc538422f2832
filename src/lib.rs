pub mod cli;
pub mod probe;
pub mod report;
pub mod resolver;

pub use probe::*;
pub use report::*;
pub use resolver::*;
