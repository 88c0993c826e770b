pub mod document;
pub mod job;
pub mod report;

pub use document::*;
pub use job::*;
pub use report::*;
