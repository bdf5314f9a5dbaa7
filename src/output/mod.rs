//! Output naming and console reporting module

pub mod namer;
pub mod report;

pub use namer::OutputNamer;
