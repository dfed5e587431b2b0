//! CLI commands for normeval.

pub mod dump;
pub mod evaluate;

pub use dump::DumpCommand;
pub use evaluate::EvaluateCommand;
