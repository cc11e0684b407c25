mod error;
pub mod icon;
pub mod run;
pub mod source;
pub mod targets;

pub use error::FaviconError;
pub use run::{run, summarize, TargetOutcome};
pub use targets::{IconSize, IconTarget};
