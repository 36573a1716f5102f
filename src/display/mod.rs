pub mod output;

pub use output::{OutputFormat, OutputSink};
