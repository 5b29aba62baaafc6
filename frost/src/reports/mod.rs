//! What each command tells the user, kept apart from how it is printed.
//!
//! Operations return a report; commands render it to a [`TerminalOutput`].

mod check;
mod clean;
mod generate;
mod output;

pub use check::CheckReport;
pub use clean::CleanReport;
pub use generate::{GenerateReport, GenerationResult, WrittenResult};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub use output::RecordingOutput;
