// Error types for atrium

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum AtriumError {
    // Selection validation errors
    #[snafu(display(
        "Please fill in all fields to get personalized recommendations! Missing: {}",
        missing.join(", ")
    ))]
    IncompleteSelection { missing: Vec<&'static str> },
    #[snafu(display("Unknown {field}: {value}"))]
    UnknownOption { field: &'static str, value: String },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // Recommendation output errors
    #[snafu(display("Error writing recommendations"))]
    WriterError { source: io::Error },
    #[snafu(display("Error serializing recommendations"))]
    OutputSerializeError { source: serde_json::Error },

    // UI errors
    #[snafu(display("Could not start the design assistant window: {description}"))]
    UiStartError { description: String },
}
