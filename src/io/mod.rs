//! Output layer: `writers` for the CSV and XML trace formats.
pub mod writers;
pub use writers::{write_csv, write_xml};
