//! Trace exporters. Each writer renders a [`crate::trace::TraceSession`]
//! to one output file.
pub mod csv;
pub use csv::write_csv;

pub mod xml;
pub use xml::write_xml;
