//! Shared types used across cg-trace: the parsed command line
//! (`ParsedArguments`) and the export formats it can request.

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum ExportFormat {
    Csv,
    Xml,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
        };
        write!(f, "{}", s)
    }
}

/// Result of parsing the command line. Built once per invocation and
/// consumed by the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    /// Destination for CSV trace output
    pub csv_path: Option<String>,
    /// Destination for XML trace output
    pub xml_path: Option<String>,
    /// Program to launch
    pub program_name: String,
    /// Tokens after the program name, forwarded verbatim
    pub remainder_arguments: Vec<String>,
}

impl ParsedArguments {
    /// Requested exports, CSV first.
    pub fn export_targets(&self) -> Vec<(ExportFormat, &str)> {
        let mut targets = Vec::new();
        if let Some(path) = self.csv_path.as_deref() {
            targets.push((ExportFormat::Csv, path));
        }
        if let Some(path) = self.xml_path.as_deref() {
            targets.push((ExportFormat::Xml, path));
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(csv: Option<&str>, xml: Option<&str>) -> ParsedArguments {
        ParsedArguments {
            csv_path: csv.map(str::to_string),
            xml_path: xml.map(str::to_string),
            program_name: "prog".to_string(),
            remainder_arguments: Vec::new(),
        }
    }

    #[test]
    fn export_targets_lists_csv_before_xml() {
        let parsed = args(Some("out.csv"), Some("out.xml"));
        assert_eq!(
            parsed.export_targets(),
            vec![(ExportFormat::Csv, "out.csv"), (ExportFormat::Xml, "out.xml")]
        );
    }

    #[test]
    fn export_targets_empty_without_paths() {
        assert!(args(None, None).export_targets().is_empty());
    }

    #[test]
    fn export_format_display() {
        assert_eq!(ExportFormat::Csv.to_string(), "csv");
        assert_eq!(ExportFormat::Xml.to_string(), "xml");
    }
}
