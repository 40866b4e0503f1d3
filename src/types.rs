pub const PDF_EXTENSION: &str = "pdf";
pub const SIZE_UNKNOWN: &str = "Size unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub display_name: String,
    /// `None` when the file could not be stat-ed.
    pub size_bytes: Option<u64>,
    pub size_label: String,
}

impl FileEntry {
    /// Text shown for the file in the page and the terminal summary.
    #[must_use]
    pub fn label(&self) -> String {
        if self.size_bytes.is_some() {
            format!("{}.{PDF_EXTENSION}", self.display_name)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_restores_extension() {
        let entry = FileEntry {
            name: "Report.pdf".to_string(),
            display_name: "Report".to_string(),
            size_bytes: Some(10),
            size_label: "10 B".to_string(),
        };
        assert_eq!(entry.label(), "Report.pdf");
    }

    #[test]
    fn test_label_uses_full_name_when_size_unknown() {
        let entry = FileEntry {
            name: "gone.pdf".to_string(),
            display_name: "gone.pdf".to_string(),
            size_bytes: None,
            size_label: SIZE_UNKNOWN.to_string(),
        };
        assert_eq!(entry.label(), "gone.pdf");
    }
}
