//! View model of the three upload regions.

use super::upload_flow::{UploadFlow, UploadFlowState};
use crate::types::UploadedFile;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size with binary units and at most two decimals.
///
/// `2_500_000` becomes `"2.38 MB"`; sizes past the last unit stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >= 1024u64.pow(unit as u32 + 1) {
        unit += 1;
    }

    let value = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// What the result region shows about the stored file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub size: String,
    pub format: String,
}

impl From<&UploadedFile> for FileSummary {
    fn from(file: &UploadedFile) -> Self {
        let name = if file.original_filename.is_empty() {
            "Uploaded File".to_string()
        } else {
            file.original_filename.clone()
        };

        Self {
            name,
            size: format_file_size(file.bytes),
            format: file.format.to_uppercase(),
        }
    }
}

/// Visibility of the widget, progress and result regions.
///
/// Exactly one region is visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadPanels {
    pub widget: bool,
    pub progress: bool,
    pub result: Option<FileSummary>,
}

impl UploadPanels {
    pub fn of(flow: &UploadFlow) -> Self {
        match (flow.state(), flow.file()) {
            (UploadFlowState::InProgress, _) => Self {
                widget: false,
                progress: true,
                result: None,
            },
            (UploadFlowState::Result, Some(file)) => Self {
                widget: false,
                progress: false,
                result: Some(FileSummary::from(file)),
            },
            _ => Self {
                widget: true,
                progress: false,
                result: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::upload_flow::WidgetEvent;

    fn visible(panels: &UploadPanels) -> usize {
        [panels.widget, panels.progress, panels.result.is_some()]
            .iter()
            .filter(|v| **v)
            .count()
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_500_000), "2.38 MB");
        assert_eq!(format_file_size(16_000_000), "15.26 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }

    #[test]
    fn test_result_summary_for_midterm() {
        let mut flow = UploadFlow::new();
        flow.handle(WidgetEvent::UploadAdded);
        flow.handle(WidgetEvent::Success(UploadedFile {
            original_filename: "midterm.pdf".into(),
            bytes: 2_500_000,
            format: "pdf".into(),
            ..Default::default()
        }));

        let panels = UploadPanels::of(&flow);
        let summary = panels.result.clone().unwrap();
        assert_eq!(summary.name, "midterm.pdf");
        assert_eq!(summary.size, "2.38 MB");
        assert_eq!(summary.format, "PDF");
        assert_eq!(visible(&panels), 1);
    }

    #[test]
    fn test_summary_fallbacks() {
        let summary = FileSummary::from(&UploadedFile::default());
        assert_eq!(summary.name, "Uploaded File");
        assert_eq!(summary.size, "0 Bytes");
        assert_eq!(summary.format, "");
    }

    #[test]
    fn test_exactly_one_region_visible() {
        let mut flow = UploadFlow::new();
        assert!(UploadPanels::of(&flow).widget);
        assert_eq!(visible(&UploadPanels::of(&flow)), 1);

        flow.handle(WidgetEvent::QueuesStart);
        assert!(UploadPanels::of(&flow).progress);
        assert_eq!(visible(&UploadPanels::of(&flow)), 1);

        flow.handle(WidgetEvent::Abort);
        assert!(UploadPanels::of(&flow).widget);
        assert_eq!(visible(&UploadPanels::of(&flow)), 1);
    }
}
