mod analysis_service;
mod report;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use report::{render_markdown, report_file_name};
