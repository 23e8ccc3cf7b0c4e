pub mod render;
pub mod report;

pub use report::ReportService;
