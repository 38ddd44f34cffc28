mod text_report;

pub use text_report::TextReport;
