pub mod report_form;
pub mod report_table;

pub use report_form::ReportFormCard;
pub use report_table::ReportTable;
