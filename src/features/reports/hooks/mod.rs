pub mod use_report_form;

pub use use_report_form::*;
