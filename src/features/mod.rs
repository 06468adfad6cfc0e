pub mod districts;
pub mod map;
pub mod report_form;
