pub mod dashboard;
pub mod draft_fields;
pub mod header;
pub mod planned_section;
pub mod reports_panel;
pub mod select_field;
pub mod settings_panel;
pub mod transaction_list;
pub mod transaction_modal;
