//! UIコンポーネント

pub mod header;
pub mod notice;
pub mod recognition_panel;
pub mod register_form;
pub mod student_list;
