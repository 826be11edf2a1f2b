pub mod header;
pub mod history_list;
pub mod processing_view;
pub mod progress_bar;
pub mod result_card;
pub mod settings_panel;
pub mod upload_area;
pub mod voice_panel;
