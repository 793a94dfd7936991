pub mod analysis_form;
pub mod detail_modal;
pub mod error_panel;
pub mod file_list;
pub mod header;
pub mod loading;
pub mod particle_canvas;
pub mod results;
pub mod upload_area;
