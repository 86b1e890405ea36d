pub mod app;
pub mod camera_controls;
pub mod scene_view;
pub mod settings_modal;
pub mod stats_panel;
