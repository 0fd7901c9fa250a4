pub mod components;
pub mod screens;
pub mod text;
pub mod theme;

pub use text::report_to_text;
pub use theme::Theme;
