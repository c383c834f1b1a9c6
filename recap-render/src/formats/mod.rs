//! Built-in output formats

pub mod html;
pub mod text;

pub use html::HtmlFormat;
pub use text::TextFormat;
