mod builtin;
mod catalog;
mod error;
mod render;
mod types;

pub use catalog::{StaticCatalog, TemplateCatalog};
pub use error::*;
pub use render::{fill, fill_html, render, render_html, render_story};
pub use types::{Field, FieldKind, Template};
