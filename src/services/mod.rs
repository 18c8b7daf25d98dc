pub mod blog;
pub mod export;

pub use blog::{BlogService, PageState};
pub use export::export_site;
