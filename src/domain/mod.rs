pub mod block;
pub mod page;
pub mod rich_text;

pub use block::{Block, BlockKind};
pub use page::Page;
pub use rich_text::{Annotations, RichText};
