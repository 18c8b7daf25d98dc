pub mod block;
pub mod layout;
pub mod markup;
pub mod rich_text;
