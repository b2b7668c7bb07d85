pub mod document;
pub mod pipeline;
pub mod render;
