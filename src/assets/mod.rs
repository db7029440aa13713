pub mod animation;
pub mod font;
pub mod image;
pub mod library;
