pub mod cpp;
pub mod yaml;
