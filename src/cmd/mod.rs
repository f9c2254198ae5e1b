mod build;
mod clean;
mod click;
mod render;
mod search;

pub use build::build;
pub use clean::clean;
pub use click::click;
pub use render::render;
pub use search::search;
