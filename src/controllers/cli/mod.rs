pub mod render;

pub use render::CliRenderController;
