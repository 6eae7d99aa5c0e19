pub mod scene;
pub mod surface;
pub mod ticker;
