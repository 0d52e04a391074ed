// Marching squares contour algorithm: case table and incremental engine
mod cases;
mod engine;
mod types;

pub use cases::*;
pub use engine::*;
pub use types::*;
