pub mod drag;
pub mod hit;
pub mod rng;
pub mod spawn;
