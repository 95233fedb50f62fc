//! Map projection for buoy plotting.
//!
//! Implements the Lambert Conformal Conic projection from scratch without
//! external dependencies, plus the viewport mapping from projected meters to
//! output pixels.

pub mod lambert;
pub mod viewport;

pub use lambert::LambertConformal;
pub use viewport::Viewport;
