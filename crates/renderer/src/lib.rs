//! Raster rendering for the buoy observation map.
//!
//! Implements the pieces of the figure:
//! - RGBA canvas primitives (lines, polygon fill, markers)
//! - Named color maps
//! - Simplified basemap layers (coastline, land, borders, lakes, rivers)
//! - Scatter pass for station markers
//! - Horizontal color bar with labels
//! - PNG encoding

pub mod basemap;
pub mod canvas;
pub mod colorbar;
pub mod colormap;
pub mod png;
pub mod scatter;
pub mod text;

pub use basemap::Basemap;
pub use canvas::{Canvas, Color};
pub use colormap::{ColorScale, Colormap};
