//! Canvas 2D rendering module
//!
//! Implements [`Surface`](crate::surface::Surface) over a browser canvas.

pub mod canvas2d;

pub use canvas2d::Canvas2dSurface;
