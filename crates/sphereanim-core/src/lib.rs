//! Platform-free core of sphereanim: the sphere simulation, its proximity
//! graph, the viewer camera and the [`Renderer`] seam the front-end fills in.

pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod helpers;
pub mod render;
pub mod scene;
pub mod sphere;

pub use camera::*;
pub use color::Color;
pub use config::*;
pub use constants::*;
pub use helpers::*;
pub use render::*;
pub use scene::*;
pub use sphere::*;
