mod aabb;
mod color;
mod ray;

pub use aabb::AABB;
pub use color::{Rgb, Swatch, HARDWARE_GRAY, PALETTE};
pub use ray::{intersect_aabb, intersect_frustum, intersect_sphere, HIT_EPSILON};
