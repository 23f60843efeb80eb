mod vec3;

pub use vec3::Vec3;

pub const PI: f64 = std::f64::consts::PI;

pub fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
