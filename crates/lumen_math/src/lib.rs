// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod random;
mod ray;
mod vec;

pub use interval::Interval;
pub use random::{
    gen_f32, gen_range_f32, random_in_unit_disk, random_in_unit_sphere, random_on_hemisphere,
    random_unit_vector, random_vec3, random_vec3_range,
};
pub use ray::Ray;
pub use vec::{reflect, refract, VecExt};

/// A position in world space.
pub type Point3 = Vec3;

/// Linear RGB radiance or albedo (channels typically 0-1).
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_aliases_are_vec3() {
        let p: Point3 = Point3::new(0.0, 1.0, 0.0);
        let c: Color = Color::ONE;
        assert_eq!(p + c, Vec3::new(1.0, 2.0, 1.0));
    }
}
