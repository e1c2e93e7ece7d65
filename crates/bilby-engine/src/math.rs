//! Fixed-layout math records for the engine boundary.
//!
//! These are data-interchange shapes, not a vector math library; arithmetic
//! happens on the [`glam`] side after conversion. Every record is `#[repr(C)]`
//! and `Pod` because it is copied by value across the C ABI, so field order,
//! size and alignment are load-bearing and asserted by the layout tests below.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Logical 3-component vector, 12 bytes.
///
/// When exchanging memory with the native engine's aligned vec3 use
/// [`Vec3A`] instead; the two differ only in the trailing padding float.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 16-byte 3-component vector matching the native engine's aligned layout.
///
/// The fourth float is padding, not a logical component: it is never read,
/// equality ignores it, and conversions zero it. Buffers shared bit-for-bit
/// with the engine use this type; everything else uses [`Vec3`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct Vec3A {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    _pad: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Integer surface resolution, as handed to resize notifications.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Extent2 {
    pub width: u32,
    pub height: u32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Vec3A {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, _pad: 0.0 }
    }
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl Extent2 {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl PartialEq for Vec3A {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl From<Vec3> for Vec3A {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3A> for Vec3 {
    fn from(v: Vec3A) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec2> for Vec2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3A> for Vec3A {
    fn from(v: glam::Vec3A) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3A> for glam::Vec3A {
    fn from(v: Vec3A) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec4> for Vec4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vec4> for glam::Vec4 {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn test_record_layouts() {
        assert_eq!(size_of::<Vec2>(), 8);
        assert_eq!(size_of::<Vec3>(), 12);
        assert_eq!(size_of::<Vec3A>(), 16);
        assert_eq!(size_of::<Vec4>(), 16);
        assert_eq!(size_of::<Extent2>(), 8);

        assert_eq!(align_of::<Vec2>(), 4);
        assert_eq!(align_of::<Vec3>(), 4);
        assert_eq!(align_of::<Vec3A>(), 4);
        assert_eq!(align_of::<Vec4>(), 4);
        assert_eq!(align_of::<Extent2>(), 4);

        assert_eq!(offset_of!(Vec4, x), 0);
        assert_eq!(offset_of!(Vec4, y), 4);
        assert_eq!(offset_of!(Vec4, z), 8);
        assert_eq!(offset_of!(Vec4, w), 12);
        assert_eq!(offset_of!(Vec3A, z), 8);
        assert_eq!(offset_of!(Extent2, height), 4);
    }

    #[test]
    fn test_bytemuck_round_trip() {
        let v = Vec4::new(0.0, -13.5, 0.125, 1e30);
        let back: Vec4 = *bytemuck::from_bytes(bytemuck::bytes_of(&v));
        assert_eq!(v, back);

        let v = Vec3::new(-0.0, f32::MIN_POSITIVE, 42.75);
        let back: Vec3 = *bytemuck::from_bytes(bytemuck::bytes_of(&v));
        assert_eq!(v, back);

        let e = Extent2::new(1920, 1080);
        let back: Extent2 = *bytemuck::from_bytes(bytemuck::bytes_of(&e));
        assert_eq!(e, back);
    }

    #[test]
    fn test_vec3_widening_preserves_components() {
        let v = Vec3::new(1.0, -2.5, 0.75);
        let wide = Vec3A::from(v);
        assert_eq!(wide, Vec3A::new(1.0, -2.5, 0.75));
        assert_eq!(Vec3::from(wide), v);
    }

    #[test]
    fn test_glam_conversions() {
        let v: glam::Vec3 = Vec3::new(3.0, 4.0, 5.0).into();
        assert_eq!(v.length(), glam::Vec3::new(3.0, 4.0, 5.0).length());
        let back: Vec3 = v.into();
        assert_eq!(back, Vec3::new(3.0, 4.0, 5.0));
    }
}
