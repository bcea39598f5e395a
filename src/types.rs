//! Vector types
//!
//! Cartesian and spherical vectors in two and three dimensions. In 3D, z
//! points up. Spherical `polar` angles are measured from the +z axis in 3D
//! and from the +x axis in 2D.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A 3 dimensional Cartesian vector
///
/// # Examples
/// ```rust
/// use ballistics_calculator::types::Vec3D;
/// let v = Vec3D::new(1.0, 2.0, 3.0);
///
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v.y, 2.0);
/// assert_eq!(v.z, 3.0);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3D {
    /// Component along x
    pub x: f64,

    /// Component along y
    pub y: f64,

    /// Component along z (up)
    pub z: f64,
}

/// A 2 dimensional Cartesian vector
///
/// # Examples
/// ```rust
/// use ballistics_calculator::types::Vec2D;
/// let v = Vec2D::new(1.0, 2.0);
///
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v.y, 2.0);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2D {
    /// Component along x
    pub x: f64,

    /// Component along y
    pub y: f64,
}

/// A 3 dimensional spherical vector
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3DSphere {
    /// Horizontal angle from the x axis towards the y axis, in radians
    pub azimuth: f64,

    /// Angle from the z axis, in radians
    pub polar: f64,

    /// Distance from origin
    pub radius: f64,
}

/// A 2 dimensional polar vector
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2DSphere {
    /// Angle from the x axis, in radians
    pub polar: f64,

    /// Distance from origin
    pub radius: f64,
}

impl Vec3D {
    /// The zero vector
    pub const ZERO: Vec3D = Vec3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new 3D vector
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3D {
        Vec3D { x, y, z }
    }

    /// Returns the length of the vector
    ///
    /// # Examples
    /// ```rust
    /// use ballistics_calculator::types::Vec3D;
    /// let v = Vec3D::new(3.0, 4.0, 0.0);
    /// assert_eq!(v.length(), 5.0);
    /// ```
    pub fn length(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Returns the length on the xy plane only
    ///
    /// # Examples
    /// ```rust
    /// use ballistics_calculator::types::Vec3D;
    /// let v = Vec3D::new(3.0, 4.0, 3.0);
    /// assert_eq!(v.length_xy(), 5.0);
    /// ```
    pub fn length_xy(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rescales the vector to `new` while keeping its direction
    ///
    /// A negative length reverses the direction. The zero vector has no
    /// direction and becomes `(0, 0, new)`.
    ///
    /// # Examples
    /// ```rust
    /// use ballistics_calculator::types::Vec3D;
    /// let mut v = Vec3D::new(3.0, 4.0, 3.0);
    ///
    /// v.update_length(15.0);
    /// assert_eq!(v.length().round(), 15.0);
    /// ```
    pub fn update_length(&mut self, new: f64) {
        let current = self.length();
        if current == 0.0 {
            *self = Vec3D::new(0.0, 0.0, new);
            return;
        }
        *self = *self * (new / current);
    }

    /// Projects the vector onto the vertical plane that contains it
    ///
    /// The 2D x is the horizontal distance, the 2D y is the height.
    ///
    /// # Examples
    /// ```rust
    /// use ballistics_calculator::types::Vec3D;
    /// let v2d = Vec3D::new(3.0, 4.0, 3.0).to_2d();
    ///
    /// assert_eq!(v2d.x, 5.0);
    /// assert_eq!(v2d.y, 3.0);
    /// ```
    pub fn to_2d(&self) -> Vec2D {
        Vec2D {
            x: self.length_xy(),
            y: self.z,
        }
    }

    /// Converts the Cartesian vector to spherical coordinates
    ///
    /// # Examples
    /// ```rust
    /// use ballistics_calculator::types::Vec3D;
    /// let s = Vec3D::new(1.0, 1.0, 1.0).to_sphere();
    ///
    /// assert_eq!(s.radius, 3f64.sqrt());
    /// assert!((s.azimuth - 45f64.to_radians()).abs() < 1e-12);
    /// ```
    pub fn to_sphere(&self) -> Vec3DSphere {
        Vec3DSphere {
            radius: self.length(),
            azimuth: self.y.atan2(self.x),
            polar: self.length_xy().atan2(self.z),
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Vec3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: &Vec3D) -> Vec3D {
        Vec3D {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Unit vector in the same direction, `None` for the zero vector
    pub fn normalized(&self) -> Option<Vec3D> {
        let len = self.length();
        (len > 0.0).then(|| *self / len)
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Vec3DSphere {
    /// Converts the spherical vector to a Cartesian vector
    ///
    /// # Examples
    /// ```rust
    /// use ballistics_calculator::types::Vec3DSphere;
    /// let s = Vec3DSphere {
    ///     radius: 5.0,
    ///     azimuth: 45f64.to_radians(),
    ///     polar: 45f64.to_radians(),
    /// };
    ///
    /// let back = s.to_vec().to_sphere();
    ///
    /// assert!((back.radius - 5.0).abs() < 1e-12);
    /// assert_eq!(back.azimuth.to_degrees().round(), 45.);
    /// assert_eq!(back.polar.to_degrees().round(), 45.);
    /// ```
    pub fn to_vec(&self) -> Vec3D {
        let (sin_pol, cos_pol) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        Vec3D {
            x: self.radius * cos_az * sin_pol,
            y: self.radius * sin_az * sin_pol,
            z: self.radius * cos_pol,
        }
    }
}

impl Vec2D {
    /// The zero vector
    pub const ZERO: Vec2D = Vec2D { x: 0.0, y: 0.0 };

    /// Creates a new 2D vector
    pub const fn new(x: f64, y: f64) -> Vec2D {
        Vec2D { x, y }
    }

    /// Returns the length of the vector
    ///
    /// # Examples
    /// ```rust
    /// use ballistics_calculator::types::Vec2D;
    /// assert_eq!(Vec2D::new(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rescales the vector to `new` while keeping its direction
    ///
    /// The zero vector becomes `(new, 0)`.
    pub fn update_length(&mut self, new: f64) {
        let current = self.length();
        if current == 0.0 {
            *self = Vec2D::new(new, 0.0);
            return;
        }
        *self = *self * (new / current);
    }

    /// Converts the Cartesian vector to polar coordinates
    pub fn to_sphere(&self) -> Vec2DSphere {
        Vec2DSphere {
            polar: self.y.atan2(self.x),
            radius: self.length(),
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Vec2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Vec2DSphere {
    /// Converts the polar vector to a Cartesian vector
    pub fn to_vec(&self) -> Vec2D {
        let (sin, cos) = self.polar.sin_cos();
        Vec2D {
            x: self.radius * cos,
            y: self.radius * sin,
        }
    }
}

macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl Add for $ty {
            type Output = $ty;
            fn add(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = $ty;
            fn sub(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Neg for $ty {
            type Output = $ty;
            fn neg(self) -> $ty {
                $ty { $($field: -self.$field),+ }
            }
        }

        impl Mul<f64> for $ty {
            type Output = $ty;
            fn mul(self, rhs: f64) -> $ty {
                $ty { $($field: self.$field * rhs),+ }
            }
        }

        impl Div<f64> for $ty {
            type Output = $ty;
            fn div(self, rhs: f64) -> $ty {
                $ty { $($field: self.$field / rhs),+ }
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: $ty) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: $ty) {
                $(self.$field -= rhs.$field;)+
            }
        }
    };
}

impl_vector_ops!(Vec3D { x, y, z });
impl_vector_ops!(Vec2D { x, y });
