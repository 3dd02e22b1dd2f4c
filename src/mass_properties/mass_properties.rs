//! The combined mass, center of mass and principal inertia of a solid.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use num::Zero;

use crate::math::{Point, PrincipalInertia, Real, Vector};

/// Converts a density in kg/m³ into kg/mm³, so that masses come out in
/// kg from millimeter volumes.
pub const DENSITY_KG_M3_TO_KG_MM3: Real = 1.0e-9;

/// The local mass properties of a uniform-density solid.
///
/// Lengths are millimeters, the mass is kilograms and the inertia
/// diagonal is kg·mm² about the solid's own centroidal axes. The axes
/// are the part's local frame axes: every primitive in this crate is
/// symmetric about them, so the inertia tensor is diagonal and the
/// diagonal is all that is stored.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct MassProperties {
    /// The center of mass, expressed in the part's local frame (mm).
    pub local_com: Point,
    /// The mass, in kg.
    pub mass: Real,
    /// The inertia diagonal about the centroidal axes, in kg·mm².
    pub principal_inertia: PrincipalInertia,
}

impl MassProperties {
    /// Initializes the mass properties from a center of mass, a mass
    /// and a principal inertia diagonal.
    pub fn new(local_com: Point, mass: Real, principal_inertia: PrincipalInertia) -> Self {
        Self {
            local_com,
            mass,
            principal_inertia,
        }
    }

    /// Returns these properties with the center of mass translated by
    /// `shift`.
    ///
    /// The inertia diagonal is unchanged: it stays expressed about the
    /// solid's own centroidal axes, wherever those sit in the part
    /// frame.
    pub fn translated(mut self, shift: Vector) -> Self {
        self.local_com += shift;
        self
    }

    /// The inertia diagonal transferred to axes through `point`,
    /// parallel to the centroidal axes (parallel-axis theorem).
    ///
    /// Only valid while the products of inertia stay zero, i.e. for
    /// the axis-aligned, axially symmetric components this crate
    /// composes.
    pub(crate) fn shifted_inertia(&self, point: Point) -> PrincipalInertia {
        let d = point - self.local_com;
        let (dx2, dy2, dz2) = (d.x * d.x, d.y * d.y, d.z * d.z);
        PrincipalInertia::new(
            self.principal_inertia.x + self.mass * (dy2 + dz2),
            self.principal_inertia.y + self.mass * (dx2 + dz2),
            self.principal_inertia.z + self.mass * (dx2 + dy2),
        )
    }
}

impl Zero for MassProperties {
    fn zero() -> Self {
        Self {
            local_com: Point::origin(),
            mass: 0.0,
            principal_inertia: PrincipalInertia::zeros(),
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Add<MassProperties> for MassProperties {
    type Output = Self;

    fn add(self, other: MassProperties) -> Self {
        if self.is_zero() {
            return other;
        } else if other.is_zero() {
            return self;
        }

        let mass = self.mass + other.mass;
        let local_com = Point::from(
            (self.local_com.coords * self.mass + other.local_com.coords * other.mass) / mass,
        );
        let inertia = self.shifted_inertia(local_com) + other.shifted_inertia(local_com);

        Self {
            local_com,
            mass,
            principal_inertia: inertia,
        }
    }
}

impl AddAssign<MassProperties> for MassProperties {
    fn add_assign(&mut self, rhs: MassProperties) {
        *self = *self + rhs
    }
}

impl Sum<MassProperties> for MassProperties {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::zero(), Self::add)
    }
}

impl approx::AbsDiffEq for MassProperties {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.mass.abs_diff_eq(&other.mass, epsilon)
            && self
                .principal_inertia
                .abs_diff_eq(&other.principal_inertia, epsilon)
    }
}

impl approx::RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.local_com
            .relative_eq(&other.local_com, epsilon, max_relative)
            && self.mass.relative_eq(&other.mass, epsilon, max_relative)
            && self.principal_inertia.relative_eq(
                &other.principal_inertia,
                epsilon,
                max_relative,
            )
    }
}

#[cfg(test)]
mod test {
    use super::MassProperties;
    use crate::math::{Point, PrincipalInertia, Vector};
    use approx::assert_relative_eq;
    use num::Zero;

    #[test]
    fn add_with_zero_is_identity() {
        let props = MassProperties::new(
            Point::new(0.0, 0.0, 5.0),
            2.0,
            PrincipalInertia::new(1.0, 2.0, 3.0),
        );
        assert_eq!(props + MassProperties::zero(), props);
        assert_eq!(MassProperties::zero() + props, props);
    }

    #[test]
    fn add_is_commutative() {
        let a = MassProperties::new(
            Point::new(0.0, 0.0, -3.0),
            1.5,
            PrincipalInertia::new(4.0, 4.0, 2.0),
        );
        let b = MassProperties::new(
            Point::new(0.0, 0.0, 7.0),
            0.5,
            PrincipalInertia::new(1.0, 1.0, 0.5),
        );
        assert_relative_eq!(a + b, b + a, epsilon = 1.0e-9);
    }

    #[test]
    fn split_cuboid_recombines_exactly() {
        // Two half-cubes stacked along z must reproduce the full cube.
        use crate::shape::Cuboid;

        let density = 7850.0;
        let full = MassProperties::from_cuboid(density, &Cuboid::new(10.0, 10.0, 10.0));
        let half = MassProperties::from_cuboid(density, &Cuboid::new(10.0, 10.0, 5.0));
        let lower = half.translated(Vector::new(0.0, 0.0, -2.5));
        let upper = half.translated(Vector::new(0.0, 0.0, 2.5));

        assert_relative_eq!(lower + upper, full, epsilon = 1.0e-9);
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        let total: MassProperties = std::iter::empty().sum();
        assert!(total.is_zero());
        assert!(!total.local_com.x.is_nan());
    }
}
