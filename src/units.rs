use derive_more::{Add, AddAssign, Display, From, Into, Sum};

/// A measurement in CSS pixels, the unit the measurement backends and the
/// paragraph engine agree on. Paddings are signed, so `Px` can be negative.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Display, From, Into, Sum,
)]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// The larger of two measurements
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// The smaller of two measurements
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    /// Round to the nearest whole pixel
    pub fn round(self) -> Px {
        Px(self.0.round())
    }

    /// Round up to the next whole pixel
    pub fn ceil(self) -> Px {
        Px(self.0.ceil())
    }

    /// Round down to the previous whole pixel
    pub fn floor(self) -> Px {
        Px(self.0.floor())
    }
}

impl std::ops::Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Sub<f32> for Px {
    type Output = Px;
    fn sub(self, rhs: f32) -> Px {
        Px(self.0 - rhs)
    }
}

impl std::ops::Mul<f32> for Px {
    type Output = Px;
    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl std::ops::Mul<Px> for f32 {
    type Output = Px;
    fn mul(self, rhs: Px) -> Px {
        Px(self * rhs.0)
    }
}

impl std::ops::Div<f32> for Px {
    type Output = Px;
    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

/// The ratio between two measurements, dimensionless
impl std::ops::Div<Px> for Px {
    type Output = f32;
    fn div(self, rhs: Px) -> f32 {
        self.0 / rhs.0
    }
}
