use core::ops::{Add, Mul};

/// Straight-alpha RGBA color. Channels are expected in `[0, 1]`.
///
/// Selection transitions blend two colors with the operators below, e.g.
/// `a * (1.0 - t) + b * t`. A color whose channels are not all finite cannot
/// be decomposed; blend operations involving one substitute fully transparent
/// rather than failing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Returns `self` with the given alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Decomposes into `[r, g, b, a]`, or `None` when any channel is
    /// non-finite.
    #[inline]
    fn channels(self) -> Option<[f32; 4]> {
        self.is_finite().then(|| [self.r, self.g, self.b, self.a])
    }
}

impl Add for Color {
    type Output = Color;

    /// Additive mix: RGB summed per channel and clamped to `1.0`; alpha is
    /// the average of the two alphas, not their sum.
    ///
    /// Fully transparent when either operand is not decomposable.
    fn add(self, rhs: Color) -> Color {
        let (Some([r1, g1, b1, a1]), Some([r2, g2, b2, a2])) = (self.channels(), rhs.channels())
        else {
            return Color::transparent();
        };

        Color::new(
            (r1 + r2).min(1.0),
            (g1 + g2).min(1.0),
            (b1 + b2).min(1.0),
            (a1 + a2) / 2.0,
        )
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    /// Scales RGB by `k`, each channel clamped to `[0, 1]`; alpha passes
    /// through unchanged.
    ///
    /// Fully transparent when the color is not decomposable.
    fn mul(self, k: f32) -> Color {
        let Some([r, g, b, a]) = self.channels() else {
            return Color::transparent();
        };

        Color::new(
            (r * k).clamp(0.0, 1.0),
            (g * k).clamp(0.0, 1.0),
            (b * k).clamp(0.0, 1.0),
            a,
        )
    }
}
