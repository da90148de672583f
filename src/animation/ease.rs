/// Curve a scrubber drive follows from its start to its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// Fast start, soft landing. Flip transitions use this unless a line says otherwise.
    OutQuad,
}

impl Ease {
    /// Eased fraction of the distance covered at time fraction `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => t * (2.0 - t),
        }
    }

    /// Point between `from` and `to` at time fraction `t`.
    pub fn lerp(self, from: f64, to: f64, t: f64) -> f64 {
        from + (to - from) * self.apply(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
