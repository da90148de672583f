use crate::foundation::core::{BLANK, Symbol};
use crate::foundation::error::{FlapError, FlapResult};

/// The four flaps a flip timeline drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceRole {
    /// Upper half of the outgoing glyph; folds down.
    FoldTop,
    /// Lower half of the outgoing glyph; darkens as it gets covered.
    FoldBottom,
    /// Upper half of the incoming glyph; brightens as it is revealed.
    UnfoldTop,
    /// Lower half of the incoming glyph; unfolds into place.
    UnfoldBottom,
}

impl SurfaceRole {
    /// Every role in mount order.
    pub const ALL: [SurfaceRole; 4] = [
        SurfaceRole::FoldTop,
        SurfaceRole::FoldBottom,
        SurfaceRole::UnfoldTop,
        SurfaceRole::UnfoldBottom,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FoldTop => "fold_top",
            Self::FoldBottom => "fold_bottom",
            Self::UnfoldTop => "unfold_top",
            Self::UnfoldBottom => "unfold_bottom",
        }
    }
}

/// Visual state of a single flap.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Surface {
    /// Glyph printed on the flap.
    pub symbol: Symbol,
    /// Rotation about the horizontal axis, in degrees.
    pub rotate_x_deg: f64,
    /// Brightness multiplier in `[0, 1]`.
    pub brightness: f64,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            symbol: BLANK,
            rotate_x_deg: 0.0,
            brightness: 1.0,
        }
    }
}

impl Surface {
    /// Reset animated properties, keeping the glyph.
    pub fn clear_props(&mut self) {
        self.rotate_x_deg = 0.0;
        self.brightness = 1.0;
    }
}

/// Slots for the four flaps of one slot. A flap is `None` until the host mounts it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceMount {
    fold_top: Option<Surface>,
    fold_bottom: Option<Surface>,
    unfold_top: Option<Surface>,
    unfold_bottom: Option<Surface>,
}

impl SurfaceMount {
    /// A mount with every flap attached.
    pub fn mounted() -> Self {
        let mut m = Self::default();
        m.mount_all();
        m
    }

    /// Attach a fresh flap for `role` (replacing any existing one).
    pub fn mount(&mut self, role: SurfaceRole) {
        *self.slot_mut(role) = Some(Surface::default());
    }

    /// Attach every flap that is not mounted yet.
    pub fn mount_all(&mut self) {
        for role in SurfaceRole::ALL {
            let slot = self.slot_mut(role);
            if slot.is_none() {
                *slot = Some(Surface::default());
            }
        }
    }

    /// Detach every flap.
    pub fn unmount_all(&mut self) {
        *self = Self::default();
    }

    /// Whether all four flaps are attached.
    pub fn is_complete(&self) -> bool {
        SurfaceRole::ALL.iter().all(|&r| self.get(r).is_some())
    }

    /// Read one flap.
    pub fn get(&self, role: SurfaceRole) -> Option<&Surface> {
        match role {
            SurfaceRole::FoldTop => self.fold_top.as_ref(),
            SurfaceRole::FoldBottom => self.fold_bottom.as_ref(),
            SurfaceRole::UnfoldTop => self.unfold_top.as_ref(),
            SurfaceRole::UnfoldBottom => self.unfold_bottom.as_ref(),
        }
    }

    fn slot_mut(&mut self, role: SurfaceRole) -> &mut Option<Surface> {
        match role {
            SurfaceRole::FoldTop => &mut self.fold_top,
            SurfaceRole::FoldBottom => &mut self.fold_bottom,
            SurfaceRole::UnfoldTop => &mut self.unfold_top,
            SurfaceRole::UnfoldBottom => &mut self.unfold_bottom,
        }
    }

    /// Borrow all four flaps, or fail naming the first missing one.
    pub fn require(&mut self) -> FlapResult<MountedSurfaces<'_>> {
        if let Some(missing) = SurfaceRole::ALL.into_iter().find(|&r| self.get(r).is_none()) {
            return Err(FlapError::resource_unavailable(format!(
                "{} surface is not mounted",
                missing.as_str()
            )));
        }
        match (
            self.fold_top.as_mut(),
            self.fold_bottom.as_mut(),
            self.unfold_top.as_mut(),
            self.unfold_bottom.as_mut(),
        ) {
            (Some(fold_top), Some(fold_bottom), Some(unfold_top), Some(unfold_bottom)) => {
                Ok(MountedSurfaces {
                    fold_top,
                    fold_bottom,
                    unfold_top,
                    unfold_bottom,
                })
            }
            _ => Err(FlapError::resource_unavailable("surfaces are not mounted")),
        }
    }
}

/// Mutable view over a complete set of flaps.
#[derive(Debug)]
pub struct MountedSurfaces<'a> {
    /// Outgoing upper half.
    pub fold_top: &'a mut Surface,
    /// Outgoing lower half.
    pub fold_bottom: &'a mut Surface,
    /// Incoming upper half.
    pub unfold_top: &'a mut Surface,
    /// Incoming lower half.
    pub unfold_bottom: &'a mut Surface,
}

impl MountedSurfaces<'_> {
    /// Print `outgoing` on the fold flaps and `incoming` on the unfold flaps.
    pub fn bind_pair(&mut self, outgoing: Symbol, incoming: Symbol) {
        self.fold_top.symbol = outgoing;
        self.fold_bottom.symbol = outgoing;
        self.unfold_top.symbol = incoming;
        self.unfold_bottom.symbol = incoming;
    }

    /// Pose the flaps for `progress` through one flip (linear in time).
    pub fn pose(&mut self, progress: f64) {
        let p = progress.clamp(0.0, 1.0);
        self.unfold_bottom.rotate_x_deg = 180.0 * (1.0 - p);
        self.unfold_top.brightness = p;
        self.fold_top.rotate_x_deg = -180.0 * p;
        self.fold_bottom.brightness = 1.0 - p;
    }

    /// Reset animated properties on every flap.
    pub fn clear_props(&mut self) {
        self.fold_top.clear_props();
        self.fold_bottom.clear_props();
        self.unfold_top.clear_props();
        self.unfold_bottom.clear_props();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flip/surface.rs"]
mod tests;
