/// Widest viewport, in logical pixels, that still uses the mobile layout.
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

/// Layout family selected from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    /// Widths at or below `breakpoint` are mobile, everything wider is
    /// desktop.
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width <= breakpoint {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, ViewportMode::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MOBILE_BREAKPOINT, ViewportMode};

    #[test]
    fn given_any_width_when_mode_derived_then_mobile_iff_at_or_below_breakpoint()
     {
        for width in 0..=2048 {
            let width = width as f32;
            let mode =
                ViewportMode::from_width(width, DEFAULT_MOBILE_BREAKPOINT);

            assert_eq!(
                mode.is_mobile(),
                width <= 768.0,
                "unexpected mode {mode:?} for width {width}"
            );
        }
    }

    #[test]
    fn given_fractional_width_just_above_breakpoint_when_mode_derived_then_desktop()
     {
        assert_eq!(
            ViewportMode::from_width(768.5, DEFAULT_MOBILE_BREAKPOINT),
            ViewportMode::Desktop
        );
        assert_eq!(
            ViewportMode::from_width(768.0, DEFAULT_MOBILE_BREAKPOINT),
            ViewportMode::Mobile
        );
    }
}
