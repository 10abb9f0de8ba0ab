use cuboidviz_core::figure::Palette;
use serde::{Deserialize, Serialize};

/// Pixel area from which outlines are drawn 2 px wide.
pub const MEDIUM_AREA: u64 = 1_000_000;
/// Pixel area from which outlines are drawn 3 px wide.
pub const LARGE_AREA: u64 = 3_000_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub palette: Palette,
    /// Fixed outline width; when unset it follows the image size.
    pub line_width: Option<u32>,
}

impl RenderConfig {
    pub fn line_width(&self, width: u32, height: u32) -> u32 {
        self.line_width
            .unwrap_or_else(|| line_width_for(width, height))
            .max(1)
    }
}

/// Outline width for an image: 1 px below one megapixel, 2 px up to three
/// megapixels, 3 px beyond.
pub fn line_width_for(width: u32, height: u32) -> u32 {
    let area = u64::from(width) * u64::from(height);
    if area >= LARGE_AREA {
        3
    } else if area >= MEDIUM_AREA {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_switch_exactly_at_thresholds() {
        assert_eq!(1, line_width_for(500, 500));
        assert_eq!(1, line_width_for(999_999, 1));
        assert_eq!(2, line_width_for(1000, 1000));
        assert_eq!(2, line_width_for(1_000_001, 1));
        assert_eq!(2, line_width_for(2_999_999, 1));
        assert_eq!(3, line_width_for(3_000_000, 1));
        assert_eq!(3, line_width_for(2000, 1500));
        assert_eq!(3, line_width_for(4000, 3000));
    }

    #[test]
    fn area_does_not_overflow() {
        assert_eq!(3, line_width_for(u32::MAX, u32::MAX));
        assert_eq!(1, line_width_for(0, u32::MAX));
    }

    #[test]
    fn override_wins_but_never_drops_below_one() {
        let mut cfg = RenderConfig {
            line_width: Some(5),
            ..RenderConfig::default()
        };
        assert_eq!(5, cfg.line_width(10, 10));
        cfg.line_width = Some(0);
        assert_eq!(1, cfg.line_width(10, 10));
        cfg.line_width = None;
        assert_eq!(2, cfg.line_width(1000, 1000));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: RenderConfig =
            serde_json::from_str(r##"{"palette": {"face": "#00ff00"}}"##).unwrap();
        assert_eq!(None, cfg.line_width);
        assert_eq!("#00ff00", cfg.palette.face.to_string());
        assert_eq!(Palette::default().guide, cfg.palette.guide);
    }
}
