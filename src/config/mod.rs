//! Style and timing configuration.
//!
//! Holds everything the renderer queries when applying effects: the
//! per-state color tables, the corner radius, and the highlight
//! animation duration tiers. Pure data; nothing here touches the state
//! machine.

use std::collections::HashMap;

use crate::model::ControlStateFlag;

/// An opaque sRGB color value.
///
/// The core never blends or converts colors; it only stores what the
/// host hands it and hands it back when the renderer asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel, 0..=255.
    pub r: u8,
    /// Green channel, 0..=255.
    pub g: u8,
    /// Blue channel, 0..=255.
    pub b: u8,
}

impl Color {
    /// Color from a packed `0xRRGGBB` value.
    pub const fn rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }
}

/// Highlight animation duration tiers, in seconds.
///
/// A duration of 0 means apply immediately with no animation. Non-zero
/// durations are a hint to the renderer's ease-out animation facility;
/// the core fires them and forgets them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightDurations {
    /// Background segment press began.
    pub segment_begin: f32,
    /// Press moved between two background segments.
    pub segment_change: f32,
    /// Background segment press ended or was cancelled.
    pub segment_end: f32,
    /// Indicator drag began (control-level highlight).
    pub control_begin: f32,
    /// Indicator drag ended or was cancelled.
    pub control_end: f32,
    /// Indicator fade-in when leaving the no-selection state.
    pub indicator_appear: f32,
}

impl Default for HighlightDurations {
    fn default() -> Self {
        Self {
            segment_begin: 0.1,
            segment_change: 0.1,
            segment_end: 0.25,
            control_begin: 0.25,
            control_end: 0.25,
            indicator_appear: 0.25,
        }
    }
}

/// Color tables and corner radius for the control and its segments.
///
/// Defaults match the stock appearance: a light gray control that
/// darkens while the indicator is dragged, a faint blue press tint on
/// background segments, and a solid blue indicator with white labels
/// under the mask.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    background_colors: HashMap<ControlStateFlag, Color>,
    segment_colors: HashMap<ControlStateFlag, Color>,
    title_colors: HashMap<ControlStateFlag, Color>,
    /// Corner radius applied to the control, the indicator, the mask,
    /// and every segment element.
    pub corner_radius: f32,
    /// Animation duration tiers.
    pub durations: HighlightDurations,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let background_colors = HashMap::from([
            (ControlStateFlag::Normal, Color::rgb(0xF1F2F2)),
            (ControlStateFlag::Highlighted, Color::rgb(0xD5D6D9)),
        ]);
        let segment_colors = HashMap::from([
            (ControlStateFlag::Highlighted, Color::rgb(0xD9EBFF)),
            (ControlStateFlag::Selected, Color::rgb(0x007AFF)),
        ]);
        let title_colors = HashMap::from([
            (ControlStateFlag::Normal, Color::rgb(0x000000)),
            (ControlStateFlag::Highlighted, Color::rgb(0x000000)),
            (ControlStateFlag::Selected, Color::rgb(0xFFFFFF)),
        ]);
        Self {
            background_colors,
            segment_colors,
            title_colors,
            corner_radius: 8.0,
            durations: HighlightDurations::default(),
        }
    }
}

impl StyleConfig {
    /// Control background color for `state`, if one is configured.
    pub fn background_color(&self, state: ControlStateFlag) -> Option<Color> {
        self.background_colors.get(&state).copied()
    }

    /// Segment background color for `state`, if one is configured.
    pub fn segment_color(&self, state: ControlStateFlag) -> Option<Color> {
        self.segment_colors.get(&state).copied()
    }

    /// Segment title color for `state`, if one is configured.
    pub fn title_color(&self, state: ControlStateFlag) -> Option<Color> {
        self.title_colors.get(&state).copied()
    }

    /// Set or clear the control background color for `state`.
    pub fn set_background_color(&mut self, color: Option<Color>, state: ControlStateFlag) {
        match color {
            Some(color) => self.background_colors.insert(state, color),
            None => self.background_colors.remove(&state),
        };
    }

    /// Set or clear the segment background color for `state`.
    pub fn set_segment_color(&mut self, color: Option<Color>, state: ControlStateFlag) {
        match color {
            Some(color) => self.segment_colors.insert(state, color),
            None => self.segment_colors.remove(&state),
        };
    }

    /// Set or clear the segment title color for `state`.
    pub fn set_title_color(&mut self, color: Option<Color>, state: ControlStateFlag) {
        match color {
            Some(color) => self.title_colors.insert(state, color),
            None => self.title_colors.remove(&state),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_unpacks_channels() {
        let color = Color::rgb(0xD9EBFF);
        assert_eq!((color.r, color.g, color.b), (0xD9, 0xEB, 0xFF));
    }

    #[test]
    fn default_durations_match_tiers() {
        let durations = HighlightDurations::default();
        assert_eq!(durations.segment_begin, 0.1);
        assert_eq!(durations.segment_change, 0.1);
        assert_eq!(durations.segment_end, 0.25);
        assert_eq!(durations.control_begin, 0.25);
        assert_eq!(durations.control_end, 0.25);
    }

    #[test]
    fn default_style_has_stock_palette() {
        let style = StyleConfig::default();
        assert_eq!(
            style.background_color(ControlStateFlag::Normal),
            Some(Color::rgb(0xF1F2F2))
        );
        assert_eq!(
            style.segment_color(ControlStateFlag::Selected),
            Some(Color::rgb(0x007AFF))
        );
        assert_eq!(style.segment_color(ControlStateFlag::Normal), None);
        assert_eq!(style.corner_radius, 8.0);
    }

    #[test]
    fn setters_overwrite_and_clear() {
        let mut style = StyleConfig::default();
        style.set_segment_color(Some(Color::rgb(0xFF0000)), ControlStateFlag::Selected);
        assert_eq!(
            style.segment_color(ControlStateFlag::Selected),
            Some(Color::rgb(0xFF0000))
        );
        style.set_segment_color(None, ControlStateFlag::Selected);
        assert_eq!(style.segment_color(ControlStateFlag::Selected), None);
    }
}
