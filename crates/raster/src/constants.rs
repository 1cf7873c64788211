/// Base disk radius as a fraction of the icon size.
pub const BODY_RADIUS_RATIO: f32 = 0.38;

/// Highlight offset from the center, as a fraction of the body radius (applied on both axes).
pub const HIGHLIGHT_OFFSET_RATIO: f32 = 0.3;

/// Highlight radius as a fraction of the body radius.
pub const HIGHLIGHT_RADIUS_RATIO: f32 = 0.3;

/// Stem width as a fraction of the icon size (at least one pixel).
pub const STEM_WIDTH_RATIO: f32 = 0.1;

/// How far the stem rises above the body, as a fraction of the icon size.
pub const STEM_RISE_RATIO: f32 = 0.1;

/// How far the stem sinks into the body, as a fraction of the icon size.
pub const STEM_OVERLAP_RATIO: f32 = 0.02;

/// Hour hand length as a fraction of the body radius.
pub const HOUR_HAND_RATIO: f32 = 0.5;

/// Minute hand length as a fraction of the body radius.
pub const MINUTE_HAND_RATIO: f32 = 0.65;

/// Center cap radius divisor (size / 16, at least one pixel).
pub const CAP_RADIUS_DIVISOR: u32 = 16;
