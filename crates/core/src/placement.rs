//! Brand-overlay placement resolver.
//!
//! Maps a presentation aspect ratio and a content-safety hint to the
//! [`Placement`] used when compositing the brand overlay onto an asset, and
//! derives the positioning transform ([`OverlayStyle`]) a renderer applies.
//!
//! The resolver is a lookup over three fixed presets with a never-fail
//! fallback: an unrecognized ratio degrades to the square preset rather than
//! erroring. When the caller signals that the bottom region of the asset
//! carries content the overlay must not obscure (subtitles, faces), the
//! resolved placement is moved to a fixed top-safe vertical position.

use serde::{Deserialize, Serialize};

/// Vertical position (percent from top) used when the bottom of the asset
/// must stay clear.
pub const TOP_SAFE_Y: f64 = 12.0;

const PRESET_16_9: Placement = Placement {
    x: 92.0,
    y: 88.0,
    width: 12.0,
    opacity: 0.9,
    alignment: Alignment::Right,
};

const PRESET_9_16: Placement = Placement {
    x: 50.0,
    y: 92.0,
    width: 25.0,
    opacity: 0.85,
    alignment: Alignment::Center,
};

const PRESET_1_1: Placement = Placement {
    x: 85.0,
    y: 85.0,
    width: 18.0,
    opacity: 0.9,
    alignment: Alignment::Right,
};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Horizontal alignment of the brand overlay within the asset frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Supported presentation aspect ratios.
///
/// Parsing is lenient by design: any string outside the supported set maps to
/// [`AspectRatio::Square`] so the resolver can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    /// All supported ratios.
    pub const ALL: &'static [AspectRatio] =
        &[AspectRatio::Wide, AspectRatio::Tall, AspectRatio::Square];

    /// Parse a ratio string, falling back to `1:1` for anything unrecognized.
    pub fn parse_or_square(s: &str) -> Self {
        match s {
            "16:9" => AspectRatio::Wide,
            "9:16" => AspectRatio::Tall,
            _ => AspectRatio::Square,
        }
    }

    /// Canonical `w:h` string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
            AspectRatio::Square => "1:1",
        }
    }
}

/// Position, size, and transparency of the brand overlay relative to the
/// rendered asset's bounding box.
///
/// `x`, `y`, and `width` are percentages in `[0, 100]`; `opacity` is in
/// `[0, 1]`. Returned by value and immutable once resolved — callers derive
/// modified copies rather than mutating shared state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub opacity: f64,
    pub alignment: Alignment,
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Resolve the overlay placement for an aspect ratio.
///
/// `avoid_bottom_content` signals that the bottom region of the asset carries
/// content the overlay must not cover; when set, the resolved placement is
/// returned with `y` forced to [`TOP_SAFE_Y`] and every other field (including
/// alignment) unchanged.
pub fn resolve(ratio: AspectRatio, avoid_bottom_content: bool) -> Placement {
    let base = match ratio {
        AspectRatio::Wide => PRESET_16_9,
        AspectRatio::Tall => PRESET_9_16,
        AspectRatio::Square => PRESET_1_1,
    };

    if avoid_bottom_content {
        return Placement {
            y: TOP_SAFE_Y,
            ..base
        };
    }

    base
}

/// Resolve from a raw ratio string (unknown strings degrade to `1:1`).
pub fn resolve_str(ratio: &str, avoid_bottom_content: bool) -> Placement {
    resolve(AspectRatio::parse_or_square(ratio), avoid_bottom_content)
}

// ---------------------------------------------------------------------------
// Overlay style
// ---------------------------------------------------------------------------

/// Horizontal anchoring of the overlay box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "edge", content = "percent")]
pub enum HorizontalAnchor {
    /// Anchored from the left edge at the given percentage.
    Left(f64),
    /// Anchored from the right edge at the given percentage.
    Right(f64),
}

/// Renderer-facing positioning transform derived from a [`Placement`].
///
/// The overlay box is always vertically center-anchored: `top` is paired with
/// a `-50%` vertical translation so the box's vertical midpoint, not its top
/// edge, sits at `top`%. A centered alignment additionally applies a `-50%`
/// horizontal translation so the box's own center sits at the 50% anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    pub horizontal: HorizontalAnchor,
    /// Percent from the top edge.
    pub top: f64,
    /// Percent of the frame width.
    pub width: f64,
    pub opacity: f64,
    /// Horizontal translation in percent of the overlay's own width.
    pub translate_x: f64,
    /// Vertical translation in percent of the overlay's own height.
    pub translate_y: f64,
}

impl From<Placement> for OverlayStyle {
    fn from(p: Placement) -> Self {
        let (horizontal, translate_x) = match p.alignment {
            Alignment::Left => (HorizontalAnchor::Left(p.x), 0.0),
            Alignment::Center => (HorizontalAnchor::Left(50.0), -50.0),
            Alignment::Right => (HorizontalAnchor::Right(100.0 - p.x), 0.0),
        };

        OverlayStyle {
            horizontal,
            top: p.y,
            width: p.width,
            opacity: p.opacity,
            translate_x,
            translate_y: -50.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
