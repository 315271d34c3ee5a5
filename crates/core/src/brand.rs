//! Brand profile types and the closed design vocabularies.
//!
//! The personality, icon-style, and font-style choices offered during
//! onboarding are closed sets. Each variant maps to exactly one fixed
//! descriptive phrase (its *cue*) that the prompt builder splices into
//! generative requests, and each serializes as the human-readable label the
//! client presents. Representing these as enums makes an unhandled choice a
//! compile-time error instead of a silent fall-through to the raw key string.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Brand personality
// ---------------------------------------------------------------------------

/// The brand's personality, as picked during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Personality {
    #[serde(rename = "Professional & Corporate")]
    ProfessionalCorporate,
    #[serde(rename = "Playful & Energetic")]
    PlayfulEnergetic,
    #[serde(rename = "Luxury & Elegant")]
    LuxuryElegant,
    #[serde(rename = "Minimal & Modern")]
    MinimalModern,
    #[serde(rename = "Vintage & Traditional")]
    VintageTraditional,
    #[serde(rename = "Organic & Natural")]
    OrganicNatural,
    #[serde(rename = "Bold & Disruptive")]
    BoldDisruptive,
    #[serde(rename = "High-Tech & Futuristic")]
    HighTechFuturistic,
    #[serde(rename = "Friendly & Approachable")]
    FriendlyApproachable,
    #[serde(rename = "Sustainable & Earth-Friendly")]
    SustainableEarthFriendly,
    #[serde(rename = "Fast-Paced & Tech-Forward")]
    FastPacedTechForward,
    #[serde(rename = "Community-Driven & Warm")]
    CommunityDrivenWarm,
    #[serde(rename = "Artistic & Creative")]
    ArtisticCreative,
    #[serde(rename = "Reliable & Established")]
    ReliableEstablished,
    #[serde(rename = "Whimsical & Magical")]
    WhimsicalMagical,
    #[serde(rename = "Industrial & Rugged")]
    IndustrialRugged,
    #[serde(rename = "Ethereal & Zen")]
    EtherealZen,
    #[serde(rename = "Scholarly & Academic")]
    ScholarlyAcademic,
    #[serde(rename = "Sporty & High-Performance")]
    SportyHighPerformance,
}

impl Personality {
    /// Every personality, in presentation order.
    pub const ALL: &'static [Personality] = &[
        Personality::ProfessionalCorporate,
        Personality::PlayfulEnergetic,
        Personality::LuxuryElegant,
        Personality::MinimalModern,
        Personality::VintageTraditional,
        Personality::OrganicNatural,
        Personality::BoldDisruptive,
        Personality::HighTechFuturistic,
        Personality::FriendlyApproachable,
        Personality::SustainableEarthFriendly,
        Personality::FastPacedTechForward,
        Personality::CommunityDrivenWarm,
        Personality::ArtisticCreative,
        Personality::ReliableEstablished,
        Personality::WhimsicalMagical,
        Personality::IndustrialRugged,
        Personality::EtherealZen,
        Personality::ScholarlyAcademic,
        Personality::SportyHighPerformance,
    ];

    /// Human-readable label (the wire form).
    pub fn label(&self) -> &'static str {
        match self {
            Personality::ProfessionalCorporate => "Professional & Corporate",
            Personality::PlayfulEnergetic => "Playful & Energetic",
            Personality::LuxuryElegant => "Luxury & Elegant",
            Personality::MinimalModern => "Minimal & Modern",
            Personality::VintageTraditional => "Vintage & Traditional",
            Personality::OrganicNatural => "Organic & Natural",
            Personality::BoldDisruptive => "Bold & Disruptive",
            Personality::HighTechFuturistic => "High-Tech & Futuristic",
            Personality::FriendlyApproachable => "Friendly & Approachable",
            Personality::SustainableEarthFriendly => "Sustainable & Earth-Friendly",
            Personality::FastPacedTechForward => "Fast-Paced & Tech-Forward",
            Personality::CommunityDrivenWarm => "Community-Driven & Warm",
            Personality::ArtisticCreative => "Artistic & Creative",
            Personality::ReliableEstablished => "Reliable & Established",
            Personality::WhimsicalMagical => "Whimsical & Magical",
            Personality::IndustrialRugged => "Industrial & Rugged",
            Personality::EtherealZen => "Ethereal & Zen",
            Personality::ScholarlyAcademic => "Scholarly & Academic",
            Personality::SportyHighPerformance => "Sporty & High-Performance",
        }
    }

    /// Descriptive phrase spliced into generative prompts.
    pub fn cue(&self) -> &'static str {
        match self {
            Personality::ProfessionalCorporate => {
                "structured, trustworthy, solid, clean sans-serif typography, blue-chip feel, stable"
            }
            Personality::PlayfulEnergetic => {
                "vibrant, rounded shapes, dynamic movement, friendly curves, enthusiastic, high-spirited"
            }
            Personality::LuxuryElegant => {
                "sophisticated, thin lines, serif typography, high-end, premium, spacious, graceful"
            }
            Personality::MinimalModern => {
                "uncluttered, geometric, stark, functional, futuristic, sleek, contemporary"
            }
            Personality::VintageTraditional => {
                "textured, heritage feel, classic emblems, nostalgic, ornate borders, established"
            }
            Personality::OrganicNatural => {
                "flowing lines, earth tones, soft shapes, eco-friendly, botanical hints, grounded"
            }
            Personality::BoldDisruptive => {
                "high contrast, edgy, thick strokes, aggressive geometry, unconventional, rebellious"
            }
            Personality::HighTechFuturistic => {
                "circuit-like patterns, sleek metallic feel, digital precision, neon accents, advanced"
            }
            Personality::FriendlyApproachable => {
                "warm, soft edges, inviting icons, human-centric, casual but reliable, kind"
            }
            Personality::SustainableEarthFriendly => {
                "green-centric, botanical motifs, balanced and ethical, raw textures, renewable"
            }
            Personality::FastPacedTechForward => {
                "italicized speed lines, sharp corners, motion-blur effects, high-velocity, rapid"
            }
            Personality::CommunityDrivenWarm => {
                "interlocking circles, connectivity, inclusive, group-focused symbols, shared"
            }
            Personality::ArtisticCreative => {
                "unconventional layouts, painterly textures, expressive brushwork, unique flair, imaginative"
            }
            Personality::ReliableEstablished => {
                "strong architectural forms, deep colors, bold weighting, institutional feel, sturdy"
            }
            Personality::WhimsicalMagical => {
                "dreamy elements, sparkling accents, playful proportions, imaginative and soft, ethereal"
            }
            Personality::IndustrialRugged => {
                "heavy iron-like textures, gear motifs, sturdy construction, raw and powerful weighting, gritty"
            }
            Personality::EtherealZen => {
                "light as air, thin gradients, meditative shapes, high-harmony, calm and balanced, peaceful"
            }
            Personality::ScholarlyAcademic => {
                "bookish motifs, ink-pen styles, refined classicism, intellectual weight and symmetry, learned"
            }
            Personality::SportyHighPerformance => {
                "aerodynamic shapes, high-tension curves, competitive energy, swift movement, athletic"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Logo icon style
// ---------------------------------------------------------------------------

/// Visual style of the logo mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconStyle {
    #[serde(rename = "Abstract Geometry")]
    AbstractGeometry,
    #[serde(rename = "Letter-based (Wordmark)")]
    Wordmark,
    #[serde(rename = "Pictorial (Object-based)")]
    Pictorial,
    #[serde(rename = "Minimalist Line-art")]
    MinimalistLineArt,
    #[serde(rename = "Mascot / Character")]
    Mascot,
    #[serde(rename = "Badge / Emblem")]
    Badge,
    #[serde(rename = "Monogram")]
    Monogram,
    #[serde(rename = "Gradient Modern")]
    GradientModern,
    #[serde(rename = "Hand-drawn / Organic")]
    HandDrawn,
    #[serde(rename = "Negative Space")]
    NegativeSpace,
    #[serde(rename = "Duo-tone Minimalist")]
    DuoToneMinimalist,
    #[serde(rename = "Isometric 3D (Vector)")]
    Isometric3d,
    #[serde(rename = "Brutalist")]
    Brutalist,
    #[serde(rename = "Geometric Animals")]
    GeometricAnimals,
    #[serde(rename = "Pixel Art / Retro")]
    PixelArt,
    #[serde(rename = "Art Nouveau / Decorative")]
    ArtNouveau,
    #[serde(rename = "Bauhaus / Functionalist")]
    Bauhaus,
    #[serde(rename = "Stained Glass Style")]
    StainedGlass,
    #[serde(rename = "Origami / Paper-fold")]
    Origami,
}

impl IconStyle {
    /// Every icon style, in presentation order.
    pub const ALL: &'static [IconStyle] = &[
        IconStyle::AbstractGeometry,
        IconStyle::Wordmark,
        IconStyle::Pictorial,
        IconStyle::MinimalistLineArt,
        IconStyle::Mascot,
        IconStyle::Badge,
        IconStyle::Monogram,
        IconStyle::GradientModern,
        IconStyle::HandDrawn,
        IconStyle::NegativeSpace,
        IconStyle::DuoToneMinimalist,
        IconStyle::Isometric3d,
        IconStyle::Brutalist,
        IconStyle::GeometricAnimals,
        IconStyle::PixelArt,
        IconStyle::ArtNouveau,
        IconStyle::Bauhaus,
        IconStyle::StainedGlass,
        IconStyle::Origami,
    ];

    /// Human-readable label (the wire form).
    pub fn label(&self) -> &'static str {
        match self {
            IconStyle::AbstractGeometry => "Abstract Geometry",
            IconStyle::Wordmark => "Letter-based (Wordmark)",
            IconStyle::Pictorial => "Pictorial (Object-based)",
            IconStyle::MinimalistLineArt => "Minimalist Line-art",
            IconStyle::Mascot => "Mascot / Character",
            IconStyle::Badge => "Badge / Emblem",
            IconStyle::Monogram => "Monogram",
            IconStyle::GradientModern => "Gradient Modern",
            IconStyle::HandDrawn => "Hand-drawn / Organic",
            IconStyle::NegativeSpace => "Negative Space",
            IconStyle::DuoToneMinimalist => "Duo-tone Minimalist",
            IconStyle::Isometric3d => "Isometric 3D (Vector)",
            IconStyle::Brutalist => "Brutalist",
            IconStyle::GeometricAnimals => "Geometric Animals",
            IconStyle::PixelArt => "Pixel Art / Retro",
            IconStyle::ArtNouveau => "Art Nouveau / Decorative",
            IconStyle::Bauhaus => "Bauhaus / Functionalist",
            IconStyle::StainedGlass => "Stained Glass Style",
            IconStyle::Origami => "Origami / Paper-fold",
        }
    }

    /// Descriptive phrase spliced into generative prompts.
    pub fn cue(&self) -> &'static str {
        match self {
            IconStyle::AbstractGeometry => {
                "unique non-representational shapes, mathematical balance, symbolic forms, sharp vectors"
            }
            IconStyle::Wordmark => {
                "creative typography, letterform art, customized glyphs, character-based focal point"
            }
            IconStyle::Pictorial => {
                "recognizable silhouette of a related industry object, iconic representation, literal"
            }
            IconStyle::MinimalistLineArt => {
                "single stroke width, elegant contours, no fills, maximum clarity and breath, refined"
            }
            IconStyle::Mascot => {
                "personified brand ambassador, stylized figure, expressive and memorable character design"
            }
            IconStyle::Badge => {
                "contained within a shield or circle, decorative borders, authoritative crest, traditional"
            }
            IconStyle::Monogram => {
                "interlocking initials, modern heraldry, compact and prestigious identity, signature feel"
            }
            IconStyle::GradientModern => {
                "smooth color transitions, depth, glossy finish, web 3.0 aesthetic, tech-forward"
            }
            IconStyle::HandDrawn => {
                "sketch-like texture, irregular lines, artisanal, handcrafted appeal, human touch"
            }
            IconStyle::NegativeSpace => {
                "hidden secondary icons within shapes, smart background usage, clever visual pun, multi-layered"
            }
            IconStyle::DuoToneMinimalist => {
                "strictly two colors, high contrast, poster-style simplicity, punchy and clear, iconic"
            }
            IconStyle::Isometric3d => {
                "3D depth achieved through 2D geometry, architectural and precise vector art, structured"
            }
            IconStyle::Brutalist => {
                "raw, unpolished, heavy industrial typography, stark and anti-design vibes, high impact, honest"
            }
            IconStyle::GeometricAnimals => {
                "wildlife constructed from simple geometric shapes, modern nature representation, stylized"
            }
            IconStyle::PixelArt => {
                "8-bit or 16-bit blocky aesthetics, nostalgic gaming feel, digital grid precision, lo-fi"
            }
            IconStyle::ArtNouveau => {
                "ornate flowing curves, natural forms, highly decorative and feminine elements, floral"
            }
            IconStyle::Bauhaus => {
                "primary shapes (circle, square, triangle), emphasis on utility, color-blocking, basic"
            }
            IconStyle::StainedGlass => {
                "segmented colors with black lead-like outlines, kaleidoscopic, vibrant transparency, radiant"
            }
            IconStyle::Origami => {
                "sharp creases, paper-like shadows, folded geometry, precision and patience, layered"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Font style
// ---------------------------------------------------------------------------

/// Typography preference for the brand wordmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Modern,
    Classic,
    Playful,
    Luxury,
    Minimal,
}

impl FontStyle {
    /// Every font style.
    pub const ALL: &'static [FontStyle] = &[
        FontStyle::Modern,
        FontStyle::Classic,
        FontStyle::Playful,
        FontStyle::Luxury,
        FontStyle::Minimal,
    ];

    /// Lowercase label (the wire form).
    pub fn label(&self) -> &'static str {
        match self {
            FontStyle::Modern => "modern",
            FontStyle::Classic => "classic",
            FontStyle::Playful => "playful",
            FontStyle::Luxury => "luxury",
            FontStyle::Minimal => "minimal",
        }
    }

    /// Descriptive phrase spliced into generative prompts.
    pub fn cue(&self) -> &'static str {
        match self {
            FontStyle::Modern => "sleek sans-serif, geometric, high-tech, balanced weights, clean lines",
            FontStyle::Classic => {
                "traditional serif, authoritative, timeless, elegant proportions, high readability"
            }
            FontStyle::Playful => "rounded, bubbly, friendly, informal, expressive curves, jovial",
            FontStyle::Luxury => {
                "high-contrast serif, thin hairline strokes, expensive, sophisticated, fashion-forward"
            }
            FontStyle::Minimal => "ultra-thin sans-serif, spacious, stark, functional, hidden details",
        }
    }
}

// ---------------------------------------------------------------------------
// Brand profile
// ---------------------------------------------------------------------------

/// Maximum number of brand colors a profile may carry.
pub const MAX_BRAND_COLORS: usize = 5;

/// A configured brand profile.
///
/// Presence of this record on a user is the routing gate between the
/// onboarding flow and the main dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    /// Hex color strings, e.g. `#1A2B3C`.
    pub brand_colors: Vec<String>,
    pub font_style: FontStyle,
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<Personality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
}

/// Validate a brand profile submitted during onboarding.
///
/// - Company name must be non-empty.
/// - 1 to [`MAX_BRAND_COLORS`] brand colors, each a `#RRGGBB` hex string.
pub fn validate_brand_config(brand: &BrandConfig) -> Result<(), CoreError> {
    if brand.company_name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Company name must not be empty".to_string(),
        ));
    }

    if brand.brand_colors.is_empty() || brand.brand_colors.len() > MAX_BRAND_COLORS {
        return Err(CoreError::Validation(format!(
            "Brand must have between 1 and {MAX_BRAND_COLORS} colors (got {})",
            brand.brand_colors.len()
        )));
    }

    for color in &brand.brand_colors {
        validate_hex_color(color)?;
    }

    Ok(())
}

/// Validate a `#RRGGBB` hex color string.
pub fn validate_hex_color(color: &str) -> Result<(), CoreError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid brand color '{color}': expected #RRGGBB"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
