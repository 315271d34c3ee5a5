//! Prompt assembly for the generative boundary.
//!
//! Requests to the external generative API carry a free-text prompt built
//! from brand fields with a fixed template. The enumerated personality,
//! icon-style, and font-style choices are expanded into their descriptive
//! cues (see [`crate::brand`]); everything else is spliced in verbatim.

use crate::assets::Language;
use crate::brand::{FontStyle, IconStyle, Personality};

/// Inputs for a logo generation prompt.
#[derive(Debug, Clone)]
pub struct LogoPromptParams {
    pub company_name: Option<String>,
    pub industry: String,
    pub audience: String,
    pub personality: Personality,
    pub colors: Vec<String>,
    pub icon_style: IconStyle,
    pub font_style: FontStyle,
}

/// Inputs for a marketing-creative generation prompt.
#[derive(Debug, Clone)]
pub struct ImagePromptParams {
    /// The user's free-text subject.
    pub user_prompt: String,
    /// Artistic style picked in the generator modal.
    pub style: String,
    pub brand_industry: Option<String>,
    pub target_audience: Option<String>,
    pub brand_personality: Option<Personality>,
    pub brand_colors: Vec<String>,
}

/// Build the brand-identity (logo + wordmark) prompt.
pub fn logo_prompt(params: &LogoPromptParams) -> String {
    let brand_name = params.company_name.as_deref().unwrap_or("The Brand");
    let personality_cue = params.personality.cue();
    let style_cue = params.icon_style.cue();
    let font_cue = params.font_style.cue();

    format!(
        "Task: Professional Brand Identity Design (Logo + Wordmark).\n\
         Brand Name: {brand_name}\n\
         Industry: {industry}\n\
         Target Audience: {audience}\n\
         Personality: {personality} ({personality_cue})\n\
         Visual Style: {icon_style} ({style_cue})\n\
         Typography Preference: {font_style} ({font_cue})\n\
         Color Palette: {colors}\n\
         \n\
         Strict Design Rules:\n\
         1. Background: SOLID WHITE (#FFFFFF). No mockups, no textures, no shadows, no gradients in background.\n\
         2. Layout: The logo icon must be perfectly centered above the brand name. The brand name must be centered.\n\
         3. Iconography: Create a distinct, flat vector symbol that subtly represents {industry}.\n\
         4. Typography: Use a font that perfectly aligns with the {font_cue} style. No generic fonts.\n\
         5. Scalability: Ensure lines are thick enough to be visible at small sizes. No complex photographic details.\n\
         6. Aesthetics: Production-grade, professional, and unique. Avoid clich\u{e9}s.\n\
         7. No Overlap: Keep a clear safe-zone between the icon and the text.\n\
         \n\
         Output Format: A clean, high-resolution logo suitable for a corporate brand guide.",
        industry = params.industry,
        audience = params.audience,
        personality = params.personality.label(),
        icon_style = params.icon_style.label(),
        font_style = params.font_style.label(),
        colors = params.colors.join(", "),
    )
}

/// Build the marketing-creative prompt.
pub fn image_prompt(params: &ImagePromptParams) -> String {
    let colors = if params.brand_colors.is_empty() {
        "Natural".to_string()
    } else {
        params.brand_colors.join(", ")
    };

    format!(
        "Task: Create a professional marketing creative.\n\
         Subject: {subject}\n\
         Artistic Style: {style}\n\
         Industry: {industry}\n\
         Audience: {audience}\n\
         Personality: {personality}\n\
         Colors: {colors}\n\
         \n\
         Guidelines: High resolution, professional composition, clean asset ready for branding.",
        subject = params.user_prompt,
        style = params.style,
        industry = params.brand_industry.as_deref().unwrap_or("General"),
        audience = params.target_audience.as_deref().unwrap_or("General Public"),
        personality = params
            .brand_personality
            .map(|p| p.label())
            .unwrap_or("Professional"),
    )
}

/// Build the occasion-greeting prompt.
pub fn occasion_copy_prompt(occasion: &str, language: Language, year: i32) -> String {
    format!(
        "Write a short, engaging greeting for {occasion} in the year {year}. \
         Language: {}. Return the text only.",
        language.code()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn logo_params() -> LogoPromptParams {
        LogoPromptParams {
            company_name: Some("Chai Point".to_string()),
            industry: "Food & Beverage".to_string(),
            audience: "Urban commuters".to_string(),
            personality: Personality::FriendlyApproachable,
            colors: vec!["#D97706".to_string(), "#1F2937".to_string()],
            icon_style: IconStyle::Badge,
            font_style: FontStyle::Classic,
        }
    }

    #[test]
    fn logo_prompt_carries_labels_and_cues() {
        let prompt = logo_prompt(&logo_params());

        assert!(prompt.contains("Brand Name: Chai Point"));
        assert!(prompt.contains("Personality: Friendly & Approachable ("));
        assert!(prompt.contains(Personality::FriendlyApproachable.cue()));
        assert!(prompt.contains("Visual Style: Badge / Emblem ("));
        assert!(prompt.contains(IconStyle::Badge.cue()));
        assert!(prompt.contains("Typography Preference: classic ("));
        assert!(prompt.contains("Color Palette: #D97706, #1F2937"));
    }

    #[test]
    fn logo_prompt_defaults_missing_company_name() {
        let mut params = logo_params();
        params.company_name = None;
        let prompt = logo_prompt(&params);
        assert!(prompt.contains("Brand Name: The Brand"));
    }

    #[test]
    fn image_prompt_defaults_missing_brand_context() {
        let prompt = image_prompt(&ImagePromptParams {
            user_prompt: "A monsoon tea stall at dusk".to_string(),
            style: "Cinematic".to_string(),
            brand_industry: None,
            target_audience: None,
            brand_personality: None,
            brand_colors: vec![],
        });

        assert!(prompt.contains("Subject: A monsoon tea stall at dusk"));
        assert!(prompt.contains("Industry: General"));
        assert!(prompt.contains("Audience: General Public"));
        assert!(prompt.contains("Personality: Professional"));
        assert!(prompt.contains("Colors: Natural"));
    }

    #[test]
    fn occasion_copy_prompt_names_occasion_year_and_language() {
        let prompt = occasion_copy_prompt("Diwali", Language::Hi, 2026);
        assert!(prompt.contains("greeting for Diwali in the year 2026"));
        assert!(prompt.contains("Language: hi"));
    }
}
