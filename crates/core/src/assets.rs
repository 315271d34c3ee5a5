//! Occasion and marketplace asset records.
//!
//! An occasion asset is a pre-produced creative tagged with a calendar month
//! and a named festival or occasion, used as a branding template. Marketplace
//! assets extend them with creator attribution and pricing.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Media kind of a catalog asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
    Audio,
}

/// Languages the catalog is produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Hindi.
    Hi,
    /// Marathi.
    Mr,
}

impl Language {
    /// Lowercase ISO 639-1 code (the wire form).
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
        }
    }
}

/// A pre-produced festival/occasion creative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccasionAsset {
    pub id: String,
    pub title: String,
    pub kind: AssetKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Calendar month, 0-based (0 = January, 11 = December).
    pub month: u8,
    /// ISO date or fixed day, when the occasion is date-bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub occasion: String,
    pub language: Language,
}

/// An occasion asset listed on the creator marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceAsset {
    #[serde(flatten)]
    pub asset: OccasionAsset,
    pub creator_id: String,
    pub price: f64,
    pub tags: Vec<String>,
}

/// Validate a 0-based calendar month.
pub fn validate_month(month: u8) -> Result<(), CoreError> {
    if month > 11 {
        return Err(CoreError::Validation(format!(
            "Month must be in 0..=11, got {month}"
        )));
    }
    Ok(())
}

/// Validate an occasion asset before it enters the catalog.
pub fn validate_asset(asset: &OccasionAsset) -> Result<(), CoreError> {
    if asset.id.trim().is_empty() {
        return Err(CoreError::Validation(
            "Asset id must not be empty".to_string(),
        ));
    }
    if asset.title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Asset title must not be empty".to_string(),
        ));
    }
    if asset.url.trim().is_empty() {
        return Err(CoreError::Validation(
            "Asset url must not be empty".to_string(),
        ));
    }
    validate_month(asset.month)
}

/// Validate a marketplace listing.
pub fn validate_listing(listing: &MarketplaceAsset) -> Result<(), CoreError> {
    validate_asset(&listing.asset)?;
    if listing.price < 0.0 {
        return Err(CoreError::Validation(format!(
            "Listing price must not be negative, got {}",
            listing.price
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn diwali() -> OccasionAsset {
        OccasionAsset {
            id: "occ-diwali-1".to_string(),
            title: "Diwali Glow".to_string(),
            kind: AssetKind::Image,
            url: "https://cdn.example.com/diwali.png".to_string(),
            thumbnail: None,
            month: 9,
            date: None,
            occasion: "Diwali".to_string(),
            language: Language::Hi,
        }
    }

    #[test]
    fn valid_asset_accepted() {
        assert!(validate_asset(&diwali()).is_ok());
    }

    #[test]
    fn out_of_range_month_rejected() {
        let mut asset = diwali();
        asset.month = 12;
        assert!(validate_asset(&asset).is_err());
    }

    #[test]
    fn blank_fields_rejected() {
        let mut asset = diwali();
        asset.title = String::new();
        assert!(validate_asset(&asset).is_err());

        let mut asset = diwali();
        asset.url = "  ".to_string();
        assert!(validate_asset(&asset).is_err());
    }

    #[test]
    fn negative_price_rejected() {
        let listing = MarketplaceAsset {
            asset: diwali(),
            creator_id: "creator-1".to_string(),
            price: -1.0,
            tags: vec![],
        };
        assert!(validate_listing(&listing).is_err());
    }

    #[test]
    fn marketplace_listing_flattens_asset_fields() {
        let listing = MarketplaceAsset {
            asset: diwali(),
            creator_id: "creator-1".to_string(),
            price: 49.0,
            tags: vec!["festival".to_string()],
        };
        let json = serde_json::to_value(&listing).unwrap();

        // The wire shape extends the asset record rather than nesting it.
        assert_eq!(json["id"], "occ-diwali-1");
        assert_eq!(json["creatorId"], "creator-1");
        assert_eq!(json["language"], "hi");
    }
}
