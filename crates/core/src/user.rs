//! User, credit, and generation-history records.

use serde::{Deserialize, Serialize};

use crate::brand::BrandConfig;
use crate::types::Timestamp;

/// How many past generations are retained per user.
///
/// The history is recent-first; the oldest entry is evicted on overflow.
pub const HISTORY_CAP: usize = 10;

/// Platform role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
    Creator,
}

/// The kind of generation a credit pays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedKind {
    Image,
    Video,
}

/// Per-user quota counters, consumed one-for-one by successful generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub images: u32,
    pub videos: u32,
}

impl Credits {
    /// Counter for the given generation kind.
    pub fn of(&self, kind: GeneratedKind) -> u32 {
        match kind {
            GeneratedKind::Image => self.images,
            GeneratedKind::Video => self.videos,
        }
    }

    fn of_mut(&mut self, kind: GeneratedKind) -> &mut u32 {
        match kind {
            GeneratedKind::Image => &mut self.images,
            GeneratedKind::Video => &mut self.videos,
        }
    }

    /// Add `delta` to the counter for `kind`, saturating at zero.
    pub fn apply(&mut self, kind: GeneratedKind, delta: i64) {
        let counter = self.of_mut(kind);
        *counter = (*counter as i64).saturating_add(delta).max(0) as u32;
    }

    /// Decrement the counter for `kind` if it is positive. Returns whether a
    /// credit was taken.
    pub fn try_take(&mut self, kind: GeneratedKind) -> bool {
        let counter = self.of_mut(kind);
        if *counter == 0 {
            return false;
        }
        *counter -= 1;
        true
    }
}

/// An immutable record of one generation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAsset {
    pub id: uuid::Uuid,
    pub url: String,
    pub prompt: String,
    pub timestamp: Timestamp,
    pub kind: GeneratedKind,
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// `None` routes the user to onboarding instead of the dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandConfig>,
    pub credits: Credits,
    #[serde(default)]
    pub generation_history: Vec<GeneratedAsset>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
