//! # Star Records
//!
//! A registration block's body is a [`StarRegistration`]:
//!
//! ```json
//! {
//!   "address": "1A1zP1...",
//!   "signature": "H8k...",
//!   "star": { "dec": "-26° 29' 24.9", "ra": "16h 29m 1.0s", "story": "466f756e64..." }
//! }
//! ```
//!
//! The story is stored hex-encoded; [`Star::decoded_story`] reverses it.

use crate::domain::errors::RegistryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{Signature, WalletAddress};
use sn_01_ledger::Block;

/// Celestial coordinates plus a short story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    /// Declination.
    pub dec: String,
    /// Right ascension.
    pub ra: String,
    /// Magnitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag: Option<String>,
    /// Constellation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cen: Option<String>,
    pub story: String,
}

impl Star {
    pub fn new(ra: impl Into<String>, dec: impl Into<String>, story: impl Into<String>) -> Self {
        Self {
            dec: dec.into(),
            ra: ra.into(),
            mag: None,
            cen: None,
            story: story.into(),
        }
    }

    pub fn with_magnitude(mut self, mag: impl Into<String>) -> Self {
        self.mag = Some(mag.into());
        self
    }

    pub fn with_constellation(mut self, cen: impl Into<String>) -> Self {
        self.cen = Some(cen.into());
        self
    }

    /// Check a submitted star before it is encoded.
    pub fn validate(&self, max_story_bytes: usize) -> Result<(), RegistryError> {
        if self.ra.trim().is_empty() {
            return Err(RegistryError::invalid_star("right ascension is required"));
        }
        if self.dec.trim().is_empty() {
            return Err(RegistryError::invalid_star("declination is required"));
        }
        if self.story.is_empty() {
            return Err(RegistryError::invalid_star("story is required"));
        }
        if !self.story.is_ascii() {
            return Err(RegistryError::invalid_star("story must be ASCII text"));
        }
        if self.story.len() > max_story_bytes {
            return Err(RegistryError::invalid_star(format!(
                "story is {} bytes, limit is {max_story_bytes}",
                self.story.len()
            )));
        }
        Ok(())
    }

    /// Same star with the story hex-encoded for storage.
    pub fn with_encoded_story(mut self) -> Self {
        self.story = hex::encode(self.story.as_bytes());
        self
    }

    /// Plain-text story of a stored star, if it decodes.
    pub fn decoded_story(&self) -> Option<String> {
        let bytes = hex::decode(&self.story).ok()?;
        String::from_utf8(bytes).ok()
    }
}

/// Body of a registration block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRegistration {
    pub address: WalletAddress,
    pub signature: Signature,
    pub star: Star,
}

impl StarRegistration {
    pub fn to_body(&self) -> Result<Value, RegistryError> {
        serde_json::to_value(self).map_err(|e| RegistryError::Serialization {
            message: e.to_string(),
        })
    }

    /// The registration carried by `block`, if its body is one.
    ///
    /// Genesis and free-form blocks yield `None`.
    pub fn from_block(block: &Block) -> Option<Self> {
        if block.is_genesis() {
            return None;
        }
        Self::deserialize(block.body())
            .ok()
            .filter(|r: &Self| !r.address.is_empty() && !r.signature.is_empty())
    }
}
