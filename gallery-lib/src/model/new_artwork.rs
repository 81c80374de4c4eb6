//! Artwork form input and validation

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::{ArtworkStatus, Money};
use crate::error::{FieldValidationError, ValidationErrors};

/// Material used for one artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialUsage {
    pub material_id: String,
    pub quantity: Decimal,
    pub cost: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionCosts {
    #[serde(default)]
    pub materials: Vec<MaterialUsage>,
    #[serde(default)]
    pub total_cost: Option<Money>,
}

/// Ownership history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    #[serde(default)]
    pub previous_owner: Option<String>,
    #[serde(default)]
    pub acquisition_method: Option<String>,
    #[serde(default)]
    pub date_acquired: Option<NaiveDate>,
    #[serde(default)]
    pub exhibition_history: Vec<String>,
}

/// Image attached to a submitted artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    /// Ordering among secondary images. Ignored for the main image.
    #[serde(default)]
    pub position: u32,
}

/// Artwork as submitted by the create form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArtwork {
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ArtworkStatus,
    #[serde(default)]
    pub retail_price: Option<Money>,
    #[serde(default)]
    pub edition_number: Option<u32>,
    #[serde(default)]
    pub edition_total: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub provenance: Option<Provenance>,
    #[serde(default)]
    pub production_costs: Option<ProductionCosts>,
    #[serde(default)]
    pub main_image: Option<ArtworkImage>,
    #[serde(default)]
    pub secondary_images: Vec<ArtworkImage>,
}

impl NewArtwork {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Checks the form rules and collects every failing field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.title.trim().is_empty() {
            errors.push(FieldValidationError::with_code("title", "Title is required", "required"));
        }

        if self.retail_price.is_some_and(|p| p.is_negative()) {
            errors.push(non_negative("retailPrice"));
        }

        if let (Some(number), Some(total)) = (self.edition_number, self.edition_total) {
            if number > total {
                errors.push(FieldValidationError::with_code(
                    "editionNumber",
                    format!("Edition number {} exceeds edition total {}", number, total),
                    "range",
                ));
            }
        }

        if let Some(costs) = &self.production_costs {
            for (i, material) in costs.materials.iter().enumerate() {
                if material.quantity.is_sign_negative() && !material.quantity.is_zero() {
                    errors.push(non_negative(format!("productionCosts.materials[{}].quantity", i)));
                }
                if material.cost.is_negative() {
                    errors.push(non_negative(format!("productionCosts.materials[{}].cost", i)));
                }
            }
            if costs.total_cost.is_some_and(|t| t.is_negative()) {
                errors.push(non_negative("productionCosts.totalCost"));
            }
        }

        let mut positions = HashSet::new();
        for (i, image) in self.secondary_images.iter().enumerate() {
            if !positions.insert(image.position) {
                errors.push(FieldValidationError::with_code(
                    format!("secondaryImages[{}].position", i),
                    format!("Duplicate image position {}", image.position),
                    "unique",
                ));
            }
        }

        errors.into_result()
    }

    /// Sum of material costs.
    pub fn material_cost(&self) -> Money {
        let total = self
            .production_costs
            .iter()
            .flat_map(|c| c.materials.iter())
            .map(|m| m.cost.value())
            .sum::<Decimal>();
        Money::new(total)
    }
}

fn non_negative(field: impl Into<String>) -> FieldValidationError {
    FieldValidationError::with_code(field, "Must not be negative", "min")
}
