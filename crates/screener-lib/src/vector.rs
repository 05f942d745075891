//! Feature vector assembly
//!
//! Builds the fixed-length numeric vector a classifier consumes from a named
//! field map. Assembly order is exactly the descriptor's declared field
//! order; the bound classifier has no names, only positions, so this is the
//! most safety-critical contract in the system.

use crate::error::ScreenerError;
use crate::models::FeatureVector;
use crate::screen::ScreenDescriptor;
use std::collections::HashMap;
use tracing::debug;

/// Assemble a feature vector from named field values.
///
/// Fails with `MissingField` when a declared field has no supplied value and
/// with `InvalidFieldValue` when a value is NaN or infinite. Documented
/// ranges are not enforced here. Keys that name no schema field are ignored.
pub fn build(
    descriptor: &ScreenDescriptor,
    values: &HashMap<String, f64>,
) -> Result<FeatureVector, ScreenerError> {
    let mut out = Vec::with_capacity(descriptor.field_count());

    for field in descriptor.fields {
        let value = *values
            .get(field.name)
            .ok_or_else(|| ScreenerError::MissingField {
                screen: descriptor.screen,
                field: field.name.to_string(),
            })?;

        if !value.is_finite() {
            return Err(ScreenerError::InvalidFieldValue {
                screen: descriptor.screen,
                field: field.name.to_string(),
            });
        }

        out.push(value as f32);
    }

    for key in values.keys() {
        if descriptor.field(key).is_none() {
            debug!(screen = %descriptor.screen, field = %key, "Ignoring value for unknown field");
        }
    }

    Ok(FeatureVector {
        schema_version: descriptor.schema_version.to_string(),
        values: out,
    })
}
