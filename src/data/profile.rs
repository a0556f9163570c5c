//! Measured concentration profile
//!
//! A profile is an ordered list of `(distance, concentration, uncertainty)`
//! points along a traverse. It is validated once at construction and is
//! immutable afterwards: the engine only ever reads it.

use crate::error::{Result, TimingError};

/// One measured point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Distance along the traverse \[µm\]
    pub distance: f64,
    /// Measured concentration
    pub concentration: f64,
    /// Half-width of the uncertainty band (same unit as concentration)
    pub uncertainty: f64,
}

/// Validated measured profile
///
/// # Invariants
///
/// - at least one point
/// - distances finite, non-negative, strictly increasing
/// - concentrations finite
/// - uncertainties finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredProfile {
    distances: Vec<f64>,
    concentrations: Vec<f64>,
    uncertainties: Vec<f64>,
}

impl MeasuredProfile {
    /// Build from explicit points
    pub fn new(points: &[ProfilePoint]) -> Result<Self> {
        if points.is_empty() {
            return Err(TimingError::configuration(
                "profile",
                "measured profile must contain at least one point",
            ));
        }

        let mut previous: Option<f64> = None;
        for (index, point) in points.iter().enumerate() {
            if !point.distance.is_finite() || point.distance < 0.0 {
                return Err(TimingError::configuration(
                    "profile",
                    format!(
                        "point {index}: distance must be finite and >= 0, got {}",
                        point.distance
                    ),
                ));
            }
            if let Some(prev) = previous
                && point.distance <= prev
            {
                return Err(TimingError::configuration(
                    "profile",
                    format!(
                        "point {index}: distances must be strictly increasing ({} after {prev})",
                        point.distance
                    ),
                ));
            }
            if !point.concentration.is_finite() {
                return Err(TimingError::configuration(
                    "profile",
                    format!("point {index}: concentration is not finite"),
                ));
            }
            if !point.uncertainty.is_finite() || point.uncertainty < 0.0 {
                return Err(TimingError::configuration(
                    "uncertainty",
                    format!(
                        "point {index}: uncertainty must be finite and >= 0, got {}",
                        point.uncertainty
                    ),
                ));
            }
            previous = Some(point.distance);
        }

        Ok(Self {
            distances: points.iter().map(|p| p.distance).collect(),
            concentrations: points.iter().map(|p| p.concentration).collect(),
            uncertainties: points.iter().map(|p| p.uncertainty).collect(),
        })
    }

    /// Build from `(distance, concentration)` pairs sharing one uncertainty
    ///
    /// This is the shape of data the measuring instrument exports.
    pub fn from_pairs(pairs: &[(f64, f64)], uncertainty: f64) -> Result<Self> {
        let points: Vec<ProfilePoint> = pairs
            .iter()
            .map(|&(distance, concentration)| ProfilePoint {
                distance,
                concentration,
                uncertainty,
            })
            .collect();
        Self::new(&points)
    }

    /// Number of measured points (`real_i`)
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Always false for a validated profile
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distances \[µm\]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Measured concentrations
    pub fn concentrations(&self) -> &[f64] {
        &self.concentrations
    }

    /// Uncertainty half-widths
    pub fn uncertainties(&self) -> &[f64] {
        &self.uncertainties
    }

    /// Physical length of the traverse: the largest distance (`length_nat`)
    pub fn length(&self) -> f64 {
        // non-empty and sorted by construction
        self.distances[self.distances.len() - 1]
    }

    /// Highest measured concentration
    pub fn max_concentration(&self) -> f64 {
        self.concentrations
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Iterate over the points in distance order
    pub fn points(&self) -> impl Iterator<Item = ProfilePoint> + '_ {
        (0..self.len()).map(move |i| ProfilePoint {
            distance: self.distances[i],
            concentration: self.concentrations[i],
            uncertainty: self.uncertainties[i],
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
