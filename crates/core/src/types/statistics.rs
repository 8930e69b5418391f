//! Derived demographic and compliance statistics
//!
//! `UserStatistics` is never persisted: it is always a pure function of the
//! user collection at computation time. The aggregation itself lives in
//! `padron-stats`; this module only defines the snapshot shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Gender counts over the whole collection. Every record lands in exactly one
/// bucket, so the three counts always sum to the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderBreakdown {
    pub male: u64,
    pub female: u64,
    pub other: u64,
}

impl GenderBreakdown {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.male + self.female + self.other
    }
}

/// Percentage (0–100) of users that accepted each consent flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptanceRates {
    #[serde(rename = "terminosYcondiciones")]
    pub terminos_y_condiciones: f64,
    pub politica_tratamiento_datos: f64,
    pub tratamiento_datos_personales: f64,
}

/// Five fixed, disjoint age buckets. Users under 18 or outside every range are
/// not counted anywhere, so the bucket sum can fall short of the user total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroups {
    #[serde(rename = "18-25")]
    pub from_18_to_25: u64,
    #[serde(rename = "26-35")]
    pub from_26_to_35: u64,
    #[serde(rename = "36-45")]
    pub from_36_to_45: u64,
    #[serde(rename = "46-55")]
    pub from_46_to_55: u64,
    #[serde(rename = "55+")]
    pub over_55: u64,
}

impl AgeGroups {
    #[must_use]
    pub fn bucketed(&self) -> u64 {
        self.from_18_to_25
            + self.from_26_to_35
            + self.from_36_to_45
            + self.from_46_to_55
            + self.over_55
    }
}

/// Full statistics snapshot consumed by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub total_users: u64,
    pub gender_breakdown: GenderBreakdown,
    pub department_breakdown: BTreeMap<String, u64>,
    pub city_breakdown: BTreeMap<String, u64>,
    pub acceptance_rates: AcceptanceRates,
    pub age_groups: AgeGroups,
}
