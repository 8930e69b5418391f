//! Pure derivation of `UserStatistics` from a user collection
//!
//! Total over any input, including the empty collection: all counts are zero
//! and all rates are 0 rather than dividing by zero.
//!
//! Age is computed as calendar year difference only, with no month/day
//! adjustment, and ages outside every bucket (under 18 in particular) are
//! counted nowhere. Both behaviors keep published statistics stable across
//! deployments; see DESIGN.md before changing either.

use chrono::Datelike;
use padron_core::{Clock, SystemClock, UserRecord, UserStatistics};

/// Compute statistics against the current calendar year.
#[must_use]
pub fn compute(users: &[UserRecord]) -> UserStatistics {
    compute_at(users, SystemClock.current_year())
}

/// Compute statistics with an explicit "current year" for age bucketing.
#[must_use]
pub fn compute_at(users: &[UserRecord], current_year: i32) -> UserStatistics {
    let mut stats = UserStatistics {
        total_users: users.len() as u64,
        ..Default::default()
    };

    let mut accepted_terms = 0u64;
    let mut accepted_policy = 0u64;
    let mut accepted_data = 0u64;

    for user in users {
        match user.genero.to_lowercase().as_str() {
            "masculino" | "male" => stats.gender_breakdown.male += 1,
            "femenino" | "female" => stats.gender_breakdown.female += 1,
            _ => stats.gender_breakdown.other += 1,
        }

        *stats
            .department_breakdown
            .entry(user.department_of_residency.clone())
            .or_insert(0) += 1;
        *stats
            .city_breakdown
            .entry(user.city_of_residence.clone())
            .or_insert(0) += 1;

        if user.terminos_y_condiciones {
            accepted_terms += 1;
        }
        if user.politica_tratamiento_datos {
            accepted_policy += 1;
        }
        if user.tratamiento_datos_personales {
            accepted_data += 1;
        }

        let age = current_year - user.fecha_de_nacimiento.year();
        match age {
            18..=25 => stats.age_groups.from_18_to_25 += 1,
            26..=35 => stats.age_groups.from_26_to_35 += 1,
            36..=45 => stats.age_groups.from_36_to_45 += 1,
            46..=55 => stats.age_groups.from_46_to_55 += 1,
            age if age > 55 => stats.age_groups.over_55 += 1,
            // Under 18: counted in no bucket.
            _ => {}
        }
    }

    if stats.total_users > 0 {
        let total = stats.total_users as f64;
        stats.acceptance_rates.terminos_y_condiciones = accepted_terms as f64 / total * 100.0;
        stats.acceptance_rates.politica_tratamiento_datos = accepted_policy as f64 / total * 100.0;
        stats.acceptance_rates.tratamiento_datos_personales = accepted_data as f64 / total * 100.0;
    }

    stats
}
