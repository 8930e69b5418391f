//! Test helpers shared across the workspace
//!
//! A manually advanced clock for TTL/expiry windows and a sample user record
//! factory. Only intended for use from `#[cfg(test)]` code in the other
//! crates; nothing here is part of the stable API.

use crate::clock::Clock;
use crate::types::{IdentityDocument, UserRecord};
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now_ms: AtomicI64,
}

impl ManualClock {
    #[must_use]
    pub fn new(now_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(now_ms),
        }
    }

    /// Start at an arbitrary but realistic instant.
    #[must_use]
    pub fn recent() -> Self {
        // 2024-01-01T00:00:00Z
        Self::new(1_704_067_200_000)
    }

    pub fn advance_ms(&self, delta: i64) {
        self.now_ms.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn set_ms(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

/// A plausible registered user with the given id. Tests tweak individual
/// fields via struct update or direct mutation.
#[must_use]
pub fn sample_user(id: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        nombre: "María".to_string(),
        apellidos: "García López".to_string(),
        documento_de_identidad: IdentityDocument {
            tipo: "CC".to_string(),
            numero: "1032456789".to_string(),
        },
        telefono: 3_001_234_567,
        genero: "Femenino".to_string(),
        fecha_de_nacimiento: Utc.with_ymd_and_hms(1990, 6, 15, 0, 0, 0).unwrap(),
        department_of_residency: "Cundinamarca".to_string(),
        city_of_residence: "Bogotá".to_string(),
        url_documento_identidad: "https://storage.example.com/docs/1032456789.pdf".to_string(),
        terminos_y_condiciones: true,
        politica_tratamiento_datos: true,
        tratamiento_datos_personales: true,
        created_at: Some(Utc.with_ymd_and_hms(2023, 11, 2, 10, 30, 0).unwrap()),
        updated_at: Some(Utc.with_ymd_and_hms(2023, 11, 2, 10, 30, 0).unwrap()),
    }
}

/// Like `sample_user` but with a chosen gender and birth year, the two fields
/// the aggregator buckets on.
#[must_use]
pub fn sample_user_with(id: &str, genero: &str, birth_year: i32) -> UserRecord {
    let mut user = sample_user(id);
    user.genero = genero.to_string();
    user.fecha_de_nacimiento = Utc.with_ymd_and_hms(birth_year, 6, 15, 0, 0, 0).unwrap();
    user
}
