//! Registered user records and their creation/update payloads
//!
//! Field names mirror the document schema the registry was collected under,
//! which mixes Spanish (personal data) and English (residency) keys. The serde
//! renames keep the wire format byte-compatible with the existing collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// National identity document carried by a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDocument {
    pub tipo: String,
    pub numero: String,
}

/// A registered user as stored in the document collection.
///
/// The id is assigned by the store on creation and never changes. The record
/// is only mutated through explicit update calls, which re-stamp `updated_at`
/// on the store side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub nombre: String,
    pub apellidos: String,
    pub documento_de_identidad: IdentityDocument,
    pub telefono: i64,
    pub genero: String,
    pub fecha_de_nacimiento: DateTime<Utc>,
    pub department_of_residency: String,
    pub city_of_residence: String,
    pub url_documento_identidad: String,
    #[serde(rename = "terminosYcondiciones")]
    pub terminos_y_condiciones: bool,
    pub politica_tratamiento_datos: bool,
    pub tratamiento_datos_personales: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a user: everything except the store-assigned id and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub nombre: String,
    pub apellidos: String,
    pub documento_de_identidad: IdentityDocument,
    pub telefono: i64,
    pub genero: String,
    pub fecha_de_nacimiento: DateTime<Utc>,
    pub department_of_residency: String,
    pub city_of_residence: String,
    pub url_documento_identidad: String,
    #[serde(rename = "terminosYcondiciones")]
    pub terminos_y_condiciones: bool,
    pub politica_tratamiento_datos: bool,
    pub tratamiento_datos_personales: bool,
}

impl NewUser {
    /// Reject payloads missing the fields the registry cannot function
    /// without. Consent flags are allowed to be false; they are recorded
    /// as given.
    pub fn validate(&self) -> crate::errors::Result<()> {
        let required = [
            ("nombre", &self.nombre),
            ("apellidos", &self.apellidos),
            ("genero", &self.genero),
            ("departmentOfResidency", &self.department_of_residency),
            ("cityOfResidence", &self.city_of_residence),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(crate::errors::Error::validation(field, "must not be empty"));
            }
        }
        if self.documento_de_identidad.numero.trim().is_empty() {
            return Err(crate::errors::Error::validation(
                "documentoDeIdentidad.numero",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// Materialize a full record with a store-assigned id and creation stamp.
    #[must_use]
    pub fn into_record(self, id: String, now: DateTime<Utc>) -> UserRecord {
        UserRecord {
            id,
            nombre: self.nombre,
            apellidos: self.apellidos,
            documento_de_identidad: self.documento_de_identidad,
            telefono: self.telefono,
            genero: self.genero,
            fecha_de_nacimiento: self.fecha_de_nacimiento,
            department_of_residency: self.department_of_residency,
            city_of_residence: self.city_of_residence,
            url_documento_identidad: self.url_documento_identidad,
            terminos_y_condiciones: self.terminos_y_condiciones,
            politica_tratamiento_datos: self.politica_tratamiento_datos,
            tratamiento_datos_personales: self.tratamiento_datos_personales,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Partial update for a user record. `None` fields are left untouched; the
/// store stamps `updated_at` itself on every applied patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellidos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documento_de_identidad: Option<IdentityDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_de_nacimiento: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_of_residency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_of_residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_documento_identidad: Option<String>,
    #[serde(rename = "terminosYcondiciones", skip_serializing_if = "Option::is_none")]
    pub terminos_y_condiciones: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub politica_tratamiento_datos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tratamiento_datos_personales: Option<bool>,
}

impl UserPatch {
    /// Apply this patch onto an existing record, stamping the update time.
    pub fn apply(self, record: &mut UserRecord, now: DateTime<Utc>) {
        if let Some(v) = self.nombre {
            record.nombre = v;
        }
        if let Some(v) = self.apellidos {
            record.apellidos = v;
        }
        if let Some(v) = self.documento_de_identidad {
            record.documento_de_identidad = v;
        }
        if let Some(v) = self.telefono {
            record.telefono = v;
        }
        if let Some(v) = self.genero {
            record.genero = v;
        }
        if let Some(v) = self.fecha_de_nacimiento {
            record.fecha_de_nacimiento = v;
        }
        if let Some(v) = self.department_of_residency {
            record.department_of_residency = v;
        }
        if let Some(v) = self.city_of_residence {
            record.city_of_residence = v;
        }
        if let Some(v) = self.url_documento_identidad {
            record.url_documento_identidad = v;
        }
        if let Some(v) = self.terminos_y_condiciones {
            record.terminos_y_condiciones = v;
        }
        if let Some(v) = self.politica_tratamiento_datos {
            record.politica_tratamiento_datos = v;
        }
        if let Some(v) = self.tratamiento_datos_personales {
            record.tratamiento_datos_personales = v;
        }
        record.updated_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::sample_user;

    #[test]
    fn wire_names_match_collection_schema() {
        let user = sample_user("u-1");
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("documentoDeIdentidad").is_some());
        assert!(json.get("fechaDeNacimiento").is_some());
        assert!(json.get("departmentOfResidency").is_some());
        assert!(json.get("urlDocumentoIdentidad").is_some());
        // Historical quirk in the collection: lowercase 'c' after the 'Y'.
        assert!(json.get("terminosYcondiciones").is_some());
        assert!(json.get("terminos_y_condiciones").is_none());
    }

    #[test]
    fn patch_leaves_unset_fields_untouched() {
        let mut user = sample_user("u-2");
        let original_name = user.nombre.clone();
        let patch = super::UserPatch {
            city_of_residence: Some("Medellín".into()),
            ..Default::default()
        };

        let now = chrono::Utc::now();
        patch.apply(&mut user, now);

        assert_eq!(user.nombre, original_name);
        assert_eq!(user.city_of_residence, "Medellín");
        assert_eq!(user.updated_at, Some(now));
    }
}
