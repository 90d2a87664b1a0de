use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::VariantArray;
use validator::Validate;

use crate::{Field, ServiceType};

/// Contact draft, also the JSON body posted to the intake endpoint.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub service_type: String,
    pub description: String,
}

impl ContactRequest {
    /// Returns a copy of the draft with one field replaced.
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();

        match field {
            Field::Name => next.name = value,
            Field::Phone => next.phone = value,
            Field::Email => next.email = value,
            Field::ServiceType => next.service_type = value,
            Field::Description => next.description = value,
        }

        next
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::ServiceType => &self.service_type,
            Field::Description => &self.description,
        }
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::VARIANTS
            .iter()
            .copied()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// True when `service` (a `ServiceType` or its wire value) is selected.
    pub fn is_service(&self, service: impl AsRef<str>) -> bool {
        self.service_type == service.as_ref()
    }

    /// Checks required fields first, then parses the selected service.
    pub fn check(&self) -> valdeci_shared::Result<ServiceType> {
        self.validate()?;

        match ServiceType::from_str(&self.service_type) {
            Ok(service) => Ok(service),
            Err(_) => valdeci_shared::bail!("Tipo de serviço inválido"),
        }
    }
}
