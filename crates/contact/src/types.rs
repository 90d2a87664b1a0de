use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum ServiceType {
    #[serde(rename = "portao-automatizado")]
    #[strum(serialize = "portao-automatizado")]
    AutomatedGate,
    #[serde(rename = "portas-aluminio")]
    #[strum(serialize = "portas-aluminio")]
    AluminumDoors,
    #[serde(rename = "solucoes-vidro")]
    #[strum(serialize = "solucoes-vidro")]
    GlassSolutions,
    #[serde(rename = "outros")]
    #[strum(serialize = "outros")]
    Other,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::AutomatedGate => "Portão Automatizado",
            ServiceType::AluminumDoors => "Portas de Alumínio",
            ServiceType::GlassSolutions => "Soluções em Vidro",
            ServiceType::Other => "Outros",
        }
    }
}

/// Editable keys of a contact draft, named as they appear on the wire.
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "phone")]
    Phone,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "serviceType")]
    ServiceType,
    #[strum(serialize = "description")]
    Description,
}

impl Field {
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Description)
    }
}
