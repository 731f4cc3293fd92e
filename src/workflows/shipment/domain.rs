use super::fields::FieldName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mode {
    Air,
    Sea,
}

impl Mode {
    pub const fn ordered() -> [Self; 2] {
        [Self::Air, Self::Sea]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Air => "Air",
            Self::Sea => "Sea",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = UnknownSelection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownSelection::Mode(value.to_owned()))
    }
}

/// Destination markets served by the shipment desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    Colombia,
    #[serde(rename = "Costa Rica")]
    CostaRica,
    #[serde(rename = "El Salvador")]
    ElSalvador,
    Guatemala,
    Honduras,
    Japan,
    Mauritius,
    Panama,
    Taiwan,
}

impl Country {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Colombia,
            Self::CostaRica,
            Self::ElSalvador,
            Self::Guatemala,
            Self::Honduras,
            Self::Japan,
            Self::Mauritius,
            Self::Panama,
            Self::Taiwan,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Colombia => "Colombia",
            Self::CostaRica => "Costa Rica",
            Self::ElSalvador => "El Salvador",
            Self::Guatemala => "Guatemala",
            Self::Honduras => "Honduras",
            Self::Japan => "Japan",
            Self::Mauritius => "Mauritius",
            Self::Panama => "Panama",
            Self::Taiwan => "Taiwan",
        }
    }

    pub const fn is_japan_or_taiwan(self) -> bool {
        matches!(self, Self::Japan | Self::Taiwan)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = UnknownSelection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|country| country.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownSelection::Country(value.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownSelection {
    #[error("unknown transport mode '{0}' (expected Air or Sea)")]
    Mode(String),
    #[error("unknown destination country '{0}'")]
    Country(String),
}

/// Scope marker deciding which shipments a field applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicabilityTag {
    All,
    Country(Country),
    JapanTaiwan,
    Air,
    Sea,
    Theft,
}

impl ApplicabilityTag {
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Country(country) => country.label(),
            Self::JapanTaiwan => "Japan/Taiwan",
            Self::Air => "Air",
            Self::Sea => "Sea",
            Self::Theft => "Theft",
        }
    }

    pub(crate) fn matches_mode(self, mode: Mode) -> bool {
        matches!(
            (self, mode),
            (Self::Air, Mode::Air) | (Self::Sea, Mode::Sea)
        )
    }

    pub(crate) const fn is_mode(self) -> bool {
        matches!(self, Self::Air | Self::Sea)
    }

    /// Tags that name a destination (a single country or the combined Japan/Taiwan tag).
    pub(crate) const fn is_country_scoped(self) -> bool {
        !matches!(self, Self::All | Self::Air | Self::Sea | Self::Theft)
    }
}

impl Serialize for ApplicabilityTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Text,
    Date,
    Integer,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldCategory {
    Identifiers,
    #[serde(rename = "Order References")]
    OrderReferences,
    #[serde(rename = "Container Info")]
    ContainerInfo,
    #[serde(rename = "Value & Customs")]
    ValueAndCustoms,
    #[serde(rename = "Air Freight")]
    AirFreight,
    #[serde(rename = "Sea Freight")]
    SeaFreight,
    Schedule,
    Carrier,
    Documentation,
    Location,
    #[serde(rename = "Japan Specific")]
    JapanSpecific,
    #[serde(rename = "Theft Tracking")]
    TheftTracking,
    Notes,
}

impl FieldCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Identifiers => "Identifiers",
            Self::OrderReferences => "Order References",
            Self::ContainerInfo => "Container Info",
            Self::ValueAndCustoms => "Value & Customs",
            Self::AirFreight => "Air Freight",
            Self::SeaFreight => "Sea Freight",
            Self::Schedule => "Schedule",
            Self::Carrier => "Carrier",
            Self::Documentation => "Documentation",
            Self::Location => "Location",
            Self::JapanSpecific => "Japan Specific",
            Self::TheftTracking => "Theft Tracking",
            Self::Notes => "Notes",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDefinition {
    pub name: FieldName,
    pub required: bool,
    pub data_type: DataType,
    pub applies_to: &'static [ApplicabilityTag],
    pub category: FieldCategory,
    pub description: &'static str,
    pub example: &'static str,
}

impl FieldDefinition {
    /// Input hint shown in an empty form control.
    pub fn placeholder(&self) -> String {
        if !self.example.is_empty() {
            return self.example.to_string();
        }

        match self.data_type {
            DataType::Date => "YYYY-MM-DD".to_string(),
            DataType::Integer => "Enter number".to_string(),
            DataType::Decimal => "Enter decimal".to_string(),
            DataType::Text => format!("Enter {}", self.name.display_label().to_lowercase()),
        }
    }
}

/// Inconsistencies between the static field catalog, step map and step table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("field {0} is declared more than once in the catalog")]
    DuplicateField(FieldName),
    #[error("field {0} has no catalog definition")]
    MissingField(FieldName),
    #[error("field {0} has an empty applicability set")]
    EmptyApplicability(FieldName),
    #[error("field {field} maps to step {step}, which does not accept catalog fields")]
    UnmappedStep { field: FieldName, step: u8 },
    #[error("step table is out of order at position {position} (found step {step})")]
    StepOrdering { position: usize, step: u8 },
}
