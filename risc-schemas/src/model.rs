//! Model choices offered on the general settings section and the form sections they
//! switch on and off.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The screening model chosen by the user. `Unset` until the first selection.
///
/// Serializes as the snake_case variant name. Deserializing goes through `FromStr`, so
/// YAML accepts the same labels and aliases as the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSelection {
    VadoseSoilToGroundwater,
    SaturatedSoilToGroundwater,
    DissolvedSource,
    #[default]
    Unset,
}

impl ModelSelection {
    /// The three selectable models, in dropdown order.
    pub const CHOICES: [ModelSelection; 3] = [
        ModelSelection::VadoseSoilToGroundwater,
        ModelSelection::SaturatedSoilToGroundwater,
        ModelSelection::DissolvedSource,
    ];

    /// The label shown in the model dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            ModelSelection::VadoseSoilToGroundwater => "Vadose Soil to Groundwater",
            ModelSelection::SaturatedSoilToGroundwater => "Saturated Soil to Groundwater",
            ModelSelection::DissolvedSource => "Dissolved Source",
            ModelSelection::Unset => "Unset",
        }
    }

    /// The model-dependent section this selection enables, if any.
    pub fn section(&self) -> Option<SectionId> {
        match self {
            ModelSelection::VadoseSoilToGroundwater => Some(SectionId::Vadose),
            ModelSelection::SaturatedSoilToGroundwater => Some(SectionId::Saturated),
            ModelSelection::DissolvedSource => Some(SectionId::Dissolved),
            ModelSelection::Unset => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, ModelSelection::Unset)
    }
}

impl fmt::Display for ModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a model label or alias is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown model '{0}'")]
pub struct UnknownModel(pub String);

impl FromStr for ModelSelection {
    type Err = UnknownModel;

    /// Accepts the dropdown label (any case), its snake_case form or a short alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', " ");
        let selection = match needle.as_str() {
            "vadose" | "vadose soil to groundwater" => ModelSelection::VadoseSoilToGroundwater,
            "saturated" | "saturated soil to groundwater" => {
                ModelSelection::SaturatedSoilToGroundwater
            }
            "dissolved" | "dissolved source" => ModelSelection::DissolvedSource,
            "unset" => ModelSelection::Unset,
            _ => return Err(UnknownModel(s.trim().to_string())),
        };
        Ok(selection)
    }
}

impl<'de> Deserialize<'de> for ModelSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A section (tab) of the parameter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    General,
    Vadose,
    Saturated,
    Dissolved,
    Contaminants,
    Results,
}

impl SectionId {
    /// All sections in tab order.
    pub const ALL: [SectionId; 6] = [
        SectionId::General,
        SectionId::Vadose,
        SectionId::Saturated,
        SectionId::Dissolved,
        SectionId::Contaminants,
        SectionId::Results,
    ];

    /// The three sections gated by the model selection.
    pub const MODEL_DEPENDENT: [SectionId; 3] =
        [SectionId::Vadose, SectionId::Saturated, SectionId::Dissolved];

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::General => "General Settings",
            SectionId::Vadose => "Vadose Zone",
            SectionId::Saturated => "Saturated Zone",
            SectionId::Dissolved => "Dissolved Source",
            SectionId::Contaminants => "Contaminants",
            SectionId::Results => "Results",
        }
    }

    pub fn is_model_dependent(&self) -> bool {
        Self::MODEL_DEPENDENT.contains(self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
