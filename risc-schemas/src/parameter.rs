use crate::model::SectionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one block of parameters in the registry. The vadose section is split
/// into five blocks; the saturated and dissolved sections have one each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterGroupId {
    VadoseLens,
    VadoseSource,
    VadoseUnsaturated,
    VadoseSaturated,
    VadoseWell,
    Saturated,
    Dissolved,
}

impl ParameterGroupId {
    pub const ALL: [ParameterGroupId; 7] = [
        ParameterGroupId::VadoseLens,
        ParameterGroupId::VadoseSource,
        ParameterGroupId::VadoseUnsaturated,
        ParameterGroupId::VadoseSaturated,
        ParameterGroupId::VadoseWell,
        ParameterGroupId::Saturated,
        ParameterGroupId::Dissolved,
    ];

    /// The form section this group is displayed in.
    pub fn section(&self) -> SectionId {
        match self {
            ParameterGroupId::VadoseLens
            | ParameterGroupId::VadoseSource
            | ParameterGroupId::VadoseUnsaturated
            | ParameterGroupId::VadoseSaturated
            | ParameterGroupId::VadoseWell => SectionId::Vadose,
            ParameterGroupId::Saturated => SectionId::Saturated,
            ParameterGroupId::Dissolved => SectionId::Dissolved,
        }
    }

    /// Groups of `section` in display order. Empty for sections without parameters.
    pub fn in_section(section: SectionId) -> Vec<ParameterGroupId> {
        Self::ALL
            .iter()
            .copied()
            .filter(|g| g.section() == section)
            .collect()
    }

    pub fn key(&self) -> &'static str {
        match self {
            ParameterGroupId::VadoseLens => "vadose_lens",
            ParameterGroupId::VadoseSource => "vadose_source",
            ParameterGroupId::VadoseUnsaturated => "vadose_unsaturated",
            ParameterGroupId::VadoseSaturated => "vadose_saturated",
            ParameterGroupId::VadoseWell => "vadose_well",
            ParameterGroupId::Saturated => "saturated",
            ParameterGroupId::Dissolved => "dissolved",
        }
    }
}

impl fmt::Display for ParameterGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A named numeric parameter and its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefault {
    pub name: String,
    pub value: f64,
}

/// An ordered block of parameter defaults. Order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterGroup {
    pub group_id: ParameterGroupId,
    pub title: String,
    pub parameters: Vec<ParameterDefault>,
}

impl ParameterGroup {
    pub fn get(&self, name: &str) -> Option<&ParameterDefault> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
