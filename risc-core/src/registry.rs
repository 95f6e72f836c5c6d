//! Default parameter values for every form section and the chemical degradation table.
//!
//! The built-in tables are plain data. A YAML registry file can replace individual
//! groups or the whole chemical table; the result is validated before use.

use crate::error::RiscError;
use risc_schemas::{
    chemical::ChemicalDegradation,
    file_formats::RegistryFile,
    model::SectionId,
    parameter::{ParameterDefault, ParameterGroup, ParameterGroupId},
};
use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};

const VADOSE_LENS: &[(&str, f64)] = &[
    ("Depth to Top of Lens (m)", 1.0),
    ("Thickness of Lens (m)", 0.5),
    ("Lens Hydraulic Conductivity (m/day)", 0.01),
    ("Lens Total Porosity (cm³/cm³)", 0.35),
    ("Lens Water-filled Porosity (cm³/cm³)", 0.25),
];

const VADOSE_SOURCE: &[(&str, f64)] = &[
    ("Source Length Parallel to Flow (m)", 10.0),
    ("Source Width Perpendicular to Flow (m)", 10.0),
    ("Source Thickness (m)", 1.0),
    ("Depth to Top of Source (m)", 0.5),
    ("Infiltration Rate (m/year)", 0.3),
];

const VADOSE_UNSATURATED: &[(&str, f64)] = &[
    ("Unsaturated Zone Thickness (m)", 3.0),
    ("Unsaturated Total Porosity (cm³/cm³)", 0.38),
    ("Unsaturated Water-filled Porosity (cm³/cm³)", 0.15),
    ("Unsaturated Fraction Organic Carbon (g oc/g soil)", 0.006),
    ("Unsaturated Soil Bulk Density (g/cm³)", 1.64),
];

const AQUIFER: &[(&str, f64)] = &[
    ("Hydraulic Gradient", 0.1),
    ("Effective Porosity", 0.25),
    ("Fraction Organic Carbon", 0.009),
    ("Hydraulic Conductivity", 0.1),
    ("Soil Bulk Density", 1.64),
    ("Longitudinal Dispersion", 0.0),
    ("Transverse Dispersion", 0.0),
    ("Vertical Dispersion", 0.0),
];

const VADOSE_WELL: &[(&str, f64)] = &[
    ("Receptor Distance Downgradient (m)", 30.0),
    ("Receptor Distance Crossgradient (m)", 0.0),
    ("Depth to Top of Well Screen (m)", 0.0),
    ("Depth to Bottom of Well Screen (m)", 1.0),
];

const DISSOLVED: &[(&str, f64)] = &[
    ("Hydraulic Gradient (m/m)", 0.1),
    ("Effective Porosity (cm³/cm³)", 0.25),
    ("Fraction Organic Carbon (g oc/g soil)", 0.009),
    ("Hydraulic Conductivity (m/day)", 0.1),
    ("Soil Bulk Density (g/cm³)", 1.64),
    ("Longitudinal Dispersion (0 for code calculated)(m)", 0.0),
    ("Transverse Dispersion (0 for code calculated)(m)", 0.0),
    ("Vertical Dispersion (0 for code calculated)(m)", 0.0),
    ("Thickness of Source Area (m)", 1.0),
    ("Length of Source Area (m)", 10.0),
    ("Width of Source Area (m)", 10.0),
    ("Receptor Distance Downgradient (m)", 30.0),
    ("Receptor Distance Crossgradient (m)", 0.0),
    ("Depth to Top of Well Screen (m)", 0.0),
    ("Depth to Bottom of Well Screen (m)", 1.0),
    ("No. of Points Used to Calculated Con. (Min : 2)", 2.0),
];

const CHEMICAL_DEGRADATION: &[(&str, f64)] = &[
    ("Benzene", 0.00096),
    ("Toluene", 0.025),
    ("Ethylbenzene", 0.003),
    ("Xylenes", 0.00019),
];

/// Ordered chemical → first-order degradation rate lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct DegradationTable {
    entries: Vec<ChemicalDegradation>,
}

impl DegradationTable {
    pub fn new(entries: Vec<ChemicalDegradation>) -> Self {
        Self { entries }
    }

    pub fn rate(&self, chemical: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|c| c.chemical == chemical)
            .map(|c| c.rate_per_day)
    }

    pub fn contains(&self, chemical: &str) -> bool {
        self.rate(chemical).is_some()
    }

    /// Chemical names in table order.
    pub fn chemicals(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.chemical.as_str())
    }

    pub fn entries(&self) -> &[ChemicalDegradation] {
        &self.entries
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|c| c.chemical.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All parameter defaults, keyed by group, plus the degradation table.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRegistry {
    groups: BTreeMap<ParameterGroupId, ParameterGroup>,
    chemicals: DegradationTable,
}

impl ParameterRegistry {
    /// The defaults shipped with the form.
    pub fn builtin() -> Self {
        let groups = ParameterGroupId::ALL
            .iter()
            .map(|&id| {
                let (title, table) = builtin_table(id);
                let group = ParameterGroup {
                    group_id: id,
                    title: title.to_string(),
                    parameters: table
                        .iter()
                        .map(|&(name, value)| ParameterDefault {
                            name: name.to_string(),
                            value,
                        })
                        .collect(),
                };
                (id, group)
            })
            .collect();

        let chemicals = DegradationTable::new(
            CHEMICAL_DEGRADATION
                .iter()
                .map(|&(chemical, rate_per_day)| ChemicalDegradation {
                    chemical: chemical.to_string(),
                    rate_per_day,
                })
                .collect(),
        );

        Self { groups, chemicals }
    }

    /// Loads the built-in defaults with the overrides from a YAML registry file applied.
    pub fn load(path: &str) -> Result<Self, RiscError> {
        let content = fs::read_to_string(Path::new(path))
            .map_err(|e| RiscError::FileIO(path.to_string(), e))?;
        Self::from_yaml_str(&content, path)
    }

    /// `source` names the origin of `yaml` in error messages.
    pub fn from_yaml_str(yaml: &str, source: &str) -> Result<Self, RiscError> {
        let file: RegistryFile = serde_yaml::from_str(yaml)
            .map_err(|e| RiscError::YamlParsing(source.to_string(), e))?;
        log::debug!(
            "Registry file '{}' (schema {}): {} group(s), {} chemical(s)",
            source,
            file.schema_version,
            file.parameter_groups.len(),
            file.chemicals.len()
        );
        Self::builtin().with_overrides(file)
    }

    /// Applies a registry file on top of this registry and validates the result.
    pub fn with_overrides(mut self, file: RegistryFile) -> Result<Self, RiscError> {
        let mut seen = HashSet::new();
        for group in file.parameter_groups {
            if !seen.insert(group.group_id) {
                return Err(RiscError::ConfigError(format!(
                    "group '{}' is listed more than once",
                    group.group_id
                )));
            }
            self.groups.insert(group.group_id, group);
        }
        if !file.chemicals.is_empty() {
            self.chemicals = DegradationTable::new(file.chemicals);
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that parameter names are unique within each section, values are finite
    /// and the chemical table is usable.
    pub fn validate(&self) -> Result<(), RiscError> {
        for id in ParameterGroupId::ALL {
            if !self.groups.contains_key(&id) {
                return Err(RiscError::ConfigError(format!("group '{}' is missing", id)));
            }
        }

        for section in SectionId::MODEL_DEPENDENT {
            let mut names = HashSet::new();
            for id in ParameterGroupId::in_section(section) {
                for param in &self.groups[&id].parameters {
                    if param.name.trim().is_empty() {
                        return Err(RiscError::ConfigError(format!(
                            "group '{}' has a parameter without a name",
                            id
                        )));
                    }
                    if !param.value.is_finite() {
                        return Err(RiscError::ConfigError(format!(
                            "parameter '{}' in group '{}' is not a finite number",
                            param.name, id
                        )));
                    }
                    if !names.insert(param.name.as_str()) {
                        return Err(RiscError::ConfigError(format!(
                            "parameter '{}' appears more than once in section '{}'",
                            param.name, section
                        )));
                    }
                }
            }
        }

        if self.chemicals.is_empty() {
            return Err(RiscError::ConfigError(
                "the chemical degradation table is empty".to_string(),
            ));
        }
        let mut chemicals = HashSet::new();
        for entry in self.chemicals.entries() {
            if entry.chemical.trim().is_empty() {
                return Err(RiscError::ConfigError(
                    "the chemical degradation table has an entry without a name".to_string(),
                ));
            }
            if !entry.rate_per_day.is_finite() || entry.rate_per_day < 0.0 {
                return Err(RiscError::ConfigError(format!(
                    "degradation rate for '{}' must be a non-negative number",
                    entry.chemical
                )));
            }
            if !chemicals.insert(entry.chemical.as_str()) {
                return Err(RiscError::ConfigError(format!(
                    "chemical '{}' appears more than once",
                    entry.chemical
                )));
            }
        }
        Ok(())
    }

    pub fn group(&self, id: ParameterGroupId) -> Option<&ParameterGroup> {
        self.groups.get(&id)
    }

    pub fn groups(&self) -> impl Iterator<Item = &ParameterGroup> {
        self.groups.values()
    }

    pub fn chemicals(&self) -> &DegradationTable {
        &self.chemicals
    }
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_table(id: ParameterGroupId) -> (&'static str, &'static [(&'static str, f64)]) {
    match id {
        ParameterGroupId::VadoseLens => ("Lens", VADOSE_LENS),
        ParameterGroupId::VadoseSource => ("Source", VADOSE_SOURCE),
        ParameterGroupId::VadoseUnsaturated => ("Unsaturated Zone", VADOSE_UNSATURATED),
        ParameterGroupId::VadoseSaturated => ("Saturated Zone", AQUIFER),
        ParameterGroupId::VadoseWell => ("Well", VADOSE_WELL),
        ParameterGroupId::Saturated => ("Saturated Zone", AQUIFER),
        ParameterGroupId::Dissolved => ("Dissolved Source", DISSOLVED),
    }
}
