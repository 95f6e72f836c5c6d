use crate::{chemical::ChemicalDegradation, parameter::ParameterGroup};
use serde::Deserialize;

/// YAML file overriding the built-in parameter defaults and chemical table.
///
/// Each listed group replaces the built-in group with the same `group_id`; a non-empty
/// `chemicals` list replaces the whole degradation table.
#[derive(Debug, Deserialize)]
pub struct RegistryFile {
    pub schema_version: String,
    #[serde(default)]
    pub parameter_groups: Vec<ParameterGroup>,
    #[serde(default)]
    pub chemicals: Vec<ChemicalDegradation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParameterGroupId;

    #[test]
    fn optional_sections_default_to_empty() {
        let file: RegistryFile = serde_yaml::from_str("schema_version: \"1\"\n").unwrap();
        assert!(file.parameter_groups.is_empty());
        assert!(file.chemicals.is_empty());
    }

    #[test]
    fn reads_groups_and_chemicals() {
        let yaml = r#"
schema_version: "1"
parameter_groups:
  - group_id: saturated
    title: Saturated Zone
    parameters:
      - name: Hydraulic Gradient
        value: 0.2
chemicals:
  - chemical: Benzene
    rate_per_day: 0.001
"#;
        let file: RegistryFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.parameter_groups[0].group_id, ParameterGroupId::Saturated);
        assert_eq!(file.parameter_groups[0].parameters[0].value, 0.2);
        assert_eq!(file.chemicals[0].chemical, "Benzene");
    }
}
