use risc_schemas::parameter::{ParameterGroup, ParameterGroupId};

/// Current values of one parameter group, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    group_id: ParameterGroupId,
    values: Vec<(String, f64)>,
}

impl FormState {
    /// A form holding the group's default values.
    pub fn seeded(group: &ParameterGroup) -> Self {
        Self {
            group_id: group.group_id,
            values: group
                .parameters
                .iter()
                .map(|p| (p.name.clone(), p.value))
                .collect(),
        }
    }

    pub fn group_id(&self) -> ParameterGroupId {
        self.group_id
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Replaces the value of an existing parameter. Returns the previous value, or
    /// `None` when the form has no such parameter.
    pub fn set(&mut self, name: &str, value: f64) -> Option<f64> {
        self.values
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, v)| std::mem::replace(v, value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risc_schemas::parameter::ParameterDefault;

    fn group() -> ParameterGroup {
        ParameterGroup {
            group_id: ParameterGroupId::Saturated,
            title: "Saturated Zone".to_string(),
            parameters: vec![
                ParameterDefault { name: "Hydraulic Gradient".into(), value: 0.1 },
                ParameterDefault { name: "Effective Porosity".into(), value: 0.25 },
            ],
        }
    }

    #[test]
    fn seeded_form_mirrors_defaults_in_order() {
        let form = FormState::seeded(&group());
        let values: Vec<_> = form.iter().collect();
        assert_eq!(values, vec![("Hydraulic Gradient", 0.1), ("Effective Porosity", 0.25)]);
        assert_eq!(form.group_id(), ParameterGroupId::Saturated);
    }

    #[test]
    fn set_only_touches_known_parameters() {
        let mut form = FormState::seeded(&group());
        assert_eq!(form.set("Effective Porosity", 0.3), Some(0.25));
        assert_eq!(form.get("Effective Porosity"), Some(0.3));
        assert_eq!(form.set("Porosity", 0.3), None);
        assert_eq!(form.len(), 2);
    }
}
