use super::{sections::active_sections, state::FormState};
use crate::{error::RiscError, registry::ParameterRegistry};
use risc_schemas::{
    model::{ModelSelection, SectionId},
    parameter::ParameterGroupId,
};
use std::collections::{BTreeMap, BTreeSet};

/// Owns the model selection, the set of enabled sections and the current values of
/// every parameter group.
///
/// Disabling a section never touches its values; they reappear unchanged when the
/// section is enabled again.
#[derive(Debug, Clone)]
pub struct FormController {
    pub(super) registry: ParameterRegistry,
    pub(super) selection: ModelSelection,
    pub(super) contaminants_supported: bool,
    pub(super) enabled: BTreeSet<SectionId>,
    pub(super) forms: BTreeMap<ParameterGroupId, FormState>,
}

impl FormController {
    /// Sets the active model and re-applies the enable/disable mapping. Any selection
    /// is accepted, including the current one.
    pub fn select_model(&mut self, selection: ModelSelection) -> &BTreeSet<SectionId> {
        if self.selection != selection {
            log::debug!("Model changed: {} -> {}", self.selection, selection);
        }
        self.selection = selection;
        self.enabled = active_sections(selection, self.contaminants_supported);
        &self.enabled
    }

    pub fn selection(&self) -> ModelSelection {
        self.selection
    }

    pub fn is_enabled(&self, section: SectionId) -> bool {
        self.enabled.contains(&section)
    }

    pub fn enabled_sections(&self) -> &BTreeSet<SectionId> {
        &self.enabled
    }

    pub fn contaminants_supported(&self) -> bool {
        self.contaminants_supported
    }

    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    /// The model-dependent section currently enabled, if a model is selected.
    pub fn active_section(&self) -> Option<SectionId> {
        self.selection.section()
    }

    pub fn form(&self, group: ParameterGroupId) -> Option<&FormState> {
        self.forms.get(&group)
    }

    pub fn value(&self, group: ParameterGroupId, name: &str) -> Option<f64> {
        self.forms.get(&group).and_then(|f| f.get(name))
    }

    /// Forms of `section` in display order.
    pub fn section_forms(&self, section: SectionId) -> Vec<&FormState> {
        ParameterGroupId::in_section(section)
            .into_iter()
            .filter_map(|g| self.forms.get(&g))
            .collect()
    }

    /// Forms of the enabled model section, empty while no model is selected.
    pub fn active_forms(&self) -> Vec<&FormState> {
        self.active_section()
            .map(|s| self.section_forms(s))
            .unwrap_or_default()
    }

    /// Edits one parameter. The group's section must be enabled and the value finite.
    /// Returns the previous value.
    pub fn set_value(
        &mut self,
        group: ParameterGroupId,
        name: &str,
        value: f64,
    ) -> Result<f64, RiscError> {
        let section = group.section();
        if !self.is_enabled(section) {
            return Err(RiscError::Validation(format!(
                "the {} section is disabled for the current model",
                section
            )));
        }
        if !value.is_finite() {
            return Err(RiscError::Validation(format!(
                "'{}' must be a number, got {}",
                name, value
            )));
        }
        let form = self
            .forms
            .get_mut(&group)
            .ok_or_else(|| RiscError::NotFound(format!("parameter group '{}'", group)))?;
        let previous = form
            .set(name, value)
            .ok_or_else(|| RiscError::NotFound(format!("parameter '{}' in {}", name, section)))?;
        log::debug!("{} / {}: {} -> {}", group, name, previous, value);
        Ok(previous)
    }

    /// Edits a parameter of the enabled model section by name. Returns the group that
    /// holds it.
    pub fn set_active_value(
        &mut self,
        name: &str,
        value: f64,
    ) -> Result<ParameterGroupId, RiscError> {
        let section = self.active_section().ok_or_else(|| {
            RiscError::Validation("select a model before editing parameters".to_string())
        })?;
        let group = ParameterGroupId::in_section(section)
            .into_iter()
            .find(|g| self.forms.get(g).map_or(false, |f| f.contains(name)))
            .ok_or_else(|| RiscError::NotFound(format!("parameter '{}' in {}", name, section)))?;
        self.set_value(group, name, value)?;
        Ok(group)
    }

    /// Restores the registry defaults of every group in an enabled model section.
    pub fn reset_section(&mut self, section: SectionId) -> Result<(), RiscError> {
        if !section.is_model_dependent() {
            return Err(RiscError::Validation(format!(
                "the {} section has no parameters",
                section
            )));
        }
        if !self.is_enabled(section) {
            return Err(RiscError::Validation(format!(
                "the {} section is disabled for the current model",
                section
            )));
        }
        for group in ParameterGroupId::in_section(section) {
            if let Some(defaults) = self.registry.group(group) {
                self.forms.insert(group, FormState::seeded(defaults));
            }
        }
        log::debug!("{} reset to defaults", section);
        Ok(())
    }
}
