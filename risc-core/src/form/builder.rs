use super::{controller::FormController, sections::active_sections, state::FormState};
use crate::{error::RiscError, registry::ParameterRegistry};
use risc_schemas::{model::ModelSelection, parameter::ParameterGroupId};

/// A fluent builder for constructing a `FormController`.
///
/// Every parameter group is seeded from the registry at build time. The contaminant
/// section is supported unless switched off.
pub struct FormControllerBuilder {
    registry: Option<ParameterRegistry>,
    contaminants_supported: bool,
}

impl Default for FormControllerBuilder {
    fn default() -> Self {
        Self {
            registry: None,
            contaminants_supported: true,
        }
    }
}

impl FormControllerBuilder {
    /// Creates a builder using the built-in registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `registry` instead of the built-in defaults.
    pub fn with_registry(mut self, registry: ParameterRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Whether the form offers a contaminant list section.
    pub fn with_contaminant_section(mut self, supported: bool) -> Self {
        self.contaminants_supported = supported;
        self
    }

    /// Consumes the builder and returns a controller with no model selected.
    ///
    /// # Errors
    ///
    /// Returns `RiscError::ConfigError` if the registry fails validation.
    pub fn build(self) -> Result<FormController, RiscError> {
        let registry = self.registry.unwrap_or_else(ParameterRegistry::builtin);
        registry.validate()?;

        let mut forms = std::collections::BTreeMap::new();
        for id in ParameterGroupId::ALL {
            let group = registry
                .group(id)
                .ok_or_else(|| RiscError::ConfigError(format!("group '{}' is missing", id)))?;
            forms.insert(id, FormState::seeded(group));
        }

        let selection = ModelSelection::Unset;
        Ok(FormController {
            enabled: active_sections(selection, self.contaminants_supported),
            selection,
            contaminants_supported: self.contaminants_supported,
            forms,
            registry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risc_schemas::model::SectionId;

    #[test]
    fn seeds_every_group_from_the_registry() {
        let controller = FormControllerBuilder::new().build().unwrap();
        let registry = ParameterRegistry::builtin();
        for id in ParameterGroupId::ALL {
            let form = controller.form(id).unwrap();
            assert_eq!(form.len(), registry.group(id).unwrap().parameters.len());
        }
    }

    #[test]
    fn contaminant_section_can_be_switched_off() {
        let mut controller = FormControllerBuilder::new()
            .with_contaminant_section(false)
            .build()
            .unwrap();
        controller.select_model(ModelSelection::DissolvedSource);
        assert!(!controller.is_enabled(SectionId::Contaminants));
        assert!(!controller.contaminants_supported());
    }
}
