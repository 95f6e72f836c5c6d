use crate::error::RiscError;
use risc_schemas::contaminant::ContaminantEntry;

/// Ordered contaminant list. Chemical names are unique (exact, case-sensitive match).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContaminantList {
    entries: Vec<ContaminantEntry>,
}

impl ContaminantList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a contaminant. An existing entry for the same chemical is left as is.
    pub fn add(
        &mut self,
        chemical: &str,
        concentration: f64,
    ) -> Result<&ContaminantEntry, RiscError> {
        if chemical.trim().is_empty() {
            return Err(RiscError::Validation("select a chemical".to_string()));
        }
        if !concentration.is_finite() || concentration <= 0.0 {
            return Err(RiscError::Validation(
                "concentration must be a positive number".to_string(),
            ));
        }
        if self.contains(chemical) {
            return Err(RiscError::Duplicate(chemical.to_string()));
        }

        self.entries.push(ContaminantEntry {
            chemical: chemical.to_string(),
            concentration,
        });
        log::debug!("Contaminant added: {} ({})", chemical, concentration);
        self.entries
            .last()
            .ok_or_else(|| RiscError::NotFound(format!("'{}' was not added", chemical)))
    }

    /// Removes the entry for `chemical`. `None` means nothing was selected.
    pub fn remove(&mut self, chemical: Option<&str>) -> Result<ContaminantEntry, RiscError> {
        let chemical = chemical
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| RiscError::NotFound("select a contaminant to remove".to_string()))?;
        let index = self
            .entries
            .iter()
            .position(|e| e.chemical == chemical)
            .ok_or_else(|| {
                RiscError::NotFound(format!("'{}' is not in the contaminant list", chemical))
            })?;

        let removed = self.entries.remove(index);
        log::debug!("Contaminant removed: {}", removed.chemical);
        Ok(removed)
    }

    pub fn contains(&self, chemical: &str) -> bool {
        self.entries.iter().any(|e| e.chemical == chemical)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[ContaminantEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
