use risc_schemas::model::{ModelSelection, SectionId};
use std::collections::BTreeSet;

/// The sections enabled for `selection`.
///
/// General and Results are always enabled. Exactly one model-dependent section is
/// enabled for a set model and none for `Unset`. Contaminants follows any set model
/// when the form has a contaminant list.
pub fn active_sections(
    selection: ModelSelection,
    contaminants_supported: bool,
) -> BTreeSet<SectionId> {
    let mut sections = BTreeSet::from([SectionId::General, SectionId::Results]);
    if let Some(section) = selection.section() {
        sections.insert(section);
        if contaminants_supported {
            sections.insert(SectionId::Contaminants);
        }
    }
    sections
}
