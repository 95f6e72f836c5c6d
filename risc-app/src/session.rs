use crate::command::SessionCommand;
use risc_core::{
    contaminants::ContaminantList,
    export,
    form::FormController,
    report, RiscError, Severity,
};
use risc_schemas::{
    contaminant::ContaminantEntry,
    model::{ModelSelection, SectionId},
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// The message shown to the user after a command; the console counterpart of a
/// dialog box.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    fn from_error(err: &RiscError) -> Self {
        let level = match err.severity() {
            Severity::Warning => NoticeLevel::Warning,
            Severity::Error => NoticeLevel::Error,
        };
        Self {
            level,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Info => write!(f, "{}", self.message),
            NoticeLevel::Warning => write!(f, "Warning: {}", self.message),
            NoticeLevel::Error => write!(f, "Error: {}", self.message),
        }
    }
}

/// The state of one form session: section controller, contaminant list, selected
/// chemical and the text in the results section.
pub struct Session {
    controller: FormController,
    contaminants: ContaminantList,
    chemical: String,
    results: String,
    output_path: String,
}

impl Session {
    /// Starts a session with no model selected. Without `chemical` the first entry of
    /// the degradation table is selected.
    pub fn new(
        controller: FormController,
        chemical: Option<String>,
        output_path: String,
    ) -> Result<Self, RiscError> {
        let table = controller.registry().chemicals();
        let chemical = match chemical {
            Some(c) if table.contains(&c) => c,
            Some(c) => {
                return Err(RiscError::Validation(format!(
                    "'{}' is not one of the available chemicals",
                    c
                )))
            }
            None => table
                .first()
                .map(str::to_string)
                .ok_or_else(|| {
                    RiscError::ConfigError("the chemical table is empty".to_string())
                })?,
        };

        Ok(Self {
            controller,
            contaminants: ContaminantList::new(),
            chemical,
            results: String::new(),
            output_path,
        })
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn contaminants(&self) -> &ContaminantList {
        &self.contaminants
    }

    pub fn chemical(&self) -> &str {
        &self.chemical
    }

    /// The text last produced by `calculate`.
    pub fn results(&self) -> &str {
        &self.results
    }

    /// Runs one command. Failures come back as warning or error notices; the session
    /// stays usable either way.
    pub fn execute(&mut self, command: SessionCommand) -> Notice {
        match self.apply(command) {
            Ok(notice) => notice,
            Err(err) => {
                log::warn!("Action rejected: {}", err);
                Notice::from_error(&err)
            }
        }
    }

    fn apply(&mut self, command: SessionCommand) -> Result<Notice, RiscError> {
        match command {
            SessionCommand::SelectModel { model } => {
                self.controller.select_model(model);
                Ok(Notice::info(format!("Model: {}\n{}", model, self.describe_sections())))
            }
            SessionCommand::SelectChemical { chemical } => {
                if !self.controller.registry().chemicals().contains(&chemical) {
                    return Err(RiscError::Validation(format!(
                        "choose one of: {}",
                        self.chemical_choices()
                    )));
                }
                self.chemical = chemical;
                Ok(Notice::info(format!("Chemical: {}", self.chemical)))
            }
            SessionCommand::SetParameter { name, value } => {
                self.controller.set_active_value(&name, value)?;
                Ok(Notice::info(format!(
                    "{}: {}",
                    name,
                    report::format_value(value)
                )))
            }
            SessionCommand::ResetSection => {
                let section = self.controller.active_section().ok_or_else(|| {
                    RiscError::Validation("select a model before resetting".to_string())
                })?;
                self.controller.reset_section(section)?;
                Ok(Notice::info(format!("{} reset to defaults", section)))
            }
            SessionCommand::AddContaminant { chemical, concentration } => {
                self.require_contaminant_section()?;
                if !chemical.trim().is_empty()
                    && !self.controller.registry().chemicals().contains(&chemical)
                {
                    return Err(RiscError::Validation(format!(
                        "choose one of: {}",
                        self.chemical_choices()
                    )));
                }
                let entry = self.contaminants.add(&chemical, concentration)?;
                Ok(Notice::info(format!(
                    "Added {} ({})",
                    entry.chemical,
                    report::format_value(entry.concentration)
                )))
            }
            SessionCommand::RemoveContaminant { chemical } => {
                self.require_contaminant_section()?;
                let removed = self.contaminants.remove(chemical.as_deref())?;
                Ok(Notice::info(format!("Removed {}", removed.chemical)))
            }
            SessionCommand::ListContaminants => {
                if self.contaminants.is_empty() {
                    return Ok(Notice::info("No contaminants listed"));
                }
                let lines: Vec<String> = self
                    .contaminants
                    .entries()
                    .iter()
                    .map(|e| {
                        format!("{}\t{}", e.chemical, report::format_value(e.concentration))
                    })
                    .collect();
                Ok(Notice::info(format!("Chemical\tConcentration\n{}", lines.join("\n"))))
            }
            SessionCommand::ShowSections => Ok(Notice::info(self.describe_sections())),
            SessionCommand::ShowParameters => Ok(Notice::info(self.describe_parameters())),
            SessionCommand::Calculate => {
                let listed = self.controller.is_enabled(SectionId::Contaminants);
                let contaminants: &[ContaminantEntry] =
                    if listed { self.contaminants.entries() } else { &[] };
                self.results = report::generate_report(
                    self.controller.registry().chemicals(),
                    &self.chemical,
                    &self.controller.active_forms(),
                    contaminants,
                )?;
                Ok(Notice::info(self.results.trim_end().to_string()))
            }
            SessionCommand::ShowResults => {
                if self.results.is_empty() {
                    Ok(Notice::info("No results yet, run 'calculate'"))
                } else {
                    Ok(Notice::info(self.results.trim_end().to_string()))
                }
            }
            SessionCommand::Export { path } => {
                if self.results.is_empty() {
                    return Err(RiscError::Validation(
                        "nothing to export, run 'calculate' first".to_string(),
                    ));
                }
                let path = path.unwrap_or_else(|| self.output_path.clone());
                export::export_report(&self.results, &path)?;
                Ok(Notice::info(format!("Results exported to '{}'", path)))
            }
        }
    }

    fn require_contaminant_section(&self) -> Result<(), RiscError> {
        if self.controller.is_enabled(SectionId::Contaminants) {
            return Ok(());
        }
        let reason = if self.controller.contaminants_supported() {
            "select a model first"
        } else {
            "this form has no contaminant list"
        };
        Err(RiscError::Validation(format!(
            "the Contaminants section is disabled, {}",
            reason
        )))
    }

    fn chemical_choices(&self) -> String {
        self.controller
            .registry()
            .chemicals()
            .chemicals()
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn describe_sections(&self) -> String {
        SectionId::ALL
            .iter()
            .filter(|s| **s != SectionId::Contaminants || self.controller.contaminants_supported())
            .map(|s| {
                let status = if self.controller.is_enabled(*s) { "enabled" } else { "disabled" };
                format!("  {:<18} {}", s.title(), status)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn describe_parameters(&self) -> String {
        if self.controller.selection() == ModelSelection::Unset {
            return "No model selected".to_string();
        }
        let mut text = String::new();
        for form in self.controller.active_forms() {
            let title = self
                .controller
                .registry()
                .group(form.group_id())
                .map_or(form.group_id().key(), |g| g.title.as_str());
            text.push_str(&format!("[{}]\n", title));
            for (name, value) in form.iter() {
                text.push_str(&format!("  {}: {}\n", name, report::format_value(value)));
            }
        }
        text.trim_end().to_string()
    }
}
