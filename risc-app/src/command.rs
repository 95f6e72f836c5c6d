//! Session commands, parsed from console lines or read from a YAML script.

use risc_core::RiscError;
use risc_schemas::model::ModelSelection;
use serde::Deserialize;

/// One user action on the form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionCommand {
    SelectModel {
        model: ModelSelection,
    },
    SelectChemical {
        chemical: String,
    },
    SetParameter {
        name: String,
        value: f64,
    },
    ResetSection,
    AddContaminant {
        chemical: String,
        concentration: f64,
    },
    RemoveContaminant {
        #[serde(default)]
        chemical: Option<String>,
    },
    ListContaminants,
    ShowSections,
    ShowParameters,
    Calculate,
    ShowResults,
    Export {
        #[serde(default)]
        path: Option<String>,
    },
}

/// A batch of commands run in order.
#[derive(Debug, Deserialize)]
pub struct SessionScript {
    pub commands: Vec<SessionCommand>,
}

/// What a console line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    Command(SessionCommand),
    Help,
    Quit,
    Blank,
}

pub const HELP: &str = "\
Commands:
  model <name>             vadose | saturated | dissolved | unset (or the full label)
  chemical <name>          select the chemical for the report
  set <parameter> = <v>    edit a parameter of the active section
  reset                    restore defaults of the active section
  add <chemical> <conc>    add a contaminant
  remove <chemical>        remove a contaminant
  list                     list contaminants
  sections                 show which sections are enabled
  params                   show the active section's values
  calculate                generate the results text
  show                     print the results text
  export [path]            write the results text to a file
  help                     show this message
  quit                     leave the session";

/// Parses one console line.
pub fn parse_line(line: &str) -> Result<ConsoleInput, RiscError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ConsoleInput::Blank);
    }
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(ConsoleInput::Help),
        "quit" | "exit" => return Ok(ConsoleInput::Quit),
        "model" => {
            if rest.is_empty() {
                return Err(RiscError::Validation("choose a model".to_string()));
            }
            let model = rest
                .parse::<ModelSelection>()
                .map_err(|e| RiscError::Validation(e.to_string()))?;
            SessionCommand::SelectModel { model }
        }
        "chemical" => {
            if rest.is_empty() {
                return Err(RiscError::Validation("choose a chemical".to_string()));
            }
            SessionCommand::SelectChemical {
                chemical: rest.to_string(),
            }
        }
        "set" => {
            let (name, value) = rest.rsplit_once('=').ok_or_else(|| {
                RiscError::Validation("expected 'set <parameter> = <value>'".to_string())
            })?;
            SessionCommand::SetParameter {
                name: name.trim().to_string(),
                value: parse_number(value, "value")?,
            }
        }
        "reset" => SessionCommand::ResetSection,
        "add" => {
            let (chemical, concentration) = rest
                .rsplit_once(char::is_whitespace)
                .ok_or_else(|| {
                    RiscError::Validation("expected 'add <chemical> <concentration>'".to_string())
                })?;
            SessionCommand::AddContaminant {
                chemical: chemical.trim().to_string(),
                concentration: parse_number(concentration, "concentration")?,
            }
        }
        "remove" => SessionCommand::RemoveContaminant {
            chemical: (!rest.is_empty()).then(|| rest.to_string()),
        },
        "list" => SessionCommand::ListContaminants,
        "sections" => SessionCommand::ShowSections,
        "params" => SessionCommand::ShowParameters,
        "calculate" => SessionCommand::Calculate,
        "show" => SessionCommand::ShowResults,
        "export" => SessionCommand::Export {
            path: (!rest.is_empty()).then(|| rest.to_string()),
        },
        other => {
            return Err(RiscError::Validation(format!(
                "unknown command '{}', type 'help' for a list",
                other
            )))
        }
    };
    Ok(ConsoleInput::Command(command))
}

fn parse_number(text: &str, what: &str) -> Result<f64, RiscError> {
    let text = text.trim();
    text.parse::<f64>().map_err(|_| {
        RiscError::Validation(format!("{} must be a number, got '{}'", what, text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> SessionCommand {
        match parse_line(line).unwrap() {
            ConsoleInput::Command(c) => c,
            other => panic!("expected a command, got {other:?}"),
        }
    }

    #[test]
    fn parses_model_by_alias_and_label() {
        assert_eq!(
            command("model dissolved"),
            SessionCommand::SelectModel { model: ModelSelection::DissolvedSource }
        );
        assert_eq!(
            command("MODEL Vadose Soil to Groundwater"),
            SessionCommand::SelectModel { model: ModelSelection::VadoseSoilToGroundwater }
        );
        assert!(matches!(parse_line("model"), Err(RiscError::Validation(_))));
        assert!(matches!(parse_line("model lagoon"), Err(RiscError::Validation(_))));
    }

    #[test]
    fn chemical_takes_the_rest_of_the_line() {
        assert_eq!(
            command("chemical Benzene"),
            SessionCommand::SelectChemical { chemical: "Benzene".to_string() }
        );
        assert_eq!(
            command("Chemical  Methyl tert-butyl ether "),
            SessionCommand::SelectChemical { chemical: "Methyl tert-butyl ether".to_string() }
        );
        assert!(matches!(parse_line("chemical"), Err(RiscError::Validation(_))));
        assert!(matches!(parse_line("chemical   "), Err(RiscError::Validation(_))));
    }

    #[test]
    fn bare_keywords() {
        assert_eq!(command("reset"), SessionCommand::ResetSection);
        assert_eq!(command("list"), SessionCommand::ListContaminants);
        assert_eq!(command("sections"), SessionCommand::ShowSections);
        assert_eq!(command("params"), SessionCommand::ShowParameters);
        assert_eq!(command("calculate"), SessionCommand::Calculate);
        assert_eq!(command("show"), SessionCommand::ShowResults);
        assert_eq!(command("CALCULATE"), SessionCommand::Calculate);
    }

    #[test]
    fn set_splits_on_the_last_equals_sign() {
        assert_eq!(
            command("set No. of Points Used to Calculated Con. (Min : 2) = 4"),
            SessionCommand::SetParameter {
                name: "No. of Points Used to Calculated Con. (Min : 2)".to_string(),
                value: 4.0,
            }
        );
        assert!(matches!(
            parse_line("set Hydraulic Gradient 0.1"),
            Err(RiscError::Validation(_))
        ));
        assert!(matches!(
            parse_line("set Hydraulic Gradient = steep"),
            Err(RiscError::Validation(_))
        ));
    }

    #[test]
    fn add_takes_the_last_word_as_concentration() {
        assert_eq!(
            command("add Benzene 12.5"),
            SessionCommand::AddContaminant { chemical: "Benzene".to_string(), concentration: 12.5 }
        );
        assert!(matches!(parse_line("add Benzene"), Err(RiscError::Validation(_))));
        assert!(matches!(parse_line("add Benzene lots"), Err(RiscError::Validation(_))));
    }

    #[test]
    fn optional_arguments() {
        assert_eq!(command("remove"), SessionCommand::RemoveContaminant { chemical: None });
        assert_eq!(
            command("remove Toluene"),
            SessionCommand::RemoveContaminant { chemical: Some("Toluene".to_string()) }
        );
        assert_eq!(command("export"), SessionCommand::Export { path: None });
        assert_eq!(
            command("export out/run 1.txt"),
            SessionCommand::Export { path: Some("out/run 1.txt".to_string()) }
        );
    }

    #[test]
    fn control_words_and_blanks() {
        assert_eq!(parse_line("  ").unwrap(), ConsoleInput::Blank);
        assert_eq!(parse_line("# comment").unwrap(), ConsoleInput::Blank);
        assert_eq!(parse_line("help").unwrap(), ConsoleInput::Help);
        assert_eq!(parse_line("exit").unwrap(), ConsoleInput::Quit);
        assert!(matches!(parse_line("launch"), Err(RiscError::Validation(_))));
    }

    #[test]
    fn reads_script_yaml() {
        let yaml = r#"
commands:
  - type: select_model
    model: dissolved_source
  - type: add_contaminant
    chemical: Benzene
    concentration: 12.5
  - type: set_parameter
    name: Length of Source Area (m)
    value: 12
  - type: remove_contaminant
  - type: calculate
  - type: export
    path: out.csv
"#;
        let script: SessionScript = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            script.commands,
            vec![
                SessionCommand::SelectModel { model: ModelSelection::DissolvedSource },
                SessionCommand::AddContaminant {
                    chemical: "Benzene".to_string(),
                    concentration: 12.5
                },
                SessionCommand::SetParameter {
                    name: "Length of Source Area (m)".to_string(),
                    value: 12.0
                },
                SessionCommand::RemoveContaminant { chemical: None },
                SessionCommand::Calculate,
                SessionCommand::Export { path: Some("out.csv".to_string()) },
            ]
        );
    }

    #[test]
    fn script_models_accept_labels_and_aliases() {
        let yaml = r#"
commands:
  - type: select_model
    model: Dissolved Source
  - type: select_model
    model: vadose
  - type: select_model
    model: unset
"#;
        let script: SessionScript = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            script.commands,
            vec![
                SessionCommand::SelectModel { model: ModelSelection::DissolvedSource },
                SessionCommand::SelectModel { model: ModelSelection::VadoseSoilToGroundwater },
                SessionCommand::SelectModel { model: ModelSelection::Unset },
            ]
        );
        let bad = "commands:\n  - type: select_model\n    model: none\n";
        assert!(serde_yaml::from_str::<SessionScript>(bad).is_err());
    }
}
