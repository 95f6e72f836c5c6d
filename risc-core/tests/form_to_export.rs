//! Integration tests: form controller + contaminant list + report + export
//!
//! These tests drive the core the way the form does: select a model, edit values,
//! list contaminants, calculate and export.

use risc_core::{
    contaminants::ContaminantList,
    export::export_report,
    form::{FormController, FormControllerBuilder},
    registry::ParameterRegistry,
    report::generate_report,
    RiscError,
};
use risc_schemas::{
    model::{ModelSelection, SectionId},
    parameter::ParameterGroupId,
};
use std::fs;

fn calculate(controller: &FormController, chemical: &str, list: &ContaminantList) -> String {
    generate_report(
        controller.registry().chemicals(),
        chemical,
        &controller.active_forms(),
        list.entries(),
    )
    .unwrap()
}

#[test]
fn dissolved_source_report_with_defaults() {
    let mut controller = FormControllerBuilder::new().build().unwrap();
    let mut list = ContaminantList::new();

    controller.select_model(ModelSelection::DissolvedSource);
    assert!(controller.is_enabled(SectionId::Contaminants));
    list.add("Benzene", 12.5).unwrap();

    let report = calculate(&controller, "Benzene", &list);
    let lines: Vec<_> = report.lines().collect();

    assert!(lines.contains(&"Degradation Rate: 0.00096 per day"));
    assert!(lines.contains(&"Receptor Distance Downgradient (m): 30.0"));
    assert!(lines.contains(&"No. of Points Used to Calculated Con. (Min : 2): 2.0"));
    assert!(lines.contains(&"Benzene: 12.5"));
    assert!(report.starts_with(
        "Selected Chemical: Benzene\nDegradation Rate: 0.00096 per day\n\nParameters:\nHydraulic Gradient (m/m): 0.1\n"
    ));
}

#[test]
fn report_uses_the_active_section_not_the_dissolved_one() {
    let mut controller = FormControllerBuilder::new().build().unwrap();
    controller.select_model(ModelSelection::SaturatedSoilToGroundwater);
    controller.set_active_value("Hydraulic Conductivity", 2.5).unwrap();

    let report = calculate(&controller, "Toluene", &ContaminantList::new());
    assert!(report.contains("Hydraulic Conductivity: 2.5\n"));
    assert!(!report.contains("Receptor Distance Downgradient"));
}

#[test]
fn vadose_report_lists_all_vadose_groups_in_order() {
    let mut controller = FormControllerBuilder::new().build().unwrap();
    controller.select_model(ModelSelection::VadoseSoilToGroundwater);

    let report = calculate(&controller, "Xylenes", &ContaminantList::new());
    let registry = ParameterRegistry::builtin();
    let expected: Vec<String> = ParameterGroupId::in_section(SectionId::Vadose)
        .into_iter()
        .flat_map(|g| registry.group(g).unwrap().parameters.clone())
        .map(|p| p.name)
        .collect();
    let reported: Vec<&str> = report
        .lines()
        .skip(4)
        .filter_map(|l| l.rsplit_once(": ").map(|(name, _)| name))
        .collect();
    assert_eq!(reported, expected);
}

#[test]
fn edits_survive_switching_models_before_calculating() {
    let mut controller = FormControllerBuilder::new().build().unwrap();
    controller.select_model(ModelSelection::DissolvedSource);
    controller.set_active_value("Width of Source Area (m)", 25.0).unwrap();
    let first = calculate(&controller, "Benzene", &ContaminantList::new());

    controller.select_model(ModelSelection::VadoseSoilToGroundwater);
    controller.select_model(ModelSelection::DissolvedSource);
    let second = calculate(&controller, "Benzene", &ContaminantList::new());

    assert_eq!(first, second);
    assert!(second.contains("Width of Source Area (m): 25.0\n"));
}

#[test]
fn exported_file_matches_generated_report() {
    let mut controller = FormControllerBuilder::new().build().unwrap();
    let mut list = ContaminantList::new();
    controller.select_model(ModelSelection::DissolvedSource);
    list.add("Ethylbenzene", 0.7).unwrap();
    let report = calculate(&controller, "Ethylbenzene", &list);

    let path = std::env::temp_dir()
        .join(format!("risc-it-{}-results.csv", std::process::id()))
        .to_string_lossy()
        .into_owned();
    export_report(&report, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), report);
    fs::remove_file(&path).unwrap();
}

#[test]
fn failed_export_leaves_state_usable() {
    let mut controller = FormControllerBuilder::new().build().unwrap();
    controller.select_model(ModelSelection::DissolvedSource);
    let report = calculate(&controller, "Benzene", &ContaminantList::new());

    let err = export_report(&report, "/nonexistent-dir/risc_results.csv").unwrap_err();
    assert!(matches!(err, RiscError::FileIO(..)));

    controller.set_active_value("Length of Source Area (m)", 12.0).unwrap();
    assert!(calculate(&controller, "Benzene", &ContaminantList::new())
        .contains("Length of Source Area (m): 12.0\n"));
}
