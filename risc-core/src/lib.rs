//! Form logic for the RISC soil-to-groundwater parameter entry tool: parameter
//! defaults, model-driven section state, the contaminant list, report text and export.

pub mod contaminants;
pub mod error;
pub mod export;
pub mod form;
pub mod registry;
pub mod report;

pub use error::{RiscError, Severity};
