//! Plain data types shared by the RISC parameter form: model choices, form sections,
//! parameter defaults, chemicals and contaminant entries.

pub mod chemical;
pub mod contaminant;
pub mod file_formats;
pub mod model;
pub mod parameter;
