pub mod builder;
pub mod controller;
pub mod sections;
pub mod state;

pub use builder::FormControllerBuilder;
pub use controller::FormController;
pub use sections::active_sections;
pub use state::FormState;
