pub mod advice;
pub mod calculations;
pub mod models;

pub use advice::{DeductionAdvisor, HeadroomAdvisor, SavingsTip};
pub use models::*;
