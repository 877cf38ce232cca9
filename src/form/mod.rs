pub mod normalize;
pub mod validation;
pub mod warnings;

pub use normalize::{build_subject, normalize_artists};
pub use validation::{
    EventFormInput, FormStep, FormWizard, RequiredField, ValidatedForm, ValidationError, validate,
};
pub use warnings::evaluate_warnings;
