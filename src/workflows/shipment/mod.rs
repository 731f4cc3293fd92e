mod blueprint;
pub mod calculations;
mod catalog;
pub mod domain;
mod fields;
mod import;
mod navigation;
mod record;
mod review;
pub mod router;
mod steps;
pub mod validation;
mod views;
mod visibility;

pub use blueprint::ShipmentWizardBlueprint;
pub use calculations::{all_derived_fields, CalculatedValueKind, DerivedFields};
pub use catalog::{definition, field_catalog};
pub use domain::{
    ApplicabilityTag, CatalogError, Country, DataType, FieldCategory, FieldDefinition, Mode,
    UnknownSelection,
};
pub use fields::{FieldName, UnknownField};
pub use import::{LineItemImportError, LineItemImporter};
pub use navigation::WizardNavigator;
pub use record::{FieldValue, LineItem, ShipmentRecord};
pub use review::{ReviewSummary, ReviewedField, ReviewedStep};
pub use router::shipment_router;
pub use steps::{step_for, step_table, StepCondition, StepMetadata, REVIEW_STEP};
pub use validation::{can_proceed, error_summary, validate_step, StepValidation, ValidationError};
pub use views::{step_views, FieldView, StepView};
pub use visibility::is_visible;
