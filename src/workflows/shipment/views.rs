use super::blueprint::ShipmentWizardBlueprint;
use super::domain::{Country, DataType, FieldCategory, Mode};
use super::fields::FieldName;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub name: FieldName,
    pub label: String,
    pub required: bool,
    pub data_type: DataType,
    pub category: FieldCategory,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepView {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub conditional: bool,
    pub fields: Vec<FieldView>,
}

/// Visible steps for a selection with the inputs each one renders.
pub fn step_views(
    blueprint: &ShipmentWizardBlueprint,
    mode: Option<Mode>,
    country: Option<Country>,
) -> Vec<StepView> {
    blueprint
        .visible_steps(mode, country)
        .into_iter()
        .map(|step| StepView {
            number: step.number,
            title: blueprint.title_for(step.number, mode),
            description: step.description,
            conditional: step.is_conditional(),
            fields: blueprint
                .fields_for_step(step.number, mode, country)
                .into_iter()
                .map(|definition| FieldView {
                    name: definition.name,
                    label: definition.name.display_label(),
                    required: definition.required,
                    data_type: definition.data_type,
                    category: definition.category,
                    placeholder: definition.placeholder(),
                })
                .collect(),
        })
        .collect()
}
