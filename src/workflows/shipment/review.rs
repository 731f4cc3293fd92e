use super::blueprint::ShipmentWizardBlueprint;
use super::calculations::{all_derived_fields, DerivedFields};
use super::domain::{Country, Mode};
use super::fields::FieldName;
use super::record::ShipmentRecord;
use super::steps::{LINE_ITEMS_STEP, REVIEW_STEP};
use super::validation::{validate_step, StepValidation};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewedField {
    pub name: FieldName,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewedStep {
    pub number: u8,
    pub title: &'static str,
    pub complete: bool,
    pub fields: Vec<ReviewedField>,
}

/// Everything the review screen shows before submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub mode: Option<Mode>,
    pub destination_country: Option<Country>,
    pub steps: Vec<ReviewedStep>,
    pub line_item_count: usize,
    pub validation: StepValidation,
    pub error_summary: String,
    pub derived: DerivedFields,
}

impl ReviewSummary {
    pub fn build(blueprint: &ShipmentWizardBlueprint, record: &ShipmentRecord) -> Self {
        let mode = record.mode();
        let country = record.destination_country();
        let validation = validate_step(REVIEW_STEP, record, mode, country);

        let steps = blueprint
            .visible_steps(mode, country)
            .into_iter()
            .map(|step| {
                let fields = blueprint
                    .fields_for_step(step.number, mode, country)
                    .into_iter()
                    .filter_map(|definition| {
                        let value = record.get(definition.name)?;
                        if value.is_blank() {
                            return None;
                        }
                        Some(ReviewedField {
                            name: definition.name,
                            label: definition.name.display_label(),
                            value: value.display(),
                        })
                    })
                    .collect();

                ReviewedStep {
                    number: step.number,
                    title: blueprint.title_for(step.number, mode),
                    complete: is_step_complete(blueprint, record, step.number, &validation),
                    fields,
                }
            })
            .collect();

        Self {
            mode,
            destination_country: country,
            steps,
            line_item_count: record.line_items().len(),
            error_summary: validation.summary(),
            validation,
            derived: all_derived_fields(record),
        }
    }

    pub fn is_ready_to_submit(&self) -> bool {
        self.validation.valid
    }

    pub fn incomplete_steps(&self) -> Vec<u8> {
        self.steps
            .iter()
            .filter(|step| !step.complete)
            .map(|step| step.number)
            .collect()
    }
}

fn is_step_complete(
    blueprint: &ShipmentWizardBlueprint,
    record: &ShipmentRecord,
    step: u8,
    review: &StepValidation,
) -> bool {
    if step == REVIEW_STEP {
        return review.valid;
    }

    let required_present = blueprint
        .required_fields(step, record.mode(), record.destination_country())
        .into_iter()
        .all(|field| record.has_value(field));

    if step == LINE_ITEMS_STEP {
        return required_present && !record.line_items().is_empty();
    }

    required_present
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::shipment::record::LineItem;

    #[test]
    fn empty_record_lists_base_steps_as_incomplete() {
        let summary =
            ReviewSummary::build(&ShipmentWizardBlueprint::standard(), &ShipmentRecord::new());

        let numbers: Vec<u8> = summary.steps.iter().map(|step| step.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 6, 8, 9, 11, 12]);
        assert_eq!(summary.incomplete_steps(), vec![1, 2, 3, 12]);
        assert_eq!(summary.error_summary, "6 fields require attention");
        assert!(!summary.is_ready_to_submit());
    }

    #[test]
    fn populated_fields_carry_labels() {
        let mut record = ShipmentRecord::new();
        record.set(FieldName::Shipment, "5862926");
        record.set(FieldName::LoadingDate, "2025-04-18");
        record.set_mode(Some(Mode::Sea));
        record.set_destination_country(Some(Country::Guatemala));
        record.set(FieldName::Sto, "4500123456");
        record.set(FieldName::BolNo, "MAEU123");
        record.set(FieldName::Notes, "  ");
        record.add_line_item(LineItem {
            cases: Some(10.0),
            ..LineItem::new("line-0001")
        });

        let summary = ReviewSummary::build(&ShipmentWizardBlueprint::standard(), &record);

        assert!(summary.is_ready_to_submit());
        assert!(summary.incomplete_steps().is_empty());
        assert_eq!(summary.derived.total_cases, 10.0);

        let freight = summary
            .steps
            .iter()
            .find(|step| step.number == 5)
            .expect("freight step is visible for sea");
        assert_eq!(freight.title, "Sea Freight Details");
        assert_eq!(
            freight.fields,
            vec![ReviewedField {
                name: FieldName::BolNo,
                label: "BOL No".to_string(),
                value: "MAEU123".to_string(),
            }]
        );

        let notes = summary
            .steps
            .iter()
            .find(|step| step.number == 11)
            .expect("notes step is always visible");
        assert!(notes.fields.is_empty());
    }
}
