use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::blueprint::ShipmentWizardBlueprint;
use super::domain::{Country, Mode};
use super::record::ShipmentRecord;
use super::review::ReviewSummary;
use super::validation::{validate_step, ValidationError};
use super::views::{step_views, StepView};

#[derive(Debug, Default, Deserialize)]
pub struct StepsRequest {
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub country: Option<Country>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub step: u32,
    pub record: ShipmentRecord,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub step: u32,
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub summary: String,
}

/// Router builder exposing the wizard's step, validation and review endpoints.
/// Every request carries the full record, so handlers hold no session state.
pub fn shipment_router(blueprint: ShipmentWizardBlueprint) -> Router {
    Router::new()
        .route("/api/v1/shipments/steps", post(steps_handler))
        .route("/api/v1/shipments/validate", post(validate_handler))
        .route("/api/v1/shipments/review", post(review_handler))
        .with_state(blueprint)
}

pub(crate) async fn steps_handler(
    State(blueprint): State<ShipmentWizardBlueprint>,
    Json(request): Json<StepsRequest>,
) -> Json<Vec<StepView>> {
    Json(step_views(&blueprint, request.mode, request.country))
}

pub(crate) async fn validate_handler(
    Json(request): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let ValidateRequest { step, record } = request;
    // Steps beyond the table carry no rules, whatever their width.
    let rule_step = u8::try_from(step).unwrap_or(u8::MAX);
    let validation = validate_step(
        rule_step,
        &record,
        record.mode(),
        record.destination_country(),
    );

    Json(ValidateResponse {
        step,
        valid: validation.valid,
        summary: validation.summary(),
        errors: validation.errors,
    })
}

pub(crate) async fn review_handler(
    State(blueprint): State<ShipmentWizardBlueprint>,
    Json(record): Json<ShipmentRecord>,
) -> Json<ReviewSummary> {
    Json(ReviewSummary::build(&blueprint, &record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::shipment::fields::FieldName;

    #[tokio::test]
    async fn steps_handler_lists_sea_japan_walk() {
        let request = StepsRequest {
            mode: Some(Mode::Sea),
            country: Some(Country::Japan),
        };

        let Json(steps) =
            steps_handler(State(ShipmentWizardBlueprint::standard()), Json(request)).await;

        let numbers: Vec<u8> = steps.iter().map(|step| step.number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());
        assert_eq!(steps[4].title, "Sea Freight Details");
        assert!(steps[9].conditional);
    }

    #[tokio::test]
    async fn validate_handler_reads_selection_from_record() {
        let mut record = ShipmentRecord::new();
        record.set(FieldName::Sto, "4500123456");
        record.set_destination_country(Some(Country::Japan));

        let Json(response) = validate_handler(Json(ValidateRequest { step: 2, record })).await;

        assert!(!response.valid);
        assert_eq!(response.summary, "GBA1_JP21 is required for Japan shipments");
    }

    #[tokio::test]
    async fn validate_handler_passes_steps_outside_the_table() {
        for step in [0, 13, 255, 300, u32::MAX] {
            let request = ValidateRequest {
                step,
                record: ShipmentRecord::new(),
            };
            let Json(response) = validate_handler(Json(request)).await;

            assert_eq!(response.step, step);
            assert!(response.valid, "step {step}");
            assert!(response.errors.is_empty());
        }
    }
}
