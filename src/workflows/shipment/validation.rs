use super::calculations::parse_timestamp_millis;
use super::domain::{Country, Mode};
use super::fields::FieldName;
use super::record::ShipmentRecord;
use super::steps::REVIEW_STEP;
use serde::Serialize;
use tracing::debug;

pub const LINE_ITEMS_KEY: &str = "lineItems";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn for_field(field: FieldName, message: impl Into<String>) -> Self {
        Self::new(field.as_str(), message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepValidation {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl StepValidation {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn summary(&self) -> String {
        error_summary(&self.errors)
    }
}

/// Checks the required and cross-field rules of one wizard step. The review
/// step re-runs the checks of steps 1 to 3 and compares the schedule dates.
pub fn validate_step(
    step: u8,
    record: &ShipmentRecord,
    _mode: Option<Mode>,
    country: Option<Country>,
) -> StepValidation {
    let mut errors = Vec::new();

    match step {
        1 => basic_information(record, &mut errors),
        2 => order_references(record, country, &mut errors),
        3 => product_details(record, &mut errors),
        REVIEW_STEP => {
            basic_information(record, &mut errors);
            order_references(record, country, &mut errors);
            product_details(record, &mut errors);
            schedule_order(record, &mut errors);
        }
        _ => {}
    }

    if !errors.is_empty() {
        debug!(step, errors = errors.len(), "shipment step failed validation");
    }

    StepValidation::from_errors(errors)
}

pub fn can_proceed(
    step: u8,
    record: &ShipmentRecord,
    mode: Option<Mode>,
    country: Option<Country>,
) -> bool {
    validate_step(step, record, mode, country).valid
}

pub fn error_summary(errors: &[ValidationError]) -> String {
    match errors {
        [] => String::new(),
        [only] => only.message.clone(),
        _ => format!("{} fields require attention", errors.len()),
    }
}

fn basic_information(record: &ShipmentRecord, errors: &mut Vec<ValidationError>) {
    if record.text(FieldName::Shipment).is_none() {
        errors.push(ValidationError::for_field(
            FieldName::Shipment,
            "Shipment ID is required",
        ));
    }
    if !record.has_value(FieldName::LoadingDate) {
        errors.push(ValidationError::for_field(
            FieldName::LoadingDate,
            "Loading Date is required",
        ));
    }
    if !record.has_value(FieldName::Mode) {
        errors.push(ValidationError::for_field(
            FieldName::Mode,
            "Transport Mode is required",
        ));
    }
    if !record.has_value(FieldName::DestinationCountry) {
        errors.push(ValidationError::for_field(
            FieldName::DestinationCountry,
            "Destination Country is required",
        ));
    }
}

fn order_references(
    record: &ShipmentRecord,
    country: Option<Country>,
    errors: &mut Vec<ValidationError>,
) {
    if record.text(FieldName::Sto).is_none() {
        errors.push(ValidationError::for_field(
            FieldName::Sto,
            "STO (Stock Transport Order) is required",
        ));
    }

    if let Some(country) = country.filter(|country| country.is_japan_or_taiwan()) {
        if !record.has_value(FieldName::Gba1Jp21) {
            errors.push(ValidationError::for_field(
                FieldName::Gba1Jp21,
                format!("GBA1_JP21 is required for {country} shipments"),
            ));
        }
    }
}

fn product_details(record: &ShipmentRecord, errors: &mut Vec<ValidationError>) {
    if record.line_items().is_empty() {
        errors.push(ValidationError::new(
            LINE_ITEMS_KEY,
            "At least one product line item is required",
        ));
    }
}

// Unparseable dates are left for the date inputs to flag.
fn schedule_order(record: &ShipmentRecord, errors: &mut Vec<ValidationError>) {
    let etd = record.text(FieldName::Etd).and_then(parse_timestamp_millis);
    let eta = record.text(FieldName::Eta).and_then(parse_timestamp_millis);

    if let (Some(etd), Some(eta)) = (etd, eta) {
        if eta <= etd {
            errors.push(ValidationError::for_field(
                FieldName::Eta,
                "ETA must be after ETD",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::shipment::record::LineItem;

    fn fields(validation: &StepValidation) -> Vec<&str> {
        validation
            .errors
            .iter()
            .map(|error| error.field.as_str())
            .collect()
    }

    fn complete_record() -> ShipmentRecord {
        let mut record = ShipmentRecord::new();
        record.set(FieldName::Shipment, "5862926");
        record.set(FieldName::LoadingDate, "2025-04-18");
        record.set_mode(Some(Mode::Sea));
        record.set_destination_country(Some(Country::Japan));
        record.set(FieldName::Sto, "4500123456");
        record.set(FieldName::Gba1Jp21, "JP21-778");
        record.add_line_item(LineItem::new("line-0001"));
        record
    }

    #[test]
    fn empty_record_fails_basic_information() {
        let validation = validate_step(1, &ShipmentRecord::new(), None, None);

        assert!(!validation.valid);
        assert_eq!(
            fields(&validation),
            vec!["Shipment", "Loading_Date", "Mode", "Destination_Country"]
        );
        assert_eq!(validation.summary(), "4 fields require attention");
    }

    #[test]
    fn blank_shipment_id_is_missing() {
        let mut record = complete_record();
        record.set(FieldName::Shipment, "   ");

        let validation = validate_step(1, &record, Some(Mode::Sea), Some(Country::Japan));
        assert_eq!(fields(&validation), vec!["Shipment"]);
        assert_eq!(validation.summary(), "Shipment ID is required");
    }

    #[test]
    fn japan_and_taiwan_require_gba1_jp21() {
        let mut record = complete_record();
        record.clear(FieldName::Gba1Jp21);

        let taiwan = validate_step(2, &record, Some(Mode::Sea), Some(Country::Taiwan));
        assert_eq!(
            taiwan.errors,
            vec![ValidationError::new(
                "GBA1_JP21",
                "GBA1_JP21 is required for Taiwan shipments"
            )]
        );

        assert!(can_proceed(2, &record, Some(Mode::Sea), Some(Country::Panama)));
    }

    #[test]
    fn product_details_need_a_line_item() {
        let validation = validate_step(3, &ShipmentRecord::new(), None, None);
        assert_eq!(fields(&validation), vec![LINE_ITEMS_KEY]);
    }

    #[test]
    fn optional_and_unknown_steps_are_always_valid() {
        let record = ShipmentRecord::new();
        for step in [4, 5, 6, 7, 8, 9, 10, 11, 0, 13] {
            assert!(can_proceed(step, &record, None, None), "step {step}");
        }
    }

    #[test]
    fn review_checks_schedule_order() {
        let mut record = complete_record();
        record.set(FieldName::Etd, "2025-05-15");
        record.set(FieldName::Eta, "2025-04-20");

        let validation = validate_step(REVIEW_STEP, &record, Some(Mode::Sea), Some(Country::Japan));
        assert_eq!(fields(&validation), vec!["ETA"]);

        record.set(FieldName::Eta, "2025-06-01");
        assert!(can_proceed(REVIEW_STEP, &record, Some(Mode::Sea), Some(Country::Japan)));

        record.set(FieldName::Eta, "next month");
        assert!(can_proceed(REVIEW_STEP, &record, Some(Mode::Sea), Some(Country::Japan)));
    }

    #[test]
    fn error_summary_wording() {
        assert_eq!(error_summary(&[]), "");
        let one = vec![ValidationError::new("Mode", "Transport Mode is required")];
        assert_eq!(error_summary(&one), "Transport Mode is required");
    }
}
