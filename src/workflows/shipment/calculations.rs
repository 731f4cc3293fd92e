//! Derived values shown while a shipment is being entered.
//!
//! Every calculation returns `None` when its inputs are not there yet; partial
//! records are the normal state of a wizard session, not an error.
//!
//! Several optional inputs are "truthy" checked: a value of `0` counts as not
//! entered. A genuine zero cost per case or zero stolen cases therefore
//! suppresses the dependent figure. Shipment desk reports rely on that blank
//! rather than a zero, so it is kept.

use super::fields::FieldName;
use super::record::{LineItem, ShipmentRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

const MILLIS_PER_DAY: i64 = 86_400_000;

fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|number| *number != 0.0 && !number.is_nan())
}

/// Parses an ISO date or timestamp into epoch milliseconds (UTC).
pub fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp_millis());
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.timestamp_millis());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Whole days from departure to arrival, rounded up.
pub fn lead_time_days(etd: Option<&str>, eta: Option<&str>) -> Option<i64> {
    let etd = parse_timestamp_millis(etd?)?;
    let eta = parse_timestamp_millis(eta?)?;

    if eta <= etd {
        return None;
    }

    let elapsed = (eta - etd).abs();
    Some((elapsed + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY)
}

pub fn price_per_unit(total_price: Option<f64>, total_cases: Option<f64>) -> Option<f64> {
    let total_price = truthy(total_price)?;
    let total_cases = truthy(total_cases)?;
    Some(total_price / total_cases)
}

fn sum_line_items(record: &ShipmentRecord, column: impl Fn(&LineItem) -> Option<f64>) -> f64 {
    record
        .line_items()
        .iter()
        .map(|item| column(item).unwrap_or(0.0))
        .sum()
}

pub fn total_cases(record: &ShipmentRecord) -> f64 {
    sum_line_items(record, |item| item.cases)
}

pub fn total_sticks(record: &ShipmentRecord) -> f64 {
    sum_line_items(record, |item| item.sticks)
}

pub fn total_gross_kilos(record: &ShipmentRecord) -> f64 {
    sum_line_items(record, |item| item.gross_kilos)
}

pub fn total_net_kilos(record: &ShipmentRecord) -> f64 {
    sum_line_items(record, |item| item.net_kilos)
}

/// Share of the shipment's cases reported stolen, as a percentage.
pub fn percent_pilfered(cases_stolen: Option<f64>, total_cases: Option<f64>) -> Option<f64> {
    let cases_stolen = cases_stolen?;
    let total_cases = truthy(total_cases)?;
    Some(cases_stolen / total_cases * 100.0)
}

pub fn value_of_stolen_items(cases_stolen: Option<f64>, cost_per_case: Option<f64>) -> Option<f64> {
    let cases_stolen = cases_stolen?;
    let cost_per_case = truthy(cost_per_case)?;
    Some(cases_stolen * cost_per_case)
}

/// Stolen cases converted to sticks using the average sticks per case of the
/// line items.
pub fn sticks_pilfered(record: &ShipmentRecord, cases_stolen: Option<f64>) -> Option<i64> {
    let cases_stolen = truthy(cases_stolen)?;

    let total_cases = total_cases(record);
    if total_cases == 0.0 {
        return None;
    }

    let sticks_per_case = total_sticks(record) / total_cases;
    Some(round_half_up(cases_stolen * sticks_per_case) as i64)
}

// Halves round towards positive infinity, matching the spreadsheet the desk
// reconciles against.
fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if rounded - value == 0.5 {
        rounded - 1.0
    } else {
        rounded
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedFields {
    pub total_cases: f64,
    pub total_sticks: f64,
    pub total_gross_kilos: f64,
    pub total_net_kilos: f64,
    pub lead_time_days: Option<i64>,
    pub price_per_unit: Option<f64>,
    pub percent_pilfered: Option<f64>,
    pub value_of_stolen_items: Option<f64>,
    pub sticks_pilfered: Option<i64>,
}

pub fn all_derived_fields(record: &ShipmentRecord) -> DerivedFields {
    let total_cases = total_cases(record);
    let cases_stolen = record.number(FieldName::CasesStolen);

    DerivedFields {
        total_cases,
        total_sticks: total_sticks(record),
        total_gross_kilos: total_gross_kilos(record),
        total_net_kilos: total_net_kilos(record),
        lead_time_days: lead_time_days(record.text(FieldName::Etd), record.text(FieldName::Eta)),
        price_per_unit: price_per_unit(record.number(FieldName::Price), Some(total_cases)),
        percent_pilfered: percent_pilfered(cases_stolen, Some(total_cases)),
        value_of_stolen_items: value_of_stolen_items(
            cases_stolen,
            record.number(FieldName::CostPerCase),
        ),
        sticks_pilfered: sticks_pilfered(record, cases_stolen),
    }
}

/// Presentation unit of a calculated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatedValueKind {
    Days,
    Currency,
    Percentage,
    Number,
    Weight,
}

pub fn format_calculated(value: Option<f64>, kind: CalculatedValueKind) -> String {
    let Some(value) = value else {
        return "N/A".to_string();
    };

    match kind {
        CalculatedValueKind::Days => {
            let suffix = if value == 1.0 { "" } else { "s" };
            format!("{} day{suffix}", trim_decimals(value, 3))
        }
        CalculatedValueKind::Currency => format!("${}", group_thousands(value, 2)),
        CalculatedValueKind::Percentage => format!("{value:.2}%"),
        CalculatedValueKind::Weight => format!("{} kg", group_thousands(value, 2)),
        CalculatedValueKind::Number => trim_decimals(value, 3),
    }
}

pub fn is_calculated_value_valid(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    let Some(value) = value else {
        return false;
    };
    if min.is_some_and(|min| value < min) {
        return false;
    }
    if max.is_some_and(|max| value > max) {
        return false;
    }
    true
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Grouped number with at most `max_decimals` digits and no trailing zeros.
fn trim_decimals(value: f64, max_decimals: usize) -> String {
    let grouped = group_thousands(value, max_decimals);
    if !grouped.contains('.') {
        return grouped;
    }
    grouped
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
