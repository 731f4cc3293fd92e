use super::domain::{Country, Mode};
use super::fields::FieldName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scalar captured for a header field. Dates travel as ISO text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            FieldValue::Number(_) => None,
        }
    }

    /// Numeric reading of the value; numeric text is accepted since the form
    /// captures several quantities through free-text inputs. Only finite
    /// numbers count, so "NaN" or "inf" typed into a quantity reads as absent.
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            FieldValue::Number(number) => Some(*number),
            FieldValue::Text(text) => text.trim().parse::<f64>().ok(),
        };
        number.filter(|number| number.is_finite())
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(number) => number.is_nan(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// One product row of the shipment. Ids are assigned by whoever creates the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    #[serde(rename = "Delivery", default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<String>,
    #[serde(rename = "SKU", default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Cases", default, skip_serializing_if = "Option::is_none")]
    pub cases: Option<f64>,
    #[serde(rename = "Sticks", default, skip_serializing_if = "Option::is_none")]
    pub sticks: Option<f64>,
    #[serde(rename = "Gross_Kilos", default, skip_serializing_if = "Option::is_none")]
    pub gross_kilos: Option<f64>,
    #[serde(rename = "Net_Kilos", default, skip_serializing_if = "Option::is_none")]
    pub net_kilos: Option<f64>,
}

impl LineItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    #[serde(flatten, deserialize_with = "skip_null_values")]
    values: BTreeMap<FieldName, FieldValue>,
    #[serde(rename = "lineItems", default)]
    line_items: Vec<LineItem>,
}

// Cleared form inputs arrive as `null`; they are simply not entered.
fn skip_null_values<'de, D>(deserializer: D) -> Result<BTreeMap<FieldName, FieldValue>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = BTreeMap::<FieldName, Option<FieldValue>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect())
}

impl ShipmentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    pub fn clear(&mut self, field: FieldName) -> Option<FieldValue> {
        self.values.remove(&field)
    }

    /// Trimmed text of a field, `None` when absent, numeric or blank.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        self.get(field)
            .and_then(FieldValue::as_text)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn number(&self, field: FieldName) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_number)
    }

    /// Whether the field holds something a user would consider filled in.
    pub fn has_value(&self, field: FieldName) -> bool {
        self.get(field).map(|value| !value.is_blank()).unwrap_or(false)
    }

    pub fn mode(&self) -> Option<Mode> {
        self.text(FieldName::Mode).and_then(|raw| raw.parse().ok())
    }

    pub fn destination_country(&self) -> Option<Country> {
        self.text(FieldName::DestinationCountry)
            .and_then(|raw| raw.parse().ok())
    }

    pub fn set_mode(&mut self, mode: Option<Mode>) {
        match mode {
            Some(mode) => self.set(FieldName::Mode, mode.label()),
            None => {
                self.clear(FieldName::Mode);
            }
        }
    }

    pub fn set_destination_country(&mut self, country: Option<Country>) {
        match country {
            Some(country) => self.set(FieldName::DestinationCountry, country.label()),
            None => {
                self.clear(FieldName::DestinationCountry);
            }
        }
    }

    pub fn values(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn add_line_item(&mut self, item: LineItem) {
        self.line_items.push(item);
    }

    pub fn remove_line_item(&mut self, id: &str) -> Option<LineItem> {
        let position = self.line_items.iter().position(|item| item.id == id)?;
        Some(self.line_items.remove(position))
    }

    pub fn extend_line_items(&mut self, items: impl IntoIterator<Item = LineItem>) {
        self.line_items.extend(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_template_column_names() {
        let record: ShipmentRecord = serde_json::from_value(json!({
            "Shipment": "5862926",
            "Mode": "Sea",
            "Destination_Country": "Costa Rica",
            "2nd_Delivery": "9190538130",
            "Cases_Stolen": 40,
            "lineItems": [{ "id": "item-1", "SKU": "A-1", "Cases": 5 }]
        }))
        .expect("record parses");

        assert_eq!(record.text(FieldName::Shipment), Some("5862926"));
        assert_eq!(record.mode(), Some(Mode::Sea));
        assert_eq!(record.destination_country(), Some(Country::CostaRica));
        assert_eq!(record.text(FieldName::SecondDelivery), Some("9190538130"));
        assert_eq!(record.number(FieldName::CasesStolen), Some(40.0));
        assert_eq!(record.line_items()[0].cases, Some(5.0));
    }

    #[test]
    fn missing_line_items_default_to_empty() {
        let record: ShipmentRecord =
            serde_json::from_value(json!({ "Shipment": "1" })).expect("record parses");
        assert!(record.line_items().is_empty());
    }

    #[test]
    fn rejects_unknown_header_columns() {
        let result = serde_json::from_value::<ShipmentRecord>(json!({ "Shipment_Id": "1" }));
        assert!(result.is_err());
    }

    #[test]
    fn numeric_text_reads_as_number() {
        let mut record = ShipmentRecord::new();
        record.set(FieldName::CostPerCase, "78.48");
        record.set(FieldName::Notes, "   ");

        assert_eq!(record.number(FieldName::CostPerCase), Some(78.48));
        assert!(!record.has_value(FieldName::Notes));
        assert_eq!(record.text(FieldName::Notes), None);
    }

    #[test]
    fn non_finite_text_is_not_a_number() {
        let mut record = ShipmentRecord::new();
        for raw in ["NaN", "inf", "-infinity"] {
            record.set(FieldName::CasesStolen, raw);
            assert_eq!(record.number(FieldName::CasesStolen), None, "{raw}");
        }
    }

    #[test]
    fn null_header_values_read_as_absent() {
        let record: ShipmentRecord =
            serde_json::from_value(json!({ "Shipment": "1", "ETD": null, "Notes": null }))
                .expect("record parses");

        assert_eq!(record.get(FieldName::Etd), None);
        assert!(!record.has_value(FieldName::Notes));
        assert_eq!(record.values().count(), 1);
    }

    #[test]
    fn line_items_can_be_removed_by_id() {
        let mut record = ShipmentRecord::new();
        record.add_line_item(LineItem::new("a"));
        record.add_line_item(LineItem::new("b"));

        let removed = record.remove_line_item("a").expect("row exists");
        assert_eq!(removed.id, "a");
        assert_eq!(record.line_items().len(), 1);
        assert!(record.remove_line_item("missing").is_none());
    }
}
