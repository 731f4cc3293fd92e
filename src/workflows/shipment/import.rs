use super::record::LineItem;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum LineItemImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for LineItemImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineItemImportError::Io(err) => write!(f, "failed to read line item export: {}", err),
            LineItemImportError::Csv(err) => write!(f, "invalid line item CSV data: {}", err),
        }
    }
}

impl std::error::Error for LineItemImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineItemImportError::Io(err) => Some(err),
            LineItemImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LineItemImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LineItemImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct LineItemRow {
    #[serde(rename = "Delivery", default, deserialize_with = "empty_string_as_none")]
    delivery: Option<String>,
    #[serde(rename = "SKU", default, deserialize_with = "empty_string_as_none")]
    sku: Option<String>,
    #[serde(rename = "Description", default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(rename = "Cases", default)]
    cases: Option<f64>,
    #[serde(rename = "Sticks", default)]
    sticks: Option<f64>,
    #[serde(rename = "Gross_Kilos", default)]
    gross_kilos: Option<f64>,
    #[serde(rename = "Net_Kilos", default)]
    net_kilos: Option<f64>,
}

impl LineItemRow {
    fn into_line_item(self, id: String) -> LineItem {
        LineItem {
            id,
            delivery: self.delivery,
            sku: self.sku,
            description: self.description,
            cases: self.cases,
            sticks: self.sticks,
            gross_kilos: self.gross_kilos,
            net_kilos: self.net_kilos,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn line_item_id(index: usize) -> String {
    format!("line-{:04}", index + 1)
}

/// Reads product rows exported from the packing list spreadsheet.
pub struct LineItemImporter;

impl LineItemImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LineItem>, LineItemImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LineItem>, LineItemImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut items = Vec::new();
        for (index, row) in csv_reader.deserialize::<LineItemRow>().enumerate() {
            items.push(row?.into_line_item(line_item_id(index)));
        }

        debug!(rows = items.len(), "imported shipment line items");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn imports_rows_with_generated_ids() {
        let csv = "Delivery,SKU,Description,Cases,Sticks,Gross_Kilos,Net_Kilos\n\
                   9190538130,MB-KS-20,Marlboro KS 20s,500,5000000,6250.5,5900\n\
                   9190538131, PM-100 ,,,, ,\n";

        let items = LineItemImporter::from_reader(Cursor::new(csv)).expect("csv parses");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "line-0001");
        assert_eq!(items[0].cases, Some(500.0));
        assert_eq!(items[0].gross_kilos, Some(6250.5));
        assert_eq!(items[1].id, "line-0002");
        assert_eq!(items[1].sku.as_deref(), Some("PM-100"));
        assert_eq!(items[1].description, None);
        assert_eq!(items[1].cases, None);
    }

    #[test]
    fn missing_columns_are_absent() {
        let csv = "SKU,Cases\nA-1,3\n";
        let items = LineItemImporter::from_reader(Cursor::new(csv)).expect("csv parses");
        assert_eq!(items[0].delivery, None);
        assert_eq!(items[0].cases, Some(3.0));
    }

    #[test]
    fn non_numeric_quantity_is_a_csv_error() {
        let csv = "SKU,Cases\nA-1,many\n";
        let err = LineItemImporter::from_reader(Cursor::new(csv)).expect_err("cases must be numeric");
        assert!(matches!(err, LineItemImportError::Csv(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = LineItemImporter::from_path("./does-not-exist.csv").expect_err("file is missing");
        assert!(matches!(err, LineItemImportError::Io(_)));
    }
}
