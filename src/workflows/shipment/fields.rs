use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Header columns of a shipment record, keyed by their template column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FieldName {
    // Identifiers
    Shipment,
    LoadingDate,
    Mode,
    DestinationCountry,
    EndMarket,
    FreightForwarder,
    // Order references
    SalesOrder,
    Sto,
    Gba1Jp21,
    Us41ShorefairGba1,
    SecondDelivery,
    // Container info
    Pallets,
    PalletsPerCase,
    PalletDimensions,
    // Value & customs
    Value,
    HsCode,
    DateCode,
    Price,
    PricePerUnit,
    CostPerCase,
    CifLosAngeles,
    Incoterm,
    // Air freight
    Awb,
    AwbBooking,
    Airline,
    DepartureAirport,
    // Sea freight
    ContainerNo,
    SealNo,
    BookingNo,
    BolNo,
    DataLoggerSerial,
    // Schedule
    Etd,
    Ets,
    Eta,
    EtaTokyo,
    LeadTimeDays,
    ArrivedMemphis,
    ArrivedLaPort,
    CobRail,
    CobSail,
    // Carrier
    Vessel,
    ShippingLine,
    OriginalVessel,
    FinalVessel,
    Transhipments,
    // Documentation
    DateCiPlDrafted,
    DateCiPlPrinted,
    DateTtbDrafted,
    DateTtbPrinted,
    DatedTtbReceivedSigned,
    DateFinalDocsSent,
    DateDocsHaveToBeSent,
    DocsSentToTax,
    FinalDocsComplete,
    FinalDocsToEm,
    TtbComplete,
    TaxStatus,
    EstimatedSwbAvailable,
    AccountingDoc,
    // Location
    PortOfDeparture,
    PortOfDelivery,
    FinalPlaceOfDelivery,
    CneeAddress,
    // Japan specific
    TapeColor,
    ContainerChecklistRecorded,
    StoDateUpdated,
    // Theft tracking
    CasesStolen,
    SticksStolen,
    DifferenceRemaining,
    PercentPilfered,
    SealsBroken,
    ValueOfStolenItems,
    // Notes
    Notes,
}

impl FieldName {
    pub const ALL: [FieldName; 73] = [
        Self::Shipment,
        Self::LoadingDate,
        Self::Mode,
        Self::DestinationCountry,
        Self::EndMarket,
        Self::FreightForwarder,
        Self::SalesOrder,
        Self::Sto,
        Self::Gba1Jp21,
        Self::Us41ShorefairGba1,
        Self::SecondDelivery,
        Self::Pallets,
        Self::PalletsPerCase,
        Self::PalletDimensions,
        Self::Value,
        Self::HsCode,
        Self::DateCode,
        Self::Price,
        Self::PricePerUnit,
        Self::CostPerCase,
        Self::CifLosAngeles,
        Self::Incoterm,
        Self::Awb,
        Self::AwbBooking,
        Self::Airline,
        Self::DepartureAirport,
        Self::ContainerNo,
        Self::SealNo,
        Self::BookingNo,
        Self::BolNo,
        Self::DataLoggerSerial,
        Self::Etd,
        Self::Ets,
        Self::Eta,
        Self::EtaTokyo,
        Self::LeadTimeDays,
        Self::ArrivedMemphis,
        Self::ArrivedLaPort,
        Self::CobRail,
        Self::CobSail,
        Self::Vessel,
        Self::ShippingLine,
        Self::OriginalVessel,
        Self::FinalVessel,
        Self::Transhipments,
        Self::DateCiPlDrafted,
        Self::DateCiPlPrinted,
        Self::DateTtbDrafted,
        Self::DateTtbPrinted,
        Self::DatedTtbReceivedSigned,
        Self::DateFinalDocsSent,
        Self::DateDocsHaveToBeSent,
        Self::DocsSentToTax,
        Self::FinalDocsComplete,
        Self::FinalDocsToEm,
        Self::TtbComplete,
        Self::TaxStatus,
        Self::EstimatedSwbAvailable,
        Self::AccountingDoc,
        Self::PortOfDeparture,
        Self::PortOfDelivery,
        Self::FinalPlaceOfDelivery,
        Self::CneeAddress,
        Self::TapeColor,
        Self::ContainerChecklistRecorded,
        Self::StoDateUpdated,
        Self::CasesStolen,
        Self::SticksStolen,
        Self::DifferenceRemaining,
        Self::PercentPilfered,
        Self::SealsBroken,
        Self::ValueOfStolenItems,
        Self::Notes,
    ];

    /// Column name as it appears in the shipment template and JSON payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shipment => "Shipment",
            Self::LoadingDate => "Loading_Date",
            Self::Mode => "Mode",
            Self::DestinationCountry => "Destination_Country",
            Self::EndMarket => "End_Market",
            Self::FreightForwarder => "Freight_Forwarder",
            Self::SalesOrder => "Sales_Order",
            Self::Sto => "STO",
            Self::Gba1Jp21 => "GBA1_JP21",
            Self::Us41ShorefairGba1 => "US41_Shorefair_GBA1",
            Self::SecondDelivery => "2nd_Delivery",
            Self::Pallets => "Pallets",
            Self::PalletsPerCase => "Pallets_Per_Case",
            Self::PalletDimensions => "Pallet_Dimensions",
            Self::Value => "Value",
            Self::HsCode => "HS_Code",
            Self::DateCode => "Date_Code",
            Self::Price => "Price",
            Self::PricePerUnit => "Price_Per_Unit",
            Self::CostPerCase => "Cost_Per_Case",
            Self::CifLosAngeles => "CIF_Los_Angeles",
            Self::Incoterm => "Incoterm",
            Self::Awb => "AWB",
            Self::AwbBooking => "AWB_Booking",
            Self::Airline => "Airline",
            Self::DepartureAirport => "Departure_Airport",
            Self::ContainerNo => "Container_No",
            Self::SealNo => "Seal_No",
            Self::BookingNo => "Booking_No",
            Self::BolNo => "BOL_No",
            Self::DataLoggerSerial => "Data_Logger_Serial",
            Self::Etd => "ETD",
            Self::Ets => "ETS",
            Self::Eta => "ETA",
            Self::EtaTokyo => "ETA_Tokyo",
            Self::LeadTimeDays => "Lead_Time_Days",
            Self::ArrivedMemphis => "Arrived_Memphis",
            Self::ArrivedLaPort => "Arrived_LA_Port",
            Self::CobRail => "COB_Rail",
            Self::CobSail => "COB_Sail",
            Self::Vessel => "Vessel",
            Self::ShippingLine => "Shipping_Line",
            Self::OriginalVessel => "Original_Vessel",
            Self::FinalVessel => "Final_Vessel",
            Self::Transhipments => "Transhipments",
            Self::DateCiPlDrafted => "Date_CI_PL_Drafted",
            Self::DateCiPlPrinted => "Date_CI_PL_Printed",
            Self::DateTtbDrafted => "Date_TTB_Drafted",
            Self::DateTtbPrinted => "Date_TTB_Printed",
            Self::DatedTtbReceivedSigned => "Dated_TTB_Received_Signed",
            Self::DateFinalDocsSent => "Date_Final_Docs_Sent",
            Self::DateDocsHaveToBeSent => "Date_Docs_Have_To_Be_Sent",
            Self::DocsSentToTax => "Docs_Sent_To_Tax",
            Self::FinalDocsComplete => "Final_Docs_Complete",
            Self::FinalDocsToEm => "Final_Docs_To_EM",
            Self::TtbComplete => "TTB_Complete",
            Self::TaxStatus => "Tax_Status",
            Self::EstimatedSwbAvailable => "Estimated_SWB_Available",
            Self::AccountingDoc => "Accounting_Doc",
            Self::PortOfDeparture => "Port_Of_Departure",
            Self::PortOfDelivery => "Port_Of_Delivery",
            Self::FinalPlaceOfDelivery => "Final_Place_Of_Delivery",
            Self::CneeAddress => "CNEE_Address",
            Self::TapeColor => "Tape_Color",
            Self::ContainerChecklistRecorded => "Container_Checklist_Recorded",
            Self::StoDateUpdated => "STO_Date_Updated",
            Self::CasesStolen => "Cases_Stolen",
            Self::SticksStolen => "Sticks_Stolen",
            Self::DifferenceRemaining => "Difference_Remaining",
            Self::PercentPilfered => "Percent_Pilfered",
            Self::SealsBroken => "Seals_Broken",
            Self::ValueOfStolenItems => "Value_Of_Stolen_Items",
            Self::Notes => "Notes",
        }
    }

    /// Human-readable label, e.g. `HS_Code` becomes "HS Code".
    pub fn display_label(self) -> String {
        let words: Vec<String> = self
            .as_str()
            .split('_')
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .map(|word| match acronym(&word) {
                Some(upper) => upper.to_string(),
                None => word,
            })
            .collect();

        let mut label: Vec<String> = Vec::with_capacity(words.len());
        let mut iter = words.into_iter().peekable();
        while let Some(word) = iter.next() {
            let pairs_with_pl = word.eq_ignore_ascii_case("ci")
                && iter
                    .peek()
                    .map(|next| next.eq_ignore_ascii_case("pl"))
                    .unwrap_or(false);
            if pairs_with_pl {
                iter.next();
                label.push("CI/PL".to_string());
            } else {
                label.push(word);
            }
        }

        label.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn acronym(word: &str) -> Option<&'static str> {
    const ACRONYMS: [&str; 16] = [
        "HS", "AWB", "BOL", "ETD", "ETS", "ETA", "COB", "TTB", "STO", "SKU", "CIF", "SWB",
        "CNEE", "GBA1", "JP21", "US41",
    ];

    ACRONYMS
        .into_iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(word))
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FieldName> for &'static str {
    fn from(value: FieldName) -> Self {
        value.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shipment field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| UnknownField(value.to_owned()))
    }
}

impl TryFrom<String> for FieldName {
    type Error = UnknownField;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
