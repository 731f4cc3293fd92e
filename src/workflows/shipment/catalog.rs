use super::domain::{ApplicabilityTag, Country, DataType, FieldCategory, FieldDefinition};
use super::fields::FieldName;

const ALL: &[ApplicabilityTag] = &[ApplicabilityTag::All];
const JAPAN: &[ApplicabilityTag] = &[ApplicabilityTag::Country(Country::Japan)];
const TAIWAN: &[ApplicabilityTag] = &[ApplicabilityTag::Country(Country::Taiwan)];
const MAURITIUS: &[ApplicabilityTag] = &[ApplicabilityTag::Country(Country::Mauritius)];
const JAPAN_TAIWAN: &[ApplicabilityTag] = &[ApplicabilityTag::JapanTaiwan];
const AIR: &[ApplicabilityTag] = &[ApplicabilityTag::Air];
const SEA: &[ApplicabilityTag] = &[ApplicabilityTag::Sea];
const THEFT: &[ApplicabilityTag] = &[ApplicabilityTag::Theft];

/// Header fields in template column order. Order here drives form layout.
pub fn field_catalog() -> &'static [FieldDefinition] {
    &FIELD_CATALOG
}

pub fn definition(name: FieldName) -> Option<&'static FieldDefinition> {
    FIELD_CATALOG.iter().find(|field| field.name == name)
}

static FIELD_CATALOG: [FieldDefinition; 73] = [
    FieldDefinition {
        name: FieldName::Shipment,
        required: true,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Identifiers,
        description: "Unique shipment identifier number",
        example: "5862926",
    },
    FieldDefinition {
        name: FieldName::LoadingDate,
        required: true,
        data_type: DataType::Date,
        applies_to: ALL,
        category: FieldCategory::Identifiers,
        description: "Date shipment was loaded at origin",
        example: "2025-04-17",
    },
    FieldDefinition {
        name: FieldName::Mode,
        required: true,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Identifiers,
        description: "Transport mode: Air or Sea",
        example: "Air",
    },
    FieldDefinition {
        name: FieldName::DestinationCountry,
        required: true,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Identifiers,
        description: "Target market/destination country",
        example: "Japan",
    },
    FieldDefinition {
        name: FieldName::EndMarket,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Identifiers,
        description: "End market designation",
        example: "Japan",
    },
    FieldDefinition {
        name: FieldName::FreightForwarder,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Identifiers,
        description: "Logistics partner (SOS, Bennett, DHL, etc.)",
        example: "Bennett",
    },
    FieldDefinition {
        name: FieldName::SalesOrder,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::OrderReferences,
        description: "SAP Sales Order number",
        example: "5329531513",
    },
    FieldDefinition {
        name: FieldName::Sto,
        required: true,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::OrderReferences,
        description: "Stock Transport Order (US47-XXX format)",
        example: "4301017845",
    },
    FieldDefinition {
        name: FieldName::Gba1Jp21,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN_TAIWAN,
        category: FieldCategory::OrderReferences,
        description: "Japan/Taiwan internal transfer order",
        example: "4300984608",
    },
    FieldDefinition {
        name: FieldName::Us41ShorefairGba1,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN,
        category: FieldCategory::OrderReferences,
        description: "US41 Shorefair to GBA1 transfer",
        example: "4301053127",
    },
    FieldDefinition {
        name: FieldName::SecondDelivery,
        required: false,
        data_type: DataType::Text,
        applies_to: MAURITIUS,
        category: FieldCategory::OrderReferences,
        description: "Secondary delivery for split shipments (Mauritius)",
        example: "9190538130",
    },
    FieldDefinition {
        name: FieldName::Pallets,
        required: false,
        data_type: DataType::Integer,
        applies_to: ALL,
        category: FieldCategory::ContainerInfo,
        description: "Number of pallets",
        example: "28",
    },
    FieldDefinition {
        name: FieldName::PalletsPerCase,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::ContainerInfo,
        description: "Cases per pallet configuration",
        example: "16cs/pal",
    },
    FieldDefinition {
        name: FieldName::PalletDimensions,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::ContainerInfo,
        description: "Standard pallet dimensions",
        example: "40x48x54 inches",
    },
    FieldDefinition {
        name: FieldName::Value,
        required: false,
        data_type: DataType::Decimal,
        applies_to: ALL,
        category: FieldCategory::ValueAndCustoms,
        description: "Declared shipment value",
        example: "30000",
    },
    FieldDefinition {
        name: FieldName::HsCode,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::ValueAndCustoms,
        description: "Harmonized System customs code",
        example: "2402.20.0000",
    },
    FieldDefinition {
        name: FieldName::DateCode,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::ValueAndCustoms,
        description: "Internal production date code",
        example: "J4, K5, H5",
    },
    FieldDefinition {
        name: FieldName::Price,
        required: false,
        data_type: DataType::Decimal,
        applies_to: JAPAN,
        category: FieldCategory::ValueAndCustoms,
        description: "Total price for shipment",
        example: "53150",
    },
    FieldDefinition {
        name: FieldName::PricePerUnit,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN,
        category: FieldCategory::ValueAndCustoms,
        description: "Price per unit/case",
        example: "106.3",
    },
    FieldDefinition {
        name: FieldName::CostPerCase,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::ValueAndCustoms,
        description: "Cost per case",
        example: "78.48",
    },
    FieldDefinition {
        name: FieldName::CifLosAngeles,
        required: false,
        data_type: DataType::Text,
        applies_to: TAIWAN,
        category: FieldCategory::ValueAndCustoms,
        description: "CIF value at Los Angeles",
        example: "",
    },
    FieldDefinition {
        name: FieldName::Incoterm,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::ValueAndCustoms,
        description: "International commercial terms",
        example: "DAP, FOB-LA",
    },
    FieldDefinition {
        name: FieldName::Awb,
        required: false,
        data_type: DataType::Text,
        applies_to: AIR,
        category: FieldCategory::AirFreight,
        description: "Air Waybill number",
        example: "817-09583195",
    },
    FieldDefinition {
        name: FieldName::AwbBooking,
        required: false,
        data_type: DataType::Text,
        applies_to: AIR,
        category: FieldCategory::AirFreight,
        description: "Air freight booking reference",
        example: "729-40700310",
    },
    FieldDefinition {
        name: FieldName::Airline,
        required: false,
        data_type: DataType::Text,
        applies_to: AIR,
        category: FieldCategory::AirFreight,
        description: "Air carrier name",
        example: "Emirates, Amerijet",
    },
    FieldDefinition {
        name: FieldName::DepartureAirport,
        required: false,
        data_type: DataType::Text,
        applies_to: AIR,
        category: FieldCategory::AirFreight,
        description: "Origin airport",
        example: "Chicago Int.",
    },
    FieldDefinition {
        name: FieldName::ContainerNo,
        required: false,
        data_type: DataType::Text,
        applies_to: SEA,
        category: FieldCategory::SeaFreight,
        description: "Shipping container ID",
        example: "HAMU185514",
    },
    FieldDefinition {
        name: FieldName::SealNo,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::SeaFreight,
        description: "Container/shipment seal number",
        example: "*035067",
    },
    FieldDefinition {
        name: FieldName::BookingNo,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::SeaFreight,
        description: "Sea freight booking reference",
        example: "RICEND301900",
    },
    FieldDefinition {
        name: FieldName::BolNo,
        required: false,
        data_type: DataType::Text,
        applies_to: SEA,
        category: FieldCategory::SeaFreight,
        description: "Bill of Lading number",
        example: "",
    },
    FieldDefinition {
        name: FieldName::DataLoggerSerial,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN_TAIWAN,
        category: FieldCategory::SeaFreight,
        description: "Temperature logger serial number",
        example: "AOC1053180TT",
    },
    FieldDefinition {
        name: FieldName::Etd,
        required: false,
        data_type: DataType::Date,
        applies_to: ALL,
        category: FieldCategory::Schedule,
        description: "Estimated Time of Departure",
        example: "2025-04-20",
    },
    FieldDefinition {
        name: FieldName::Ets,
        required: false,
        data_type: DataType::Date,
        applies_to: ALL,
        category: FieldCategory::Schedule,
        description: "Estimated Time of Shipment",
        example: "2025-04-20",
    },
    FieldDefinition {
        name: FieldName::Eta,
        required: false,
        data_type: DataType::Date,
        applies_to: ALL,
        category: FieldCategory::Schedule,
        description: "Estimated Time of Arrival (general)",
        example: "2025-05-15",
    },
    FieldDefinition {
        name: FieldName::EtaTokyo,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN,
        category: FieldCategory::Schedule,
        description: "ETA Tokyo (date or Julian date)",
        example: "45583",
    },
    FieldDefinition {
        name: FieldName::LeadTimeDays,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN,
        category: FieldCategory::Schedule,
        description: "Lead time calculation (35/47/60 days)",
        example: "47",
    },
    FieldDefinition {
        name: FieldName::ArrivedMemphis,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN_TAIWAN,
        category: FieldCategory::Schedule,
        description: "Date arrived at Memphis rail hub",
        example: "2025-07-23",
    },
    FieldDefinition {
        name: FieldName::ArrivedLaPort,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN_TAIWAN,
        category: FieldCategory::Schedule,
        description: "Date arrived at LA Port",
        example: "2025-08-01",
    },
    FieldDefinition {
        name: FieldName::CobRail,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN_TAIWAN,
        category: FieldCategory::Schedule,
        description: "Cut-off date for rail connection",
        example: "2025-07-20",
    },
    FieldDefinition {
        name: FieldName::CobSail,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN,
        category: FieldCategory::Schedule,
        description: "Cut-off date to sail to Japan",
        example: "2025-09-19",
    },
    FieldDefinition {
        name: FieldName::Vessel,
        required: false,
        data_type: DataType::Text,
        applies_to: SEA,
        category: FieldCategory::Carrier,
        description: "Ship name/voyage",
        example: "ONE OWL 031W",
    },
    FieldDefinition {
        name: FieldName::ShippingLine,
        required: false,
        data_type: DataType::Text,
        applies_to: SEA,
        category: FieldCategory::Carrier,
        description: "Steamship line",
        example: "ONE, HAPAG LLOYD, MSC",
    },
    FieldDefinition {
        name: FieldName::OriginalVessel,
        required: false,
        data_type: DataType::Text,
        applies_to: SEA,
        category: FieldCategory::Carrier,
        description: "Original vessel if changed",
        example: "",
    },
    FieldDefinition {
        name: FieldName::FinalVessel,
        required: false,
        data_type: DataType::Text,
        applies_to: SEA,
        category: FieldCategory::Carrier,
        description: "Final vessel after changes",
        example: "",
    },
    FieldDefinition {
        name: FieldName::Transhipments,
        required: false,
        data_type: DataType::Text,
        applies_to: SEA,
        category: FieldCategory::Carrier,
        description: "Transhipment locations",
        example: "",
    },
    FieldDefinition {
        name: FieldName::DateCiPlDrafted,
        required: false,
        data_type: DataType::Date,
        applies_to: JAPAN,
        category: FieldCategory::Documentation,
        description: "Date CI/PL drafted",
        example: "2025-10-14",
    },
    FieldDefinition {
        name: FieldName::DateCiPlPrinted,
        required: false,
        data_type: DataType::Date,
        applies_to: JAPAN,
        category: FieldCategory::Documentation,
        description: "Date CI/PL printed",
        example: "2025-09-19",
    },
    FieldDefinition {
        name: FieldName::DateTtbDrafted,
        required: false,
        data_type: DataType::Date,
        applies_to: JAPAN,
        category: FieldCategory::Documentation,
        description: "Date TTB drafted",
        example: "2025-08-26",
    },
    FieldDefinition {
        name: FieldName::DateTtbPrinted,
        required: false,
        data_type: DataType::Date,
        applies_to: JAPAN,
        category: FieldCategory::Documentation,
        description: "Date TTB printed",
        example: "2025-10-14",
    },
    FieldDefinition {
        name: FieldName::DatedTtbReceivedSigned,
        required: false,
        data_type: DataType::Date,
        applies_to: JAPAN,
        category: FieldCategory::Documentation,
        description: "Date signed TTB received",
        example: "2025-10-16",
    },
    FieldDefinition {
        name: FieldName::DateFinalDocsSent,
        required: false,
        data_type: DataType::Date,
        applies_to: ALL,
        category: FieldCategory::Documentation,
        description: "Date final docs sent",
        example: "2025-10-16",
    },
    FieldDefinition {
        name: FieldName::DateDocsHaveToBeSent,
        required: false,
        data_type: DataType::Date,
        applies_to: JAPAN,
        category: FieldCategory::Documentation,
        description: "Deadline for sending docs",
        example: "2025-08-15",
    },
    FieldDefinition {
        name: FieldName::DocsSentToTax,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Documentation,
        description: "Date/status docs sent to tax",
        example: "Y",
    },
    FieldDefinition {
        name: FieldName::FinalDocsComplete,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Documentation,
        description: "Final docs completion status",
        example: "Yes",
    },
    FieldDefinition {
        name: FieldName::FinalDocsToEm,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Documentation,
        description: "Date final docs sent to End Market",
        example: "2025-09-01",
    },
    FieldDefinition {
        name: FieldName::TtbComplete,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Documentation,
        description: "TTB sign/return status",
        example: "Y",
    },
    FieldDefinition {
        name: FieldName::TaxStatus,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Documentation,
        description: "Tax articles status",
        example: "Sent waiting on the EM",
    },
    FieldDefinition {
        name: FieldName::EstimatedSwbAvailable,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Documentation,
        description: "Estimated SWB availability",
        example: "received 9/2",
    },
    FieldDefinition {
        name: FieldName::AccountingDoc,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Documentation,
        description: "SAP accounting document number",
        example: "1252281744",
    },
    FieldDefinition {
        name: FieldName::PortOfDeparture,
        required: false,
        data_type: DataType::Text,
        applies_to: SEA,
        category: FieldCategory::Location,
        description: "Origin port (East Coast/West Coast)",
        example: "Charleston, SC",
    },
    FieldDefinition {
        name: FieldName::PortOfDelivery,
        required: false,
        data_type: DataType::Text,
        applies_to: SEA,
        category: FieldCategory::Location,
        description: "Destination port",
        example: "PUERTO CORTES",
    },
    FieldDefinition {
        name: FieldName::FinalPlaceOfDelivery,
        required: false,
        data_type: DataType::Text,
        applies_to: SEA,
        category: FieldCategory::Location,
        description: "Final delivery location",
        example: "SAN PEDRO SULA",
    },
    FieldDefinition {
        name: FieldName::CneeAddress,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Location,
        description: "Consignee address",
        example: "",
    },
    FieldDefinition {
        name: FieldName::TapeColor,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN,
        category: FieldCategory::JapanSpecific,
        description: "Tape color for identification (Japan)",
        example: "Black, Red, Green",
    },
    FieldDefinition {
        name: FieldName::ContainerChecklistRecorded,
        required: false,
        data_type: DataType::Text,
        applies_to: JAPAN,
        category: FieldCategory::JapanSpecific,
        description: "Container checklist status",
        example: "Yes",
    },
    FieldDefinition {
        name: FieldName::StoDateUpdated,
        required: false,
        data_type: DataType::Date,
        applies_to: JAPAN,
        category: FieldCategory::JapanSpecific,
        description: "STO date update status",
        example: "Updated",
    },
    FieldDefinition {
        name: FieldName::CasesStolen,
        required: false,
        data_type: DataType::Text,
        applies_to: THEFT,
        category: FieldCategory::TheftTracking,
        description: "Number of cases stolen",
        example: "40",
    },
    FieldDefinition {
        name: FieldName::SticksStolen,
        required: false,
        data_type: DataType::Text,
        applies_to: THEFT,
        category: FieldCategory::TheftTracking,
        description: "Number of sticks stolen",
        example: "400000",
    },
    FieldDefinition {
        name: FieldName::DifferenceRemaining,
        required: false,
        data_type: DataType::Text,
        applies_to: THEFT,
        category: FieldCategory::TheftTracking,
        description: "Cases remaining after theft",
        example: "880",
    },
    FieldDefinition {
        name: FieldName::PercentPilfered,
        required: false,
        data_type: DataType::Decimal,
        applies_to: THEFT,
        category: FieldCategory::TheftTracking,
        description: "Percentage pilfered",
        example: "0.043",
    },
    FieldDefinition {
        name: FieldName::SealsBroken,
        required: false,
        data_type: DataType::Text,
        applies_to: THEFT,
        category: FieldCategory::TheftTracking,
        description: "Broken seal numbers",
        example: "*035852",
    },
    FieldDefinition {
        name: FieldName::ValueOfStolenItems,
        required: false,
        data_type: DataType::Text,
        applies_to: THEFT,
        category: FieldCategory::TheftTracking,
        description: "Value of stolen items",
        example: "4304.8",
    },
    FieldDefinition {
        name: FieldName::Notes,
        required: false,
        data_type: DataType::Text,
        applies_to: ALL,
        category: FieldCategory::Notes,
        description: "Additional comments",
        example: "",
    },
];
