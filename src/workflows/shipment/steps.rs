use super::domain::{Country, Mode};
use super::fields::FieldName;
use serde::Serialize;

pub const LINE_ITEMS_STEP: u8 = 3;
pub const FREIGHT_STEP: u8 = 5;
pub const REVIEW_STEP: u8 = 12;

/// Predicate deciding whether a conditional step takes part in the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepCondition {
    AnyMode,
    SeaMode,
    JapanDestination,
}

impl StepCondition {
    pub fn holds(self, mode: Option<Mode>, country: Option<Country>) -> bool {
        match self {
            StepCondition::AnyMode => matches!(mode, Some(Mode::Air) | Some(Mode::Sea)),
            StepCondition::SeaMode => mode == Some(Mode::Sea),
            StepCondition::JapanDestination => country == Some(Country::Japan),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepMetadata {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub condition: Option<StepCondition>,
}

impl StepMetadata {
    pub fn is_conditional(&self) -> bool {
        self.condition.is_some()
    }

    pub fn is_visible(&self, mode: Option<Mode>, country: Option<Country>) -> bool {
        self.condition
            .map(|condition| condition.holds(mode, country))
            .unwrap_or(true)
    }
}

pub fn step_table() -> &'static [StepMetadata] {
    &STEP_TABLE
}

static STEP_TABLE: [StepMetadata; 12] = [
    StepMetadata {
        number: 1,
        title: "Basic Information",
        description: "Shipment ID, dates, mode, and destination",
        condition: None,
    },
    StepMetadata {
        number: 2,
        title: "Order References",
        description: "SAP orders, STO, and delivery numbers",
        condition: None,
    },
    StepMetadata {
        number: 3,
        title: "Product Details",
        description: "Add product line items and container information",
        condition: None,
    },
    StepMetadata {
        number: 4,
        title: "Value & Customs",
        description: "Pricing, HS codes, and customs information",
        condition: None,
    },
    StepMetadata {
        number: 5,
        title: "Freight Details",
        description: "Air or Sea freight specific information",
        condition: Some(StepCondition::AnyMode),
    },
    StepMetadata {
        number: 6,
        title: "Schedule & Timeline",
        description: "Departure, arrival, and milestone dates",
        condition: None,
    },
    StepMetadata {
        number: 7,
        title: "Carrier Details",
        description: "Vessel and shipping line information",
        condition: Some(StepCondition::SeaMode),
    },
    StepMetadata {
        number: 8,
        title: "Documentation",
        description: "Document tracking and compliance",
        condition: None,
    },
    StepMetadata {
        number: 9,
        title: "Location & Delivery",
        description: "Ports and delivery addresses",
        condition: None,
    },
    StepMetadata {
        number: 10,
        title: "Japan-Specific",
        description: "Japan operational requirements",
        condition: Some(StepCondition::JapanDestination),
    },
    StepMetadata {
        number: 11,
        title: "Theft Tracking & Notes",
        description: "Loss tracking and additional comments",
        condition: None,
    },
    StepMetadata {
        number: 12,
        title: "Review & Submit",
        description: "Review all information and submit",
        condition: None,
    },
];

/// Wizard step owning a header field. Line-item columns live on step 3 outside
/// the catalog and the review step owns no fields.
pub const fn step_for(field: FieldName) -> u8 {
    match field {
        FieldName::Shipment
        | FieldName::LoadingDate
        | FieldName::Mode
        | FieldName::DestinationCountry
        | FieldName::EndMarket
        | FieldName::FreightForwarder => 1,
        FieldName::SalesOrder
        | FieldName::Sto
        | FieldName::Gba1Jp21
        | FieldName::Us41ShorefairGba1
        | FieldName::SecondDelivery => 2,
        FieldName::Pallets | FieldName::PalletsPerCase | FieldName::PalletDimensions => 3,
        FieldName::Value
        | FieldName::HsCode
        | FieldName::DateCode
        | FieldName::Price
        | FieldName::PricePerUnit
        | FieldName::CostPerCase
        | FieldName::CifLosAngeles
        | FieldName::Incoterm => 4,
        FieldName::Awb
        | FieldName::AwbBooking
        | FieldName::Airline
        | FieldName::DepartureAirport
        | FieldName::ContainerNo
        | FieldName::SealNo
        | FieldName::BookingNo
        | FieldName::BolNo
        | FieldName::DataLoggerSerial => 5,
        FieldName::Etd
        | FieldName::Ets
        | FieldName::Eta
        | FieldName::EtaTokyo
        | FieldName::LeadTimeDays
        | FieldName::ArrivedMemphis
        | FieldName::ArrivedLaPort
        | FieldName::CobRail
        | FieldName::CobSail => 6,
        FieldName::Vessel
        | FieldName::ShippingLine
        | FieldName::OriginalVessel
        | FieldName::FinalVessel
        | FieldName::Transhipments => 7,
        FieldName::DateCiPlDrafted
        | FieldName::DateCiPlPrinted
        | FieldName::DateTtbDrafted
        | FieldName::DateTtbPrinted
        | FieldName::DatedTtbReceivedSigned
        | FieldName::DateFinalDocsSent
        | FieldName::DateDocsHaveToBeSent
        | FieldName::DocsSentToTax
        | FieldName::FinalDocsComplete
        | FieldName::FinalDocsToEm
        | FieldName::TtbComplete
        | FieldName::TaxStatus
        | FieldName::EstimatedSwbAvailable
        | FieldName::AccountingDoc => 8,
        FieldName::PortOfDeparture
        | FieldName::PortOfDelivery
        | FieldName::FinalPlaceOfDelivery
        | FieldName::CneeAddress => 9,
        FieldName::TapeColor
        | FieldName::ContainerChecklistRecorded
        | FieldName::StoDateUpdated => 10,
        FieldName::CasesStolen
        | FieldName::SticksStolen
        | FieldName::DifferenceRemaining
        | FieldName::PercentPilfered
        | FieldName::SealsBroken
        | FieldName::ValueOfStolenItems
        | FieldName::Notes => 11,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditional_steps_are_freight_carrier_and_japan() {
        let conditional: Vec<u8> = step_table()
            .iter()
            .filter(|step| step.is_conditional())
            .map(|step| step.number)
            .collect();
        assert_eq!(conditional, vec![5, 7, 10]);
    }

    #[test]
    fn japan_step_ignores_taiwan() {
        assert!(StepCondition::JapanDestination.holds(None, Some(Country::Japan)));
        assert!(!StepCondition::JapanDestination.holds(Some(Mode::Sea), Some(Country::Taiwan)));
    }

    #[test]
    fn no_field_maps_to_review_step() {
        assert!(FieldName::ALL
            .iter()
            .all(|field| (1..REVIEW_STEP).contains(&step_for(*field))));
    }
}
