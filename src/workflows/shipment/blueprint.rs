use super::catalog::field_catalog;
use super::domain::{CatalogError, Country, FieldDefinition, Mode};
use super::fields::FieldName;
use super::steps::{step_for, step_table, StepMetadata, FREIGHT_STEP, LINE_ITEMS_STEP, REVIEW_STEP};
use super::visibility::is_visible;
use tracing::error;

/// Read-only view over the field catalog and step table.
#[derive(Debug, Clone, Copy)]
pub struct ShipmentWizardBlueprint {
    fields: &'static [FieldDefinition],
    steps: &'static [StepMetadata],
}

impl ShipmentWizardBlueprint {
    pub fn standard() -> Self {
        Self {
            fields: field_catalog(),
            steps: step_table(),
        }
    }

    pub fn field_definitions(&self) -> &'static [FieldDefinition] {
        self.fields
    }

    pub fn steps(&self) -> &'static [StepMetadata] {
        self.steps
    }

    pub fn step(&self, number: u8) -> Option<&'static StepMetadata> {
        self.steps.iter().find(|step| step.number == number)
    }

    pub fn step_for(&self, field: FieldName) -> u8 {
        step_for(field)
    }

    /// Checks the static tables agree with each other. A failure means the
    /// catalog was edited inconsistently and the wizard must not start.
    pub fn verify(&self) -> Result<(), CatalogError> {
        for (position, step) in self.steps.iter().enumerate() {
            if usize::from(step.number) != position + 1 {
                return Err(CatalogError::StepOrdering {
                    position,
                    step: step.number,
                });
            }
        }

        for name in FieldName::ALL {
            let declared = self
                .fields
                .iter()
                .filter(|definition| definition.name == name)
                .count();
            match declared {
                0 => return Err(report(CatalogError::MissingField(name))),
                1 => {}
                _ => return Err(report(CatalogError::DuplicateField(name))),
            }
        }

        for definition in self.fields {
            if definition.applies_to.is_empty() {
                return Err(report(CatalogError::EmptyApplicability(definition.name)));
            }

            let step = step_for(definition.name);
            let accepts_fields = step != REVIEW_STEP && self.step(step).is_some();
            if !accepts_fields {
                return Err(report(CatalogError::UnmappedStep {
                    field: definition.name,
                    step,
                }));
            }
        }

        Ok(())
    }

    /// Fields of `step` that are currently visible, in catalog order.
    pub fn fields_for_step(
        &self,
        step: u8,
        mode: Option<Mode>,
        country: Option<Country>,
    ) -> Vec<&'static FieldDefinition> {
        self.fields
            .iter()
            .filter(|definition| step_for(definition.name) == step)
            .filter(|definition| is_visible(definition, country, mode))
            .collect()
    }

    pub fn visible_steps(
        &self,
        mode: Option<Mode>,
        country: Option<Country>,
    ) -> Vec<&'static StepMetadata> {
        self.steps
            .iter()
            .filter(|step| step.is_visible(mode, country))
            .collect()
    }

    pub fn total_steps(&self, mode: Option<Mode>, country: Option<Country>) -> usize {
        self.visible_steps(mode, country).len()
    }

    pub fn is_step_visible(&self, step: u8, mode: Option<Mode>, country: Option<Country>) -> bool {
        self.step(step)
            .map(|metadata| metadata.is_visible(mode, country))
            .unwrap_or(false)
    }

    pub fn title_for(&self, step: u8, mode: Option<Mode>) -> &'static str {
        if step == FREIGHT_STEP {
            return match mode {
                Some(Mode::Air) => "Air Freight Details",
                Some(Mode::Sea) => "Sea Freight Details",
                None => "Freight Details",
            };
        }

        self.step(step)
            .map(|metadata| metadata.title)
            .unwrap_or("Unknown Step")
    }

    /// Whether a step has anything to render. Line items and the review are
    /// always rendered regardless of catalog fields.
    pub fn step_has_visible_fields(
        &self,
        step: u8,
        mode: Option<Mode>,
        country: Option<Country>,
    ) -> bool {
        if step == LINE_ITEMS_STEP || step == REVIEW_STEP {
            return true;
        }

        !self.fields_for_step(step, mode, country).is_empty()
    }

    pub fn required_fields(
        &self,
        step: u8,
        mode: Option<Mode>,
        country: Option<Country>,
    ) -> Vec<FieldName> {
        self.fields_for_step(step, mode, country)
            .into_iter()
            .filter(|definition| definition.required)
            .map(|definition| definition.name)
            .collect()
    }
}

impl Default for ShipmentWizardBlueprint {
    fn default() -> Self {
        Self::standard()
    }
}

fn report(err: CatalogError) -> CatalogError {
    error!(error = %err, "shipment field catalog is inconsistent");
    err
}
