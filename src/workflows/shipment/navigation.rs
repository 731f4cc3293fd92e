use super::blueprint::ShipmentWizardBlueprint;
use super::domain::{Country, Mode};
use super::record::ShipmentRecord;
use super::validation::can_proceed;
use std::collections::BTreeSet;
use tracing::debug;

const FIRST_STEP: u8 = 1;

/// Position of one wizard session within the visible steps. The record being
/// edited stays with the caller; mode and country are read from it or passed
/// in wherever visibility matters.
#[derive(Debug, Clone)]
pub struct WizardNavigator {
    blueprint: ShipmentWizardBlueprint,
    current_step: u8,
    visited: BTreeSet<u8>,
}

impl WizardNavigator {
    pub fn new(blueprint: ShipmentWizardBlueprint) -> Self {
        Self {
            blueprint,
            current_step: FIRST_STEP,
            visited: BTreeSet::from([FIRST_STEP]),
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn visited_steps(&self) -> &BTreeSet<u8> {
        &self.visited
    }

    pub fn has_visited(&self, step: u8) -> bool {
        self.visited.contains(&step)
    }

    pub fn total_steps(&self, mode: Option<Mode>, country: Option<Country>) -> usize {
        self.blueprint.total_steps(mode, country)
    }

    pub fn is_last_step(&self, mode: Option<Mode>, country: Option<Country>) -> bool {
        self.blueprint
            .visible_steps(mode, country)
            .last()
            .map(|step| step.number == self.current_step)
            .unwrap_or(true)
    }

    /// 1-based position of the current step among the visible ones.
    pub fn position(&self, mode: Option<Mode>, country: Option<Country>) -> Option<usize> {
        self.blueprint
            .visible_steps(mode, country)
            .iter()
            .position(|step| step.number == self.current_step)
            .map(|index| index + 1)
    }

    pub fn can_go_next(&self, record: &ShipmentRecord) -> bool {
        let mode = record.mode();
        let country = record.destination_country();

        can_proceed(self.current_step, record, mode, country) && !self.is_last_step(mode, country)
    }

    pub fn can_go_back(&self) -> bool {
        self.current_step > FIRST_STEP
    }

    /// Advances to the next visible step when the current one validates.
    /// Returns whether the wizard moved.
    pub fn go_next(&mut self, record: &ShipmentRecord) -> bool {
        if !self.can_go_next(record) {
            debug!(step = self.current_step, "shipment wizard cannot advance");
            return false;
        }

        let next = self
            .blueprint
            .visible_steps(record.mode(), record.destination_country())
            .into_iter()
            .find(|step| step.number > self.current_step)
            .map(|step| step.number);

        match next {
            Some(next) => {
                self.move_to(next);
                true
            }
            None => false,
        }
    }

    /// Steps back to the previous visible step without validating anything.
    pub fn go_back(&mut self, mode: Option<Mode>, country: Option<Country>) -> bool {
        if !self.can_go_back() {
            return false;
        }

        let previous = self
            .blueprint
            .visible_steps(mode, country)
            .into_iter()
            .rev()
            .find(|step| step.number < self.current_step)
            .map(|step| step.number);

        match previous {
            Some(previous) => {
                debug!(from = self.current_step, to = previous, "shipment wizard step back");
                self.current_step = previous;
                true
            }
            None => false,
        }
    }

    /// Jumps straight to a visible step, as the review screen's edit links do.
    pub fn go_to_step(&mut self, step: u8, mode: Option<Mode>, country: Option<Country>) -> bool {
        if !self.blueprint.is_step_visible(step, mode, country) {
            debug!(step, "ignoring jump to hidden shipment step");
            return false;
        }

        self.move_to(step);
        true
    }

    pub fn mark_step_visited(&mut self, step: u8) {
        self.visited.insert(step);
    }

    pub fn reset(&mut self) {
        self.current_step = FIRST_STEP;
        self.visited = BTreeSet::from([FIRST_STEP]);
    }

    /// Re-anchors the wizard after the mode or destination changed. A current
    /// step that is no longer part of the walk is replaced by the last visible
    /// step.
    pub fn sync_selection(&mut self, mode: Option<Mode>, country: Option<Country>) {
        if self.blueprint.is_step_visible(self.current_step, mode, country) {
            return;
        }

        if let Some(last) = self.blueprint.visible_steps(mode, country).last() {
            debug!(
                from = self.current_step,
                to = last.number,
                "shipment step hidden by selection change"
            );
            self.current_step = last.number;
        }
    }

    fn move_to(&mut self, step: u8) {
        debug!(from = self.current_step, to = step, "shipment wizard step");
        self.current_step = step;
        self.visited.insert(step);
    }
}

impl Default for WizardNavigator {
    fn default() -> Self {
        Self::new(ShipmentWizardBlueprint::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::shipment::fields::FieldName;
    use crate::workflows::shipment::record::LineItem;

    fn basic_record(mode: Mode, country: Country) -> ShipmentRecord {
        let mut record = ShipmentRecord::new();
        record.set(FieldName::Shipment, "5862926");
        record.set(FieldName::LoadingDate, "2025-04-18");
        record.set_mode(Some(mode));
        record.set_destination_country(Some(country));
        record
    }

    #[test]
    fn starts_on_first_step() {
        let navigator = WizardNavigator::default();
        assert_eq!(navigator.current_step(), 1);
        assert_eq!(navigator.visited_steps(), &BTreeSet::from([1]));
        assert!(!navigator.can_go_back());
    }

    #[test]
    fn next_is_blocked_by_validation() {
        let mut navigator = WizardNavigator::default();
        assert!(!navigator.go_next(&ShipmentRecord::new()));
        assert_eq!(navigator.current_step(), 1);
    }

    #[test]
    fn next_skips_hidden_steps() {
        let mut record = basic_record(Mode::Air, Country::Colombia);
        record.set(FieldName::Sto, "4500123456");
        record.add_line_item(LineItem::new("line-0001"));

        let mut navigator = WizardNavigator::default();
        for expected in [2, 3, 4, 5, 6, 8, 9, 11, 12] {
            assert!(navigator.go_next(&record));
            assert_eq!(navigator.current_step(), expected);
        }

        assert!(navigator.is_last_step(Some(Mode::Air), Some(Country::Colombia)));
        assert!(!navigator.go_next(&record));
        assert_eq!(navigator.position(Some(Mode::Air), Some(Country::Colombia)), Some(10));
    }

    #[test]
    fn back_never_validates() {
        let record = ShipmentRecord::new();
        let mut navigator = WizardNavigator::default();
        assert!(navigator.go_to_step(8, Some(Mode::Air), None));

        assert!(navigator.go_back(Some(Mode::Air), None));
        assert_eq!(navigator.current_step(), 6);
        assert!(navigator.can_go_next(&record));
    }

    #[test]
    fn jump_requires_visible_step() {
        let mut navigator = WizardNavigator::default();
        assert!(!navigator.go_to_step(7, Some(Mode::Air), None));
        assert!(!navigator.go_to_step(13, Some(Mode::Air), None));
        assert_eq!(navigator.current_step(), 1);

        assert!(navigator.go_to_step(10, Some(Mode::Sea), Some(Country::Japan)));
        assert!(navigator.has_visited(10));
    }

    #[test]
    fn reset_returns_to_first_step() {
        let mut navigator = WizardNavigator::default();
        navigator.go_to_step(4, None, None);
        navigator.mark_step_visited(9);

        navigator.reset();
        assert_eq!(navigator.current_step(), 1);
        assert_eq!(navigator.visited_steps(), &BTreeSet::from([1]));
    }

    #[test]
    fn hidden_current_step_clamps_to_last_visible() {
        let mut navigator = WizardNavigator::default();
        assert!(navigator.go_to_step(7, Some(Mode::Sea), Some(Country::Panama)));

        navigator.sync_selection(Some(Mode::Sea), Some(Country::Panama));
        assert_eq!(navigator.current_step(), 7);

        navigator.sync_selection(Some(Mode::Air), Some(Country::Panama));
        assert_eq!(navigator.current_step(), 12);
        assert!(navigator.has_visited(7));
    }
}
