use super::domain::{ApplicabilityTag, Country, FieldDefinition, Mode};

/// Decides whether a field is shown for the current selector values.
///
/// Rules are evaluated in order and the first one that decides wins:
///
/// 1. no applicability tags, or an `All` tag: shown;
/// 2. with a mode selected, a field tagged for that mode is shown and a field
///    tagged only for the other mode is hidden, before countries are considered;
/// 3. with a country selected, a direct or `Japan/Taiwan` match is shown and any
///    other destination-scoped field is hidden;
/// 4. otherwise only fields whose sole tag is `Theft` are shown.
///
/// Destination-scoped fields therefore stay hidden until a matching country is
/// picked, and mode-scoped fields until a matching mode is picked.
pub fn is_visible(field: &FieldDefinition, country: Option<Country>, mode: Option<Mode>) -> bool {
    let tags = field.applies_to;

    if tags.is_empty() || tags.contains(&ApplicabilityTag::All) {
        return true;
    }

    if let Some(mode) = mode {
        if tags.iter().any(|tag| tag.matches_mode(mode)) {
            return true;
        }
        if tags.iter().any(|tag| tag.is_mode()) {
            return false;
        }
    }

    if let Some(country) = country {
        if tags.contains(&ApplicabilityTag::Country(country)) {
            return true;
        }
        if tags.contains(&ApplicabilityTag::JapanTaiwan) && country.is_japan_or_taiwan() {
            return true;
        }
        if tags.iter().any(|tag| tag.is_country_scoped()) {
            return false;
        }
    }

    matches!(tags, [ApplicabilityTag::Theft])
}
