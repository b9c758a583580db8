//! Exclusive Field Form
//!
//! Three search fields, one per `Category`, of which at most one may hold
//! text. Every edit is a single deterministic transition from the current
//! state to the next, so the form never has to suppress its own change
//! notifications to avoid feedback loops.

use thiserror::Error;

use crate::models::Category;

pub const MIN_LENGTH: usize = 3;

/// A validation rule attached to an active field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
}

pub const DEFAULT_RULES: [Rule; 2] = [Rule::Required, Rule::MinLength(MIN_LENGTH)];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Required(Category),

    #[error("{} needs at least {required} characters, got {actual}", .category.label())]
    TooShort {
        category: Category,
        required: usize,
        actual: usize,
    },
}

/// Whether a field carries the default rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMode {
    /// Required + min-length attached
    #[default]
    Active,
    /// No rules, value forced empty
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Field {
    value: String,
    mode: FieldMode,
    dirty: bool,
}

impl Field {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    /// Edited since the last reset
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_required(&self) -> bool {
        self.rules().contains(&Rule::Required)
    }

    pub fn rules(&self) -> &'static [Rule] {
        match self.mode {
            FieldMode::Active => &DEFAULT_RULES,
            FieldMode::Inactive => &[],
        }
    }

    fn check(&self, category: Category) -> Vec<ValidationError> {
        let len = self.value.chars().count();
        self.rules()
            .iter()
            .filter_map(|rule| match *rule {
                Rule::Required if self.value.is_empty() => Some(ValidationError::Required(category)),
                // min-length does not fire on an empty value, required covers it
                Rule::MinLength(required) if len > 0 && len < required => {
                    Some(ValidationError::TooShort { category, required, actual: len })
                }
                _ => None,
            })
            .collect()
    }

    fn deactivate(&mut self) {
        self.mode = FieldMode::Inactive;
        self.value.clear();
    }
}

/// Values and rule state of all three fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    fields: [Field; 3],
}

impl FormState {
    /// All fields empty and active
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, category: Category) -> &Field {
        &self.fields[category.index()]
    }

    pub fn value(&self, category: Category) -> &str {
        self.field(category).value()
    }

    /// True when the concatenation of all values is empty
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_empty())
    }

    /// Non-empty fields in `Category::ALL` order
    pub fn populated(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.value(c)))
            .filter(|(_, value)| !value.is_empty())
    }

    pub fn errors(&self, category: Category) -> Vec<ValidationError> {
        self.field(category).check(category)
    }

    pub fn is_valid(&self) -> bool {
        Category::ALL.into_iter().all(|c| self.errors(c).is_empty())
    }

    /// Next state after the user typed `value` into `category`
    pub fn apply_edit(&self, category: Category, value: impl Into<String>) -> FormState {
        let mut next = self.clone();
        next.edit(category, value);
        next
    }

    /// In-place form of `apply_edit`.
    ///
    /// The edited field is promoted to `Active`, every sibling is demoted
    /// and cleared, and if that leaves the whole form empty it is reset to
    /// its initial state.
    pub fn edit(&mut self, category: Category, value: impl Into<String>) {
        let edited = &mut self.fields[category.index()];
        edited.value = value.into();
        edited.mode = FieldMode::Active;
        edited.dirty = true;

        for other in Category::ALL.into_iter().filter(|c| *c != category) {
            self.fields[other.index()].deactivate();
        }

        if self.is_empty() {
            *self = FormState::new();
        }
    }

    /// Write a value bypassing mutual exclusion
    #[cfg(test)]
    pub fn inject(&mut self, category: Category, value: impl Into<String>) {
        self.fields[category.index()].value = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_count(state: &FormState) -> usize {
        state.populated().count()
    }

    #[test]
    fn test_initial_state() {
        let state = FormState::new();
        for c in Category::ALL {
            assert_eq!(state.field(c).mode(), FieldMode::Active);
            assert!(state.value(c).is_empty());
            assert!(state.field(c).is_required());
        }
        assert!(state.is_empty());
    }

    #[test]
    fn test_edit_demotes_and_clears_siblings() {
        let state = FormState::new().apply_edit(Category::Person, "Luke");

        assert_eq!(state.value(Category::Person), "Luke");
        assert_eq!(state.field(Category::Person).mode(), FieldMode::Active);
        for c in [Category::Starship, Category::Vehicle] {
            assert_eq!(state.field(c).mode(), FieldMode::Inactive);
            assert!(state.value(c).is_empty());
            assert!(state.field(c).rules().is_empty());
        }
    }

    #[test]
    fn test_switching_fields_keeps_only_latest() {
        let state = FormState::new()
            .apply_edit(Category::Starship, "Falcon")
            .apply_edit(Category::Vehicle, "Snow");

        assert!(state.value(Category::Starship).is_empty());
        assert_eq!(state.field(Category::Starship).mode(), FieldMode::Inactive);
        assert_eq!(state.value(Category::Vehicle), "Snow");
        assert_eq!(state.field(Category::Vehicle).mode(), FieldMode::Active);
    }

    #[test]
    fn test_mutual_exclusion_over_edit_sequences() {
        let edits = [
            (Category::Starship, "X"),
            (Category::Starship, "X-w"),
            (Category::Person, "Le"),
            (Category::Vehicle, "AT-AT"),
            (Category::Vehicle, ""),
            (Category::Person, "Han"),
            (Category::Starship, ""),
            (Category::Person, "Han Solo"),
            (Category::Starship, "Executor"),
        ];
        let mut state = FormState::new();
        for (category, value) in edits {
            state.edit(category, value);
            assert!(populated_count(&state) <= 1, "after editing {category} to {value:?}");
        }
    }

    #[test]
    fn test_clearing_last_field_self_heals() {
        let state = FormState::new()
            .apply_edit(Category::Vehicle, "Sand")
            .apply_edit(Category::Vehicle, "");

        assert_eq!(state, FormState::new());
        for c in Category::ALL {
            assert_eq!(state.field(c).mode(), FieldMode::Active);
            assert!(!state.field(c).is_dirty());
        }
    }

    #[test]
    fn test_validation_errors() {
        let state = FormState::new();
        assert_eq!(state.errors(Category::Starship), vec![ValidationError::Required(Category::Starship)]);
        assert!(!state.is_valid());

        let state = state.apply_edit(Category::Starship, "Xw");
        assert_eq!(
            state.errors(Category::Starship),
            vec![ValidationError::TooShort { category: Category::Starship, required: MIN_LENGTH, actual: 2 }]
        );
        // inactive siblings never report
        assert!(state.errors(Category::Person).is_empty());

        let state = state.apply_edit(Category::Starship, "X-wing");
        assert!(state.errors(Category::Starship).is_empty());
        assert!(state.is_valid());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::TooShort { category: Category::Vehicle, required: 3, actual: 1 };
        assert_eq!(err.to_string(), "Vehicle needs at least 3 characters, got 1");
        assert_eq!(ValidationError::Required(Category::Person).to_string(), "Person is required");
    }

    #[test]
    fn test_inject_bypasses_exclusion() {
        let mut state = FormState::new();
        state.inject(Category::Starship, "Falcon");
        state.inject(Category::Vehicle, "Speeder");

        let populated: Vec<_> = state.populated().collect();
        assert_eq!(populated, vec![(Category::Starship, "Falcon"), (Category::Vehicle, "Speeder")]);
    }
}
