//! Per-field visibility of the student card.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A part of the student card that can be shown or hidden.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Field {
    Name,
    Image,
    PersonalStatement,
    PersonalBackground,
    ProfessionalBackground,
    AcademicBackground,
    SubjectBackground,
    PrimaryComputer,
    Courses,
}

impl Field {
    /// Label used by the field toggle list.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Image => "Image",
            Field::PersonalStatement => "Personal Statement",
            Field::PersonalBackground => "Personal Background",
            Field::ProfessionalBackground => "Professional Background",
            Field::AcademicBackground => "Academic Background",
            Field::SubjectBackground => "Subject Background",
            Field::PrimaryComputer => "Primary Computer",
            Field::Courses => "Courses",
        }
    }

    /// The field bound to toggle key `1`..=`9`, in declaration order.
    pub fn from_hotkey(digit: char) -> Option<Field> {
        let n = digit.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Field::iter().nth(i))
    }

    fn slot(self) -> usize {
        self as usize
    }
}

const FIELD_COUNT: usize = 9;

/// Visibility flag for every [`Field`]; all visible by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    shown: [bool; FIELD_COUNT],
}

impl Default for FieldVisibility {
    fn default() -> Self {
        Self {
            shown: [true; FIELD_COUNT],
        }
    }
}

impl FieldVisibility {
    /// Everything visible except `hidden`.
    pub fn with_hidden<'a>(hidden: impl IntoIterator<Item = &'a Field>) -> Self {
        let mut visibility = Self::default();
        for field in hidden {
            visibility.shown[field.slot()] = false;
        }
        visibility
    }

    pub fn is_shown(&self, field: Field) -> bool {
        self.shown[field.slot()]
    }

    pub fn toggle(&mut self, field: Field) {
        let slot = &mut self.shown[field.slot()];
        *slot = !*slot;
    }

    /// Fields in display order with their current flag.
    pub fn entries(&self) -> impl Iterator<Item = (Field, bool)> + '_ {
        Field::iter().map(|f| (f, self.is_shown(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count_matches_variants() {
        assert_eq!(Field::iter().count(), FIELD_COUNT);
    }

    #[test]
    fn test_toggle_flips_only_one_field() {
        let mut visibility = FieldVisibility::default();
        visibility.toggle(Field::Courses);
        assert!(!visibility.is_shown(Field::Courses));
        assert!(
            visibility
                .entries()
                .filter(|(f, _)| *f != Field::Courses)
                .all(|(_, shown)| shown)
        );
        visibility.toggle(Field::Courses);
        assert_eq!(visibility, FieldVisibility::default());
    }

    #[test]
    fn test_hotkeys_follow_declaration_order() {
        assert_eq!(Field::from_hotkey('1'), Some(Field::Name));
        assert_eq!(Field::from_hotkey('9'), Some(Field::Courses));
        assert_eq!(Field::from_hotkey('0'), None);
        assert_eq!(Field::from_hotkey('x'), None);
    }

    #[test]
    fn test_field_names_parse_from_kebab_case() {
        assert_eq!("primary-computer".parse(), Ok(Field::PrimaryComputer));
        assert_eq!(Field::PersonalStatement.to_string(), "personal-statement");
        assert!("shoe-size".parse::<Field>().is_err());
    }
}
