//! Student records as served by the roster API.
//!
//! Every field is optional. Accessors collapse `None` and `""` into `None` so
//! the rest of the crate only has to ask "is there something to show?".

use serde::{Deserialize, Serialize};

/// Name shown for a record with neither a name nor a mascot.
pub const UNNAMED: &str = "Unnamed";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentName {
    pub first: Option<String>,
    pub middle_initial: Option<String>,
    pub last: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Media {
    pub src: Option<String>,
    pub caption: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Backgrounds {
    pub personal: Option<String>,
    pub professional: Option<String>,
    pub academic: Option<String>,
    pub subject: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Platform {
    pub device: Option<String>,
    pub os: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Course {
    pub code: Option<String>,
    pub name: Option<String>,
    pub reason: Option<String>,
}

/// One student's self-introduction.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: Option<StudentName>,
    pub mascot: Option<String>,
    pub divider: Option<String>,
    pub media: Option<Media>,
    pub personal_statement: Option<String>,
    pub backgrounds: Option<Backgrounds>,
    pub platform: Option<Platform>,
    pub courses: Option<Vec<Course>>,
}

/// Treats an empty string the same as a missing one.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl StudentRecord {
    pub fn first_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| present(&n.first))
    }

    pub fn middle_initial(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| present(&n.middle_initial))
    }

    pub fn last_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| present(&n.last))
    }

    pub fn mascot(&self) -> Option<&str> {
        present(&self.mascot)
    }

    pub fn divider(&self) -> Option<&str> {
        present(&self.divider)
    }

    pub fn media_src(&self) -> Option<&str> {
        self.media.as_ref().and_then(|m| present(&m.src))
    }

    pub fn media_caption(&self) -> Option<&str> {
        self.media.as_ref().and_then(|m| present(&m.caption))
    }

    pub fn personal_statement(&self) -> Option<&str> {
        present(&self.personal_statement)
    }

    pub fn device(&self) -> Option<&str> {
        self.platform.as_ref().and_then(|p| present(&p.device))
    }

    pub fn os(&self) -> Option<&str> {
        self.platform.as_ref().and_then(|p| present(&p.os))
    }

    pub fn courses(&self) -> &[Course] {
        self.courses.as_deref().unwrap_or_default()
    }

    /// "first [middle] last", else the mascot, else [`UNNAMED`].
    ///
    /// This is the string searched by the filter and listed by the picker.
    pub fn display_name(&self) -> String {
        let full = [self.first_name(), self.middle_initial(), self.last_name()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }
        self.mascot().unwrap_or(UNNAMED).to_string()
    }
}

/// Parses the roster API body: a JSON array of student records.
pub fn parse_roster(body: &[u8]) -> Result<Vec<StudentRecord>, serde_json::Error> {
    serde_json::from_slice(body)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_joins_present_parts() {
        let record = fixtures::named("Alice", "A", "Smith");
        assert_eq!(record.display_name(), "Alice A Smith");

        let no_middle = fixtures::named("Bob", "", "Jones");
        assert_eq!(no_middle.display_name(), "Bob Jones");
    }

    #[test]
    fn test_display_name_trims_each_part() {
        let record = fixtures::named(" Alice ", "  ", "Smith ");
        assert_eq!(record.display_name(), "Alice Smith");

        let mut browser = crate::browser::RosterBrowser::with_records(vec![record]);
        browser.set_search_term("alice smith");
        assert_eq!(browser.filtered_len(), 1);
    }

    #[test]
    fn test_display_name_falls_back_to_mascot_then_unnamed() {
        let mascot_only = StudentRecord {
            mascot: Some("Yawning Tiger".to_string()),
            ..Default::default()
        };
        assert_eq!(mascot_only.display_name(), "Yawning Tiger");

        let blank_name = StudentRecord {
            name: Some(StudentName {
                first: Some("  ".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(blank_name.display_name(), UNNAMED);
        assert_eq!(StudentRecord::default().display_name(), UNNAMED);
    }

    #[test]
    fn test_parse_roster_tolerates_missing_and_null_fields() {
        let body = br#"[
            {"name": {"first": "Yoel", "middleInitial": null, "last": "Tecleab"},
             "mascot": "Yawning Tiger", "extra": 42},
            {},
            {"media": {"src": "", "caption": null}, "courses": null}
        ]"#;
        let roster = parse_roster(body).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].display_name(), "Yoel Tecleab");
        assert_eq!(roster[0].mascot(), Some("Yawning Tiger"));
        assert_eq!(roster[1], StudentRecord::default());
        assert_eq!(roster[2].media_src(), None);
        assert!(roster[2].courses().is_empty());
    }

    #[test]
    fn test_parse_roster_rejects_non_array() {
        assert!(parse_roster(br#"{"students": []}"#).is_err());
        assert!(parse_roster(b"<html>").is_err());
    }
}
