//! Per-record rendering model.
//!
//! A [`StudentCard`] is what a record looks like once field visibility and the
//! media origin have been applied. Both the TUI and the headless printer draw
//! from it, so a line missing here is missing everywhere.

use super::fields::{Field, FieldVisibility};
use crate::student::{Backgrounds, StudentRecord, present};
use std::fmt::{self, Display, Formatter};

/// Shown instead of an image when the record has no `media.src`.
pub const NO_IMAGE: &str = "No image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Url { url: String, alt: String },
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFigure {
    pub image: CardImage,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetail {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCourse {
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentCard {
    pub heading: Option<String>,
    pub figure: Option<CardFigure>,
    pub statement: Option<String>,
    pub details: Vec<CardDetail>,
    pub courses: Vec<CardCourse>,
}

const BACKGROUND_LINES: [(Field, &str); 4] = [
    (Field::PersonalBackground, "Personal Background"),
    (Field::ProfessionalBackground, "Professional Background"),
    (Field::AcademicBackground, "Academic Background"),
    (Field::SubjectBackground, "Subject Background"),
];

fn background_text(backgrounds: &Backgrounds, field: Field) -> Option<&str> {
    let value = match field {
        Field::PersonalBackground => &backgrounds.personal,
        Field::ProfessionalBackground => &backgrounds.professional,
        Field::AcademicBackground => &backgrounds.academic,
        Field::SubjectBackground => &backgrounds.subject,
        _ => return None,
    };
    present(value)
}

impl StudentCard {
    pub fn build(record: &StudentRecord, visibility: &FieldVisibility, media_origin: &str) -> Self {
        let heading = visibility
            .is_shown(Field::Name)
            .then(|| compose_heading(record))
            .filter(|h| !h.is_empty());

        let figure = visibility.is_shown(Field::Image).then(|| CardFigure {
            image: match record.media_src() {
                Some(src) => CardImage::Url {
                    url: resolve_media_url(media_origin, src),
                    alt: portrait_alt(record),
                },
                None => CardImage::Placeholder,
            },
            caption: record.media_caption().unwrap_or_default().to_string(),
        });

        let statement = if visibility.is_shown(Field::PersonalStatement) {
            record.personal_statement().map(str::to_string)
        } else {
            None
        };

        let mut details: Vec<CardDetail> = BACKGROUND_LINES
            .iter()
            .filter(|(field, _)| visibility.is_shown(*field))
            .filter_map(|&(field, label)| {
                record
                    .backgrounds
                    .as_ref()
                    .and_then(|b| background_text(b, field))
                    .map(|value| CardDetail {
                        label,
                        value: value.to_string(),
                    })
            })
            .collect();

        if visibility.is_shown(Field::PrimaryComputer) {
            if let Some(device) = record.device() {
                let value = match record.os() {
                    Some(os) => format!("{} - {}", device, os),
                    None => device.to_string(),
                };
                details.push(CardDetail {
                    label: "Primary Computer",
                    value,
                });
            }
        }

        let courses = if visibility.is_shown(Field::Courses) {
            record
                .courses()
                .iter()
                .map(|course| CardCourse {
                    title: format!(
                        "{} - {}",
                        present(&course.code).unwrap_or_default().replacen('-', "", 1),
                        present(&course.name).unwrap_or_default()
                    ),
                    reason: present(&course.reason).unwrap_or_default().to_string(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            heading,
            figure,
            statement,
            details,
            courses,
        }
    }

    /// True when nothing would be drawn for this card.
    pub fn is_blank(&self) -> bool {
        self.heading.is_none()
            && self.figure.is_none()
            && self.statement.is_none()
            && self.details.is_empty()
            && self.courses.is_empty()
    }
}

/// "first [middle] last [divider] [mascot]" with the empty parts dropped.
fn compose_heading(record: &StudentRecord) -> String {
    [
        record.first_name(),
        record.middle_initial(),
        record.last_name(),
        record.divider(),
        record.mascot(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
}

fn portrait_alt(record: &StudentRecord) -> String {
    let name = [record.first_name(), record.last_name()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    format!("Portrait of {}", name).trim_end().to_string()
}

/// Joins a relative media path onto `origin`; absolute URLs pass through.
pub fn resolve_media_url(origin: &str, src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        return src.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        src.trim_start_matches('/')
    )
}

impl Display for StudentCard {
    /// Plain-text rendering used by headless mode.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(heading) = &self.heading {
            writeln!(f, "{}", heading)?;
        }
        if let Some(figure) = &self.figure {
            match &figure.image {
                CardImage::Url { url, .. } => writeln!(f, "  Image: {}", url)?,
                CardImage::Placeholder => writeln!(f, "  Image: {}", NO_IMAGE)?,
            }
            if !figure.caption.is_empty() {
                writeln!(f, "  Caption: {}", figure.caption)?;
            }
        }
        if let Some(statement) = &self.statement {
            writeln!(f, "  {}", statement)?;
        }
        for detail in &self.details {
            writeln!(f, "  - {}: {}", detail.label, detail.value)?;
        }
        if !self.courses.is_empty() {
            writeln!(f, "  - Courses:")?;
            for course in &self.courses {
                writeln!(f, "      {}: {}", course.title, course.reason)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::{Course, Media, Platform, StudentName};

    const ORIGIN: &str = "https://dvonb.xyz";

    fn full_record() -> StudentRecord {
        StudentRecord {
            name: Some(StudentName {
                first: Some("Yoel".to_string()),
                middle_initial: None,
                last: Some("Tecleab".to_string()),
            }),
            mascot: Some("Yawning Tiger".to_string()),
            divider: Some("|".to_string()),
            media: Some(Media {
                src: Some("/uploads/yoel.jpg".to_string()),
                caption: Some("On the court".to_string()),
            }),
            personal_statement: Some("I like building things.".to_string()),
            backgrounds: Some(Backgrounds {
                personal: Some("Tennis and movies".to_string()),
                professional: None,
                academic: Some("Computer Science".to_string()),
                subject: Some(String::new()),
            }),
            platform: Some(Platform {
                device: Some("Laptop".to_string()),
                os: Some("Windows".to_string()),
            }),
            courses: Some(vec![Course {
                code: Some("ITIS-3135".to_string()),
                name: Some("Frontend Web App Development".to_string()),
                reason: Some("To learn frameworks".to_string()),
            }]),
        }
    }

    #[test]
    fn test_full_record_renders_every_present_line() {
        let card = StudentCard::build(&full_record(), &FieldVisibility::default(), ORIGIN);

        assert_eq!(card.heading.as_deref(), Some("Yoel Tecleab | Yawning Tiger"));
        assert_eq!(
            card.figure,
            Some(CardFigure {
                image: CardImage::Url {
                    url: "https://dvonb.xyz/uploads/yoel.jpg".to_string(),
                    alt: "Portrait of Yoel Tecleab".to_string(),
                },
                caption: "On the court".to_string(),
            })
        );
        assert_eq!(card.statement.as_deref(), Some("I like building things."));

        let labels: Vec<_> = card.details.iter().map(|d| d.label).collect();
        assert_eq!(
            labels,
            vec!["Personal Background", "Academic Background", "Primary Computer"]
        );
        assert_eq!(card.details[2].value, "Laptop - Windows");

        assert_eq!(card.courses.len(), 1);
        assert_eq!(card.courses[0].title, "ITIS3135 - Frontend Web App Development");
        assert_eq!(card.courses[0].reason, "To learn frameworks");
    }

    #[test]
    fn test_missing_media_uses_placeholder_and_empty_caption() {
        let record = fixtures_record_without_media();
        let card = StudentCard::build(&record, &FieldVisibility::default(), ORIGIN);
        assert_eq!(
            card.figure,
            Some(CardFigure {
                image: CardImage::Placeholder,
                caption: String::new(),
            })
        );
    }

    fn fixtures_record_without_media() -> StudentRecord {
        StudentRecord {
            media: None,
            ..full_record()
        }
    }

    #[test]
    fn test_empty_record_renders_without_error() {
        let card = StudentCard::build(&StudentRecord::default(), &FieldVisibility::default(), ORIGIN);
        assert_eq!(card.heading, None);
        assert!(card.details.is_empty());
        assert!(card.courses.is_empty());
        assert_eq!(card.statement, None);
        assert!(matches!(
            card.figure.map(|f| f.image),
            Some(CardImage::Placeholder)
        ));
    }

    #[test]
    fn test_hidden_fields_are_omitted() {
        let visibility = FieldVisibility::with_hidden(&[
            Field::Name,
            Field::Image,
            Field::PersonalBackground,
            Field::Courses,
        ]);
        let card = StudentCard::build(&full_record(), &visibility, ORIGIN);
        assert_eq!(card.heading, None);
        assert_eq!(card.figure, None);
        assert!(card.courses.is_empty());
        assert!(card.details.iter().all(|d| d.label != "Personal Background"));
        assert!(card.statement.is_some());
    }

    #[test]
    fn test_primary_computer_requires_device() {
        let mut record = full_record();
        record.platform = Some(Platform {
            device: None,
            os: Some("Linux".to_string()),
        });
        let card = StudentCard::build(&record, &FieldVisibility::default(), ORIGIN);
        assert!(card.details.iter().all(|d| d.label != "Primary Computer"));

        record.platform = Some(Platform {
            device: Some("Desktop".to_string()),
            os: None,
        });
        let card = StudentCard::build(&record, &FieldVisibility::default(), ORIGIN);
        assert_eq!(card.details.last().map(|d| d.value.as_str()), Some("Desktop"));
    }

    #[test]
    fn test_resolve_media_url() {
        assert_eq!(
            resolve_media_url("https://dvonb.xyz/", "/a/b.png"),
            "https://dvonb.xyz/a/b.png"
        );
        assert_eq!(
            resolve_media_url("https://dvonb.xyz", "a/b.png"),
            "https://dvonb.xyz/a/b.png"
        );
        assert_eq!(
            resolve_media_url("https://dvonb.xyz", "https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }

    #[test]
    fn test_plain_text_rendering() {
        let card = StudentCard::build(&full_record(), &FieldVisibility::default(), ORIGIN);
        let text = card.to_string();
        assert!(text.starts_with("Yoel Tecleab | Yawning Tiger\n"));
        assert!(text.contains("  - Primary Computer: Laptop - Windows\n"));
        assert!(text.contains("      ITIS3135 - Frontend Web App Development: To learn frameworks\n"));
        assert!(!text.contains("Subject Background"));
    }
}
