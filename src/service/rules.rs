//! Field rules for photo and album payloads.

use super::validation::{FieldKind, Format, ValidationRule};

pub type Rules = Vec<(&'static str, ValidationRule)>;

fn title() -> ValidationRule {
    ValidationRule {
        required: true,
        min_length: Some(3),
        max_length: Some(255),
        ..Default::default()
    }
}

pub fn photo_create() -> Rules {
    vec![
        ("title", title()),
        (
            "url",
            ValidationRule {
                required: true,
                format: Some(Format::Url),
                ..Default::default()
            },
        ),
        (
            "comment",
            ValidationRule {
                min_length: Some(3),
                ..Default::default()
            },
        ),
    ]
}

pub fn photo_update() -> Rules {
    all_optional(photo_create())
}

pub fn album_create() -> Rules {
    vec![("title", title())]
}

pub fn album_update() -> Rules {
    all_optional(album_create())
}

pub fn album_add_photo() -> Rules {
    vec![(
        "photo_id",
        ValidationRule {
            required: true,
            kind: FieldKind::Integer,
            minimum: Some(1),
            ..Default::default()
        },
    )]
}

fn all_optional(rules: Rules) -> Rules {
    rules.into_iter().map(|(field, rule)| (field, rule.optional())).collect()
}
