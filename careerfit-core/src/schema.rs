//! Mapping from dataset columns to the roles the ranking engine understands.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::canonical_field_name;

/// Describe how a tabular item dataset is laid out.
///
/// Only the identifier, title and text fields are mandatory. Every other role
/// is optional; leaving one unset disables the matching constraint or signal.
/// Names are compared after [`canonical_field_name`], so `"Job Title"` and
/// `"job_title"` address the same column.
///
/// # Examples
/// ```
/// use careerfit_core::DatasetSchema;
///
/// let schema = DatasetSchema::new("id", "Title", ["Summary"])
///     .with_location_field("City")
///     .with_role_tag_field("Tags");
/// let canonical = schema.canonical();
/// assert_eq!(canonical.title_field, "title");
/// assert_eq!(canonical.location_field.as_deref(), Some("city"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DatasetSchema {
    /// Column holding the stable item identifier.
    pub id_field: String,
    /// Column holding the display title.
    pub title_field: String,
    /// Columns concatenated, in order, into the item document.
    pub text_fields: Vec<String>,
    /// Column holding the item location.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location_field: Option<String>,
    /// Column holding the minimum offered salary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub salary_min_field: Option<String>,
    /// Column holding the difficulty level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub difficulty_field: Option<String>,
    /// Column holding the raw popularity signal (views, clicks, applicants).
    #[cfg_attr(feature = "serde", serde(default))]
    pub popularity_field: Option<String>,
    /// Columns holding role or domain tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub role_tag_fields: Vec<String>,
}

impl DatasetSchema {
    /// Build a schema with the mandatory roles and no optional ones.
    #[must_use]
    pub fn new<I, S>(
        id_field: impl Into<String>,
        title_field: impl Into<String>,
        text_fields: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id_field: id_field.into(),
            title_field: title_field.into(),
            text_fields: text_fields.into_iter().map(Into::into).collect(),
            location_field: None,
            salary_min_field: None,
            difficulty_field: None,
            popularity_field: None,
            role_tag_fields: Vec::new(),
        }
    }

    /// Layout of the reference job postings export.
    #[must_use]
    pub fn jobs() -> Self {
        Self::new(
            "job_id",
            "job_title",
            [
                "short_description",
                "full_description",
                "responsibilities",
                "required_skills",
                "nice_to_have_skills",
                "role_tags",
            ],
        )
        .with_location_field("job_location")
        .with_salary_min_field("salary_min")
        .with_difficulty_field("difficulty")
        .with_popularity_field("views")
        .with_role_tag_field("role_tags")
    }

    /// Wire the location column.
    #[must_use]
    pub fn with_location_field(mut self, field: impl Into<String>) -> Self {
        self.location_field = Some(field.into());
        self
    }

    /// Wire the minimum salary column.
    #[must_use]
    pub fn with_salary_min_field(mut self, field: impl Into<String>) -> Self {
        self.salary_min_field = Some(field.into());
        self
    }

    /// Wire the difficulty column.
    #[must_use]
    pub fn with_difficulty_field(mut self, field: impl Into<String>) -> Self {
        self.difficulty_field = Some(field.into());
        self
    }

    /// Wire the popularity column.
    #[must_use]
    pub fn with_popularity_field(mut self, field: impl Into<String>) -> Self {
        self.popularity_field = Some(field.into());
        self
    }

    /// Append a role tag column.
    #[must_use]
    pub fn with_role_tag_field(mut self, field: impl Into<String>) -> Self {
        self.role_tag_fields.push(field.into());
        self
    }

    /// Return a copy with every field name in canonical form.
    ///
    /// Optional roles whose name canonicalises to an empty string are
    /// dropped, as no column could ever match them.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let optional = |field: &Option<String>| {
            field
                .as_deref()
                .map(canonical_field_name)
                .filter(|name| !name.is_empty())
        };
        Self {
            id_field: canonical_field_name(&self.id_field),
            title_field: canonical_field_name(&self.title_field),
            text_fields: self
                .text_fields
                .iter()
                .map(|field| canonical_field_name(field))
                .collect(),
            location_field: optional(&self.location_field),
            salary_min_field: optional(&self.salary_min_field),
            difficulty_field: optional(&self.difficulty_field),
            popularity_field: optional(&self.popularity_field),
            role_tag_fields: self
                .role_tag_fields
                .iter()
                .map(|field| canonical_field_name(field))
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn jobs_layout_wires_every_role() {
        let schema = DatasetSchema::jobs();
        assert_eq!(schema.text_fields.len(), 6);
        assert_eq!(schema.popularity_field.as_deref(), Some("views"));
        assert_eq!(schema.role_tag_fields, vec!["role_tags".to_owned()]);
    }

    #[rstest]
    fn canonical_drops_unmatchable_optional_fields() {
        let schema = DatasetSchema::new("ID", "Title", ["Body Text"])
            .with_popularity_field("--")
            .with_role_tag_field("Domain Tags")
            .with_role_tag_field("  ");
        let canonical = schema.canonical();

        assert_eq!(canonical.id_field, "id");
        assert_eq!(canonical.text_fields, vec!["body_text".to_owned()]);
        assert!(canonical.popularity_field.is_none());
        assert_eq!(canonical.role_tag_fields, vec!["domain_tags".to_owned()]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_with_optional_roles_omitted() {
        let json = r#"{"id_field":"id","title_field":"title","text_fields":["body"]}"#;
        let schema: DatasetSchema = serde_json::from_str(json).expect("decode schema");

        assert_eq!(schema, DatasetSchema::new("id", "title", ["body"]));
    }
}
