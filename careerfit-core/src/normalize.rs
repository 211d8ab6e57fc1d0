//! Canonical field names and per-item document strings.
//!
//! Dataset headers and schema entries rarely agree on case or punctuation
//! (`"Job Title"`, `"job-title"`, `"JOB_TITLE"`). Every name is folded into
//! one canonical token before lookup so the two sides meet in the middle.

use std::collections::BTreeMap;

/// Separator placed between text fields when building an item document.
///
/// The surrounding spaces keep the last word of one field from fusing with
/// the first word of the next into a spurious token or bigram.
pub const DOCUMENT_SEPARATOR: &str = " \n ";

const CANONICAL_SEPARATOR: char = '_';

/// Fold a raw field name into its canonical form.
///
/// Letters are lowercased, every run of non-alphanumeric characters becomes a
/// single `_`, and leading or trailing separators are removed.
///
/// # Examples
/// ```
/// use careerfit_core::canonical_field_name;
///
/// assert_eq!(canonical_field_name("  Job Title "), "job_title");
/// assert_eq!(canonical_field_name("Nice-to-have skills!"), "nice_to_have_skills");
/// ```
#[must_use]
pub fn canonical_field_name(raw: &str) -> String {
    let mut canonical = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !canonical.is_empty() {
                canonical.push(CANONICAL_SEPARATOR);
            }
            pending_separator = false;
            canonical.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    canonical
}

/// Concatenate the present text fields of an item in configured order.
///
/// `attributes` is keyed by canonical field name and `text_fields` must
/// already be canonical. Missing fields and blank values are skipped.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use careerfit_core::build_document;
///
/// let attributes = BTreeMap::from([
///     ("summary".to_owned(), "Rust developer".to_owned()),
///     ("skills".to_owned(), "tokio serde".to_owned()),
/// ]);
/// let fields = ["summary".to_owned(), "perks".to_owned(), "skills".to_owned()];
/// assert_eq!(build_document(&attributes, &fields), "Rust developer \n tokio serde");
/// ```
#[must_use]
pub fn build_document(attributes: &BTreeMap<String, String>, text_fields: &[String]) -> String {
    text_fields
        .iter()
        .filter_map(|field| attributes.get(field))
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
        .collect::<Vec<_>>()
        .join(DOCUMENT_SEPARATOR)
}
