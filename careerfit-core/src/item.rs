//! The immutable item collection the ranking engine indexes.
//!
//! Adapters hand over an [`ItemTable`] (header plus string cells) together
//! with a [`DatasetSchema`]. [`ItemCollection::build`] validates the pairing
//! once at startup and derives each item's document string; nothing about an
//! item changes afterwards.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::{DatasetSchema, build_document, canonical_field_name};

/// Raw tabular items as read from a dataset file.
///
/// Empty cells mean "no value". Rows are not validated until the table is
/// turned into an [`ItemCollection`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ItemTable {
    /// Create an empty table with the given header.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row of cells.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Append a row while returning `self` for chaining.
    #[must_use]
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(cells);
        self
    }

    /// Header cells exactly as supplied.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows in file order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Report whether the table has no data rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Errors raised while validating an [`ItemTable`] against a schema.
///
/// All of these are startup configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Configured text fields are not columns of the table.
    #[error("missing text columns in dataset: {fields:?}")]
    MissingTextFields {
        /// Canonical names of every missing text field.
        fields: Vec<String>,
    },
    /// The identifier or title column is absent.
    #[error("missing {role} column `{field}` in dataset")]
    MissingField {
        /// Role the column was configured for.
        role: &'static str,
        /// Canonical column name.
        field: String,
    },
    /// Two header cells canonicalise to the same name.
    #[error("column `{column}` appears more than once after normalisation")]
    DuplicateColumn {
        /// Canonical column name.
        column: String,
    },
    /// A row does not have one cell per column.
    #[error("row {row} has {found} cells but the header has {expected}")]
    RaggedRow {
        /// Zero-based data row index.
        row: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of cells in the row.
        found: usize,
    },
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: String,
    title: String,
    attributes: BTreeMap<String, String>,
    document: String,
}

impl Item {
    /// Stable identifier; empty when the dataset cell was empty.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title; empty when the dataset cell was empty.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Text the vector index sees for this item.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Look up an attribute by canonical field name.
    ///
    /// Returns `None` when the column is unknown or the cell was empty.
    #[must_use]
    pub fn attribute(&self, field: &str) -> Option<&str> {
        self.attributes.get(field).map(String::as_str)
    }
}

/// Ordered, immutable items plus the canonical schema they were built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCollection {
    schema: DatasetSchema,
    columns: BTreeSet<String>,
    items: Vec<Item>,
}

impl ItemCollection {
    /// Validate `table` against `schema` and derive every item document.
    ///
    /// # Errors
    /// Returns [`CollectionError`] when headers collide after normalisation,
    /// the identifier, title or any text column is missing, or a row is
    /// ragged.
    ///
    /// # Examples
    /// ```
    /// use careerfit_core::{DatasetSchema, ItemCollection, ItemTable};
    ///
    /// # fn main() -> Result<(), careerfit_core::CollectionError> {
    /// let table = ItemTable::new(["Job ID", "Title", "Summary"])
    ///     .with_row(["1", "Backend developer", "Rust services"]);
    /// let schema = DatasetSchema::new("job_id", "title", ["summary"]);
    /// let items = ItemCollection::build(&table, &schema)?;
    /// assert_eq!(items.len(), 1);
    /// assert_eq!(items.items()[0].document(), "Rust services");
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(table: &ItemTable, schema: &DatasetSchema) -> Result<Self, CollectionError> {
        let canonical = schema.canonical();
        let header = canonical_header(table.columns())?;
        let columns: BTreeSet<String> = header.iter().cloned().collect();

        require_field(&columns, "id", &canonical.id_field)?;
        require_field(&columns, "title", &canonical.title_field)?;
        let missing: Vec<String> = canonical
            .text_fields
            .iter()
            .filter(|field| !columns.contains(*field))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(CollectionError::MissingTextFields { fields: missing });
        }

        let items = table
            .rows()
            .iter()
            .enumerate()
            .map(|(row, cells)| build_item(row, &header, cells, &canonical))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "built item collection with {} items and {} columns",
            items.len(),
            columns.len()
        );

        Ok(Self {
            schema: canonical,
            columns,
            items,
        })
    }

    /// Canonical schema the collection was validated against.
    #[must_use]
    pub const fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    /// Items in dataset order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether the collection holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Report whether the table had a column with this canonical name.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.columns.contains(field)
    }
}

fn canonical_header(columns: &[String]) -> Result<Vec<String>, CollectionError> {
    let mut seen = BTreeSet::new();
    columns
        .iter()
        .map(|column| {
            let canonical = canonical_field_name(column);
            if seen.insert(canonical.clone()) {
                Ok(canonical)
            } else {
                Err(CollectionError::DuplicateColumn { column: canonical })
            }
        })
        .collect()
}

fn require_field(
    columns: &BTreeSet<String>,
    role: &'static str,
    field: &str,
) -> Result<(), CollectionError> {
    if columns.contains(field) {
        Ok(())
    } else {
        Err(CollectionError::MissingField {
            role,
            field: field.to_owned(),
        })
    }
}

fn build_item(
    row: usize,
    header: &[String],
    cells: &[String],
    schema: &DatasetSchema,
) -> Result<Item, CollectionError> {
    if cells.len() != header.len() {
        return Err(CollectionError::RaggedRow {
            row,
            expected: header.len(),
            found: cells.len(),
        });
    }
    let attributes: BTreeMap<String, String> = header
        .iter()
        .zip(cells)
        .filter(|(_, cell)| !cell.is_empty())
        .map(|(column, cell)| (column.clone(), cell.clone()))
        .collect();
    let lookup = |field: &str| attributes.get(field).cloned().unwrap_or_default();
    let document = build_document(&attributes, &schema.text_fields);
    Ok(Item {
        id: lookup(&schema.id_field),
        title: lookup(&schema.title_field),
        document,
        attributes,
    })
}
