//! CSV item datasets.

use std::io::Read;

use camino::Utf8Path;
use careerfit_core::{DatasetSchema, ItemCollection, ItemTable};

use crate::{DatasetError, open_utf8_file};

/// Read a CSV file into an [`ItemTable`].
///
/// The first record is the header. Short rows are padded with empty cells and
/// long rows lose their extra cells; both cases are logged as warnings.
///
/// # Errors
/// Returns [`DatasetError::Open`] when the file cannot be opened and
/// [`DatasetError::Csv`] when it is not valid UTF-8 CSV.
pub fn load_item_table(path: &Utf8Path) -> Result<ItemTable, DatasetError> {
    let file = open_utf8_file(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_item_table(file).map_err(|source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Read CSV records from `reader` into an [`ItemTable`].
///
/// # Errors
/// Returns the CSV error when a record cannot be decoded.
///
/// # Examples
/// ```
/// use careerfit_data::read_item_table;
///
/// let table = read_item_table("id,title\n1,Nurse\n".as_bytes()).expect("valid CSV");
/// assert_eq!(table.columns(), ["id", "title"]);
/// assert_eq!(table.len(), 1);
/// ```
pub fn read_item_table<R: Read>(reader: R) -> Result<ItemTable, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns: Vec<String> = csv_reader.headers()?.iter().map(str::to_owned).collect();
    let width = columns.len();
    let mut table = ItemTable::new(columns);
    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;
        if record.len() != width {
            log::warn!(
                "row {row} has {} cells but the header has {width}; {}",
                record.len(),
                if record.len() < width {
                    "padding with empty cells"
                } else {
                    "dropping the extra cells"
                }
            );
        }
        let cells = record
            .iter()
            .chain(std::iter::repeat(""))
            .take(width)
            .map(str::to_owned);
        table.push_row(cells);
    }
    log::info!("read {} rows with {width} columns", table.len());
    Ok(table)
}

/// Load a CSV dataset and validate it against `schema`.
///
/// # Errors
/// Returns [`DatasetError`] when the file cannot be read or does not match
/// the schema.
pub fn load_dataset(
    path: &Utf8Path,
    schema: &DatasetSchema,
) -> Result<ItemCollection, DatasetError> {
    let table = load_item_table(path)?;
    ItemCollection::build(&table, schema).map_err(|source| DatasetError::Collection {
        path: path.to_path_buf(),
        source,
    })
}
