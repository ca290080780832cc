pub mod csv_file;
pub mod types;

pub use csv_file::{CsvFile, IngestError};
pub use types::{Row, RowSet};
