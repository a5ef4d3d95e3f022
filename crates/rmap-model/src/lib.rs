//! Data model for the audit report mapper.
//!
//! - [`table`]: source records and tables, projected output tables
//! - [`mapping`]: [`FieldRule`] and the ordered [`MappingSpec`]
//! - [`report`]: the fixed audit-export → report mapping and its key columns

pub mod error;
pub mod mapping;
pub mod report;
pub mod table;

pub use error::{ModelError, Result};
pub use mapping::{DerivedField, FieldRule, MappingEntry, MappingSpec};
pub use report::{
    DEFAULT_OUTPUT_FILE_NAME, EXCLUDED_SITE_ID, REPORT_COLUMN_COUNT, RESULT_COLUMN,
    SITE_ID_COLUMN, VISIT_DATE_COLUMN, VISIT_TIME_COLUMN, report_mapping,
};
pub use table::{InputTable, OutputTable, Record};
