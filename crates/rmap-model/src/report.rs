//! The fixed audit-export → report column mapping.
//!
//! Column names here are compatibility data for downstream spreadsheets and
//! must stay byte-for-byte identical, including odd spacing.

use crate::mapping::{DerivedField, FieldRule, MappingEntry, MappingSpec};

/// Source column used to exclude rows.
pub const SITE_ID_COLUMN: &str = "site_internal_id";
/// Site excluded from every report run.
pub const EXCLUDED_SITE_ID: &str = "SITE224854";
/// Source column holding the visit date.
pub const VISIT_DATE_COLUMN: &str = "date_of_visit";
/// Source column holding the visit time.
pub const VISIT_TIME_COLUMN: &str = "time_of_visit";
/// Source column the report is ordered by.
pub const RESULT_COLUMN: &str = "primary_result";
/// File name the report is saved under by default.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "Deliveroo Report Data.csv";

enum Source {
    Dropped,
    Column(&'static str),
    AnyOf(&'static [&'static str]),
    Month,
}

use Source::{AnyOf, Column, Dropped, Month};

const PRODUCT_DETAILS: &[&str] = &[
    "Please give details of the alcohol that you purchased:",
    "Please give details of the cigarettes that you purchased:",
    "Please give details of the e-cigarette that you purchased:",
    "Please give details of the CBD product that you purchased:",
];

const PRODUCT_HANDOVER: &[&str] = &[
    "Did the rider hand over the alcohol?",
    "Did the rider hand over the cigarettes?",
    "Did the rider hand over the e-cigs?",
    "Did the rider hand over the CBD?",
];

const REPORT_COLUMNS: &[(&str, Source)] = &[
    ("Order", Column("order_internal_id")),
    ("Client", Column("client_name")),
    ("Visit", Column("internal_id")),
    ("Site", Column(SITE_ID_COLUMN)),
    ("Order Deadline", Column("end_date")),
    ("Responsibility", Column("responsibility")),
    ("Premises Name", Column("site_name")),
    ("Address1", Column("site_address_1")),
    ("Address2", Column("site_address_2")),
    ("Address3", Column("site_address_3")),
    ("City", Dropped),
    ("Post Code", Column("site_post_code")),
    ("Submitted Date", Column("submitted_date")),
    ("Approved Date", Column("approval_date")),
    ("Item to order", Column("item_to_order")),
    ("Actual Visit Date", Column(VISIT_DATE_COLUMN)),
    ("Actual Visit Time", Column(VISIT_TIME_COLUMN)),
    ("AM / PM", Dropped),
    ("Pass-Fail", Column(RESULT_COLUMN)),
    ("Pass-Fail2", Dropped),
    (
        "Abort Reason",
        Column("Please detail why you were unable to conduct this audit:"),
    ),
    ("Extra Site 1", Column("site_code")),
    ("Extra Site 2", Month),
    ("Extra Site 3", Dropped),
    ("Extra Site 4", Dropped),
    ("Extra Site 5", Dropped),
    (
        "What is your age (in years and months)?",
        Column("What is your age?"),
    ),
    (
        "What is the name of the restaurant/shop you made the purchase from?",
        Column("What is the name of the restaurant/shop you made the purchase from?"),
    ),
    (
        "Please state the 11-digit Order Number (this can be found on your order receipt):",
        Column("Please enter the  11-digit order number:"),
    ),
    (
        "Please state the name of the product you purchased (brand and size):",
        AnyOf(PRODUCT_DETAILS),
    ),
    (
        "Did the rider ask for your ID?",
        Column("Did the rider ask for your ID?"),
    ),
    (
        "Did the rider check your ID?",
        Column("Did the rider check your ID?"),
    ),
    (
        "Did the rider ask for your date of birth?",
        Column("Did the rider ask for your date of birth?"),
    ),
    (
        "Did the rider hand you their phone to type in your date of birth?",
        Column("Did the rider hand you their phone to type in your date of birth?"),
    ),
    (
        "Did the rider hand over the age restricted product?",
        AnyOf(PRODUCT_HANDOVER),
    ),
    (
        "Anything else important to note from your interaction with the rider?",
        Column("Anything else important to note from your interaction with the rider?"),
    ),
    (
        "Deliveroo operates a contactless delivery process: Did the rider leave the delivery on the doorstep?",
        Dropped,
    ),
    ("If no, then did the rider hand you the delivery?", Dropped),
    (
        "What type of kit is the rider wearing?",
        Column("What type of kit is the rider wearing?"),
    ),
    (
        "If Deliveroo, which items are branded:",
        Column("If Deliveroo, which items are branded:"),
    ),
    (
        "If other, please provide details:",
        Column("If other, please provide details:"),
    ),
    (
        "What mode of transport was the courier using?",
        Column("What mode of transport was the rider using?"),
    ),
    (
        "Did the courier bring your delivery in a thermal bag?",
        Column("Did the rider bring your delivery in a thermal bag?"),
    ),
    (
        "Was there an age verification sticker on your order?",
        Column("Was there an age verification sticker on your order?"),
    ),
    (
        "Did the courier refer to the sticker?",
        Column("Did the courier refer to the sticker?"),
    ),
    (
        "Please use this space to explain anything unusual about your visit or to clarify any detail of your report:",
        Column(
            "Please use this space to explain anything unusual about your visit or to clarify any detail of your report:",
        ),
    ),
    (
        "Has the same rider delivered an age-restricted product to you and asked you for ID within the last month?",
        Column(
            "Has the same rider delivered an age-restricted product to you and asked you for ID within the last month?",
        ),
    ),
    (
        "Please describe the doorstep transaction:",
        Column("Please describe the doorstep transaction:"),
    ),
    (
        "Please confirm below whether or not you were asked for ID:",
        Column("Please confirm below whether or not you were asked for ID:"),
    ),
];

/// Number of columns in the report schema.
pub const REPORT_COLUMN_COUNT: usize = REPORT_COLUMNS.len();

/// Build the report mapping.
pub fn report_mapping() -> MappingSpec {
    let entries = REPORT_COLUMNS
        .iter()
        .map(|(output, source)| MappingEntry {
            output: (*output).to_string(),
            rule: match source {
                Dropped => FieldRule::Drop,
                Column(column) => FieldRule::direct(*column),
                AnyOf(columns) => FieldRule::candidates(columns.iter().copied()),
                Month => FieldRule::Derived(DerivedField::Month),
            },
        })
        .collect();
    MappingSpec::from_static_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_mapping_is_valid() {
        let spec = report_mapping();
        assert_eq!(spec.len(), REPORT_COLUMN_COUNT);
        assert_eq!(spec.len(), 49);
    }
}
