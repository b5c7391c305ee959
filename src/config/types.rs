//! Default values for config fields.

use crate::validate::DEFAULT_DATE_FORMAT;

// Default value functions for serde
pub(crate) fn default_count() -> usize {
    5
}
pub(crate) fn default_max_count() -> usize {
    20
}
pub(crate) fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
