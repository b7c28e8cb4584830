//! Presentation of the traversal's findings on stdout.

mod layout;
mod printer;

pub use layout::layout_columns;
pub use printer::ReportPrinter;
