//! CSV reading utilities.

mod header;
mod reader;

pub(crate) use reader::{RowReader, SourceRow};
