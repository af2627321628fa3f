pub mod table;

pub use table::{DocumentRow, DocumentTable};
