pub mod scoped_table;

pub use scoped_table::{SymbolTable, SymbolTableBuilder};
