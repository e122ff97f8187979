pub mod converter;
pub mod table;
pub mod trace_init;

pub use converter::{ConvertError, Converter};
pub use table::{
    parse_table_toml, PhonemeClass, PhonemeEntry, PhonemeTable, TableError, DEFAULT_TABLE_TOML,
};
