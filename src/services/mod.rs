pub mod converters;
pub mod entities;
pub mod files;
pub mod formats;
pub mod shared;
pub mod table;
pub mod workbook;
