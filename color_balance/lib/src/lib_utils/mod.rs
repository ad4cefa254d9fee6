pub mod bases;
pub mod cycle_table;
pub mod error;
pub mod index_set;
pub mod struct_helper;
