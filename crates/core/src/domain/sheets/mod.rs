pub mod header_row;
pub mod output_row;
