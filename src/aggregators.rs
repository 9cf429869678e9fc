pub mod category_counter;
pub mod frequency_table;
