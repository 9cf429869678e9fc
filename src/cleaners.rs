pub mod record_cleaner;
