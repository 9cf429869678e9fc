pub mod predicate_filter;
