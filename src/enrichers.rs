pub mod title_enricher;
