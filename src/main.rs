use std::{
    io,
    io::prelude::*,
    path::{Path, PathBuf},
    process,
};

use catalog_insights::{
    count_by, load_and_prepare_path, persisters::csv_writer::CsvWriter, titles_of, top_k, top_n,
    word_frequencies, year_added_series, Dataset, Field, FrequencyTable, PreparedDataset,
};
use clap::Parser;

mod logging;

/// Summarizes a catalog of titles: top countries, type split, genres,
/// additions per year and the most common title words.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Catalog CSV. Prompted for when omitted.
    path: Option<PathBuf>,

    /// Entries shown per category table.
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Entries shown in the title word table.
    #[arg(long, default_value_t = 25)]
    words: usize,

    /// Rows shown in the dataset preview.
    #[arg(long, default_value_t = 5)]
    preview: usize,

    /// Directory to write the prepared titles and the frequency tables to, as CSV.
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn get_path(args: &Args) -> PathBuf {
    match &args.path {
        Some(path) => path.clone(),
        None => {
            print!("Please, enter the path of the catalog CSV: ");
            io::stdout().flush().expect("could not flush stdout");
            let mut user_input = String::new();
            io::stdin()
                .read_line(&mut user_input)
                .expect("Failed to read user input");
            PathBuf::from(user_input.trim())
        }
    }
}

fn print_table(heading: &str, entries: &[(String, usize)]) {
    println!("\n{}", heading);
    if entries.is_empty() {
        println!("  (no data)");
    }
    for (key, count) in entries {
        println!("  {:<40} {:>6}", key, count);
    }
}

fn print_report(prepared: &PreparedDataset, args: &Args) -> Vec<(&'static str, FrequencyTable)> {
    let dataset = &prepared.dataset;

    println!("Dataset preview ({} titles)", dataset.len());
    for title in dataset.preview(args.preview) {
        println!(
            "  {:<8} {:<40} {:<25} {}",
            title.content_type, title.title, title.country, title.date_added
        );
    }

    let countries = count_by(dataset, Field::Country);
    let types = count_by(dataset, Field::Type);
    let genres = count_by(dataset, Field::Genre);
    let words = word_frequencies(titles_of(dataset));

    print_table(
        &format!("Top {} countries with most content", args.top),
        &top_n(&countries, args.top),
    );
    print_table("Content type distribution", &top_n(&types, types.len()));
    print_table(&format!("Top {} genres", args.top), &top_n(&genres, args.top));

    println!("\nTitles added per year");
    for (year, count) in year_added_series(dataset) {
        println!("  {:<40} {:>6}", year, count);
    }

    print_table(
        &format!("Top {} title words", args.words),
        &top_k(&words, args.words),
    );

    if !prepared.errors.is_empty() {
        println!("\n{} rows were skipped:", prepared.errors.len());
        for error in &prepared.errors {
            println!("  {}", error);
        }
    }

    vec![
        ("country", countries),
        ("type", types),
        ("genre", genres),
        ("word", words),
    ]
}

fn export_tables(dir: &Path, dataset: &Dataset, tables: &[(&str, FrequencyTable)]) {
    let titles_file = dir.join("titles.csv");
    match CsvWriter::save_titles_to_csv(dataset, &titles_file) {
        Err(e) => log::error!("Error when saving titles: {}", e),
        _ => log::info!("Successfully generated file: {}", titles_file.display()),
    }

    for (name, table) in tables {
        let file_name = dir.join(format!("{}_counts.csv", name));
        match CsvWriter::save_table_to_csv(table, name, &file_name) {
            Err(e) => log::error!("Error when saving {} counts: {}", name, e),
            _ => log::info!("Successfully generated file: {}", file_name.display()),
        }
    }
}

fn main() {
    logging::setup_logging();

    let args = Args::parse();
    let path = get_path(&args);

    let prepared = match load_and_prepare_path(&path) {
        Ok(prepared) => prepared,
        Err(e) => {
            log::error!("Could not prepare {}: {}", path.display(), e);
            process::exit(1);
        }
    };

    let tables = print_report(&prepared, &args);

    if let Some(dir) = &args.export_dir {
        export_tables(dir, &prepared.dataset, &tables);
    }
}
