use std::path::Path;

use csv::Writer;

use crate::{
    aggregators::frequency_table::FrequencyTable, error::ExportError, model::title::Title,
};

pub struct CsvWriter {}

impl CsvWriter {
    /// Writes `key,count` rows in table order, under a header naming the key column.
    pub fn save_table_to_csv<P: AsRef<Path>>(
        table: &FrequencyTable,
        key_column: &str,
        path: P,
    ) -> Result<(), ExportError> {
        let file_name = path.as_ref().display().to_string();
        let csv_error = |source: csv::Error| ExportError::Csv {
            file_name: file_name.clone(),
            source,
        };

        let mut wrt = Writer::from_path(path.as_ref()).map_err(csv_error)?;
        wrt.write_record([key_column, "count"]).map_err(csv_error)?;
        for (key, count) in table {
            wrt.write_record([key.as_str(), count.to_string().as_str()])
                .map_err(csv_error)?;
        }

        wrt.flush().map_err(|source| ExportError::Flush {
            file_name: file_name.clone(),
            source,
        })
    }

    pub fn save_titles_to_csv<'a, I, P>(titles: I, path: P) -> Result<(), ExportError>
    where
        I: IntoIterator<Item = &'a Title>,
        P: AsRef<Path>,
    {
        let file_name = path.as_ref().display().to_string();
        let csv_error = |source: csv::Error| ExportError::Csv {
            file_name: file_name.clone(),
            source,
        };

        let mut wrt = Writer::from_path(path.as_ref()).map_err(csv_error)?;
        wrt.write_record(Title::csv_titles()).map_err(csv_error)?;
        for title in titles {
            wrt.write_record(title.to_csvable_array())
                .map_err(csv_error)?;
        }

        wrt.flush().map_err(|source| ExportError::Flush {
            file_name: file_name.clone(),
            source,
        })
    }
}
