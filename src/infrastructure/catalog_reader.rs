// Infrastructure: delimited-file catalog ingestion
// Rows stay unvalidated here; validation belongs to the model build.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::domain::{errors::Result, models::ProjectRecord};

pub const DEFAULT_DELIMITER: u8 = b';';

/// Read all project rows from `reader`, keeping file order
pub fn read_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<ProjectRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_reader(reader);

    let records = csv_reader
        .deserialize()
        .collect::<std::result::Result<Vec<ProjectRecord>, _>>()?;

    Ok(records)
}

pub fn read_catalog_file(path: &Path, delimiter: u8) -> Result<Vec<ProjectRecord>> {
    let file = File::open(path)?;
    let records = read_records(file, delimiter)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "read project catalog");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::PortfolioError;

    #[test]
    fn reads_portuguese_headers() {
        let data = "Descrição;Retorno esperado (R$);Custo do investimento (R$);Risco do investimento\n\
                    Compra de empilhadeira;140000;170000;Médio\n\
                    Construção de datacenter; 120000.5 ;320000;Alto\n";

        let records = read_records(data.as_bytes(), DEFAULT_DELIMITER).unwrap();
        assert_eq!(
            records,
            vec![
                ProjectRecord::new("Compra de empilhadeira", 140000.0, 170000.0, "Médio"),
                ProjectRecord::new("Construção de datacenter", 120000.5, 320000.0, "Alto"),
            ]
        );
    }

    #[test]
    fn reads_english_headers_with_commas() {
        let data = "description,expected_return,expected_cost,risk_category\n\
                    cloud,80000,120000,Low\n";
        let records = read_records(data.as_bytes(), b',').unwrap();
        assert_eq!(records[0].risk_category, "Low");
    }

    #[test]
    fn keeps_unknown_labels_for_the_builder() {
        let data = "description;expected_return;expected_cost;risk_category\nx;1;1;Unknown\n";
        let records = read_records(data.as_bytes(), DEFAULT_DELIMITER).unwrap();
        assert_eq!(records[0].risk_category, "Unknown");
    }

    #[test]
    fn malformed_amount_is_a_catalog_error() {
        let data = "description;expected_return;expected_cost;risk_category\nx;lots;1;Low\n";
        let err = read_records(data.as_bytes(), DEFAULT_DELIMITER).unwrap_err();
        assert!(matches!(err, PortfolioError::Catalog(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_catalog_file(Path::new("/nonexistent/projects.csv"), DEFAULT_DELIMITER)
            .unwrap_err();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
