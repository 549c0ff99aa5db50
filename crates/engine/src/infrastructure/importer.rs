//! Import file reader
//!
//! An import file holds one registration record per line, fields separated
//! by `|`. Each line is applied on its own: a rejected line is reported and
//! the import carries on with the next one.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use hva_domain::{Hotel, HotelError};

/// A line the hotel refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based line number
    pub line: usize,
    pub content: String,
    pub error: HotelError,
}

/// Outcome of replaying an import file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub accepted: usize,
    pub failures: Vec<LineFailure>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Replay the records of the file at `path` into the hotel.
pub fn import_file(hotel: &mut Hotel, path: &Path) -> io::Result<ImportReport> {
    let file = File::open(path)?;
    import_lines(hotel, BufReader::new(file))
}

/// Replay records read line by line. Blank lines are skipped.
pub fn import_lines(hotel: &mut Hotel, reader: impl BufRead) -> io::Result<ImportReport> {
    let mut report = ImportReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.strip_suffix('\r').unwrap_or(&line);
        if content.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split('|').collect();
        match hotel.register_entry(&fields) {
            Ok(()) => {
                tracing::debug!(line = index + 1, tag = fields[0], "Imported entry");
                report.accepted += 1;
            }
            Err(error) => {
                tracing::warn!(line = index + 1, error = %error, "Rejected import line");
                report.failures.push(LineFailure {
                    line: index + 1,
                    content: content.to_string(),
                    error,
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hva_domain::{AnimalId, HabitatId, SpeciesId};
    use std::io::Cursor;

    const SAMPLE: &str = "ESPÉCIE|L|LION\r\n\
                          ESPÉCIE|E|EAGLE\n\
                          \n\
                          HABITAT|H1|Savana|100\n\
                          ANIMAL|l1|Simba|L|H1\n\
                          ANIMAL|e1|Aquila|E|H9\n\
                          PEIXE|P1|Nemo\n\
                          TRATADOR|T1|Ana|H1\n";

    #[test]
    fn good_lines_are_applied_and_bad_lines_reported() {
        let mut hotel = Hotel::new();
        let report = import_lines(&mut hotel, Cursor::new(SAMPLE)).unwrap();

        assert_eq!(report.accepted, 5);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].line, 6);
        assert_eq!(
            report.failures[0].error,
            HotelError::UnknownHabitatId("H9".to_string())
        );
        assert_eq!(report.failures[1].content, "PEIXE|P1|Nemo");
        assert_eq!(
            report.failures[1].error,
            HotelError::UnrecognizedEntry("PEIXE".to_string())
        );

        assert!(hotel.species(&SpeciesId::new("L")).is_ok());
        assert!(hotel.animal(&AnimalId::new("l1")).is_ok());
        assert!(hotel.animal(&AnimalId::new("e1")).is_err());
        assert_eq!(
            hotel.habitat(&HabitatId::new("H1")).unwrap().zookeeper_count(),
            1
        );
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let mut hotel = Hotel::new();
        import_lines(&mut hotel, Cursor::new("ESPÉCIE|L|LION\r\n")).unwrap();
        assert_eq!(hotel.species(&SpeciesId::new("L")).unwrap().name(), "LION");
    }

    #[test]
    fn short_employee_tags_are_rejected() {
        let mut hotel = Hotel::new();
        let report = import_lines(
            &mut hotel,
            Cursor::new("HABITAT|H1|Savana|100\nTRT|T1|Ana|H1\n"),
        )
        .unwrap();

        assert_eq!(report.accepted, 1);
        assert_eq!(report.failures[0].line, 2);
        assert_eq!(
            report.failures[0].error,
            HotelError::UnrecognizedEntry("TRT".to_string())
        );
        assert_eq!(
            hotel.habitat(&HabitatId::new("H1")).unwrap().zookeeper_count(),
            0
        );
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotel.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let mut hotel = Hotel::new();
        let report = import_file(&mut hotel, &path).unwrap();
        assert_eq!(report.accepted, 5);
        assert!(!report.is_clean());
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut hotel = Hotel::new();
        assert!(import_file(&mut hotel, &dir.path().join("absent.txt")).is_err());
    }
}
