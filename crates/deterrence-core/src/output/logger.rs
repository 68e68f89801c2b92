//! Record Logger
//!
//! Append-only JSONL interaction-record logging.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use deterrence_events::{InteractionRecord, RoundReport};

/// Writes interaction records to a JSONL file, one record per line.
pub struct RecordLogger {
    writer: Option<BufWriter<File>>,
    record_count: u64,
}

impl RecordLogger {
    /// Creates a new logger writing to the specified path.
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            record_count: 0,
        })
    }

    /// Creates a logger that discards records (for testing).
    pub fn null() -> Self {
        Self {
            writer: None,
            record_count: 0,
        }
    }

    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Logs a single record.
    pub fn log(&mut self, record: &InteractionRecord) -> std::io::Result<()> {
        self.record_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(record)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Logs every record of a round report.
    pub fn log_round(&mut self, report: &RoundReport) -> std::io::Result<()> {
        for record in &report.records {
            self.log(record)?;
        }
        Ok(())
    }

    /// Flushes the buffer to disk.
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for RecordLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("Warning: failed to flush record logger: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::systems::Simulation;
    use std::io::BufRead;

    #[test]
    fn test_logged_lines_parse_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");

        let mut sim = Simulation::new(SimConfig::default(), 42).unwrap();
        let report = sim.run_round().unwrap();

        let mut logger = RecordLogger::new(&path).unwrap();
        logger.log_round(&report).unwrap();
        logger.flush().unwrap();
        assert_eq!(logger.record_count(), report.records.len() as u64);

        let file = File::open(&path).unwrap();
        let lines: Vec<String> = std::io::BufReader::new(file)
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines.len(), report.records.len());

        for (line, record) in lines.iter().zip(&report.records) {
            let parsed = InteractionRecord::from_jsonl(line).unwrap();
            assert_eq!(&parsed, record);
        }
    }

    #[test]
    fn test_null_logger_counts_without_writing() {
        let mut sim = Simulation::new(SimConfig::default(), 42).unwrap();
        let report = sim.run_round().unwrap();

        let mut logger = RecordLogger::null();
        logger.log_round(&report).unwrap();
        assert_eq!(logger.record_count(), report.records.len() as u64);
    }
}
