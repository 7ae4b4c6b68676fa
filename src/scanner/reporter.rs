//! Reporting abstraction
//!
//! Keeps output formatting out of the dispatcher: the dispatcher only announces
//! the root, each result as it arrives, and the final total.

use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::SizeResult;
use crate::util::{bytes_to_mb, quoted};

/// Receives the progress of one distribution run
pub trait DistributionReporter {
    fn begin(&mut self, root: &Path) -> io::Result<()>;
    fn entry(&mut self, result: &SizeResult) -> io::Result<()>;
    fn finish(&mut self, total: u64, elapsed: Duration) -> io::Result<()>;
}

/// Discards everything (library callers, tests, benchmarks)
pub struct NoopReporter;

impl DistributionReporter for NoopReporter {
    fn begin(&mut self, _root: &Path) -> io::Result<()> {
        Ok(())
    }

    fn entry(&mut self, _result: &SizeResult) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, _total: u64, _elapsed: Duration) -> io::Result<()> {
        Ok(())
    }
}

/// Tab-separated text report.
///
/// Lines are written as results arrive unless `sorted` is set, in which case
/// they are held back and written largest first when the run finishes.
pub struct TextReporter<W: Write> {
    out: W,
    sorted: bool,
    pending: Vec<SizeResult>,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            sorted: false,
            pending: Vec::new(),
        }
    }

    pub fn sorted(out: W) -> Self {
        Self {
            sorted: true,
            ..Self::new(out)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, result: &SizeResult) -> io::Result<()> {
        writeln!(
            self.out,
            "\t{:.2}s\t{:.3}MB\t\t{}",
            result.elapsed.as_secs_f64(),
            bytes_to_mb(result.size),
            quoted(&result.path)
        )
    }
}

impl<W: Write> DistributionReporter for TextReporter<W> {
    fn begin(&mut self, root: &Path) -> io::Result<()> {
        self.pending.clear();
        writeln!(self.out, "Distribution of {}:", quoted(root))
    }

    fn entry(&mut self, result: &SizeResult) -> io::Result<()> {
        if self.sorted {
            self.pending.push(result.clone());
            return Ok(());
        }
        self.write_line(result)
    }

    fn finish(&mut self, total: u64, elapsed: Duration) -> io::Result<()> {
        let mut pending = std::mem::take(&mut self.pending);
        pending.sort_by(SizeResult::largest_first);
        for result in &pending {
            self.write_line(result)?;
        }

        writeln!(
            self.out,
            "{:.2}s elapsed\t{:.3}MB Total",
            elapsed.as_secs_f64(),
            bytes_to_mb(total)
        )?;
        self.out.flush()
    }
}

#[derive(Serialize)]
struct JsonEntry {
    path: String,
    size_bytes: u64,
    size_mb: f64,
    elapsed_secs: f64,
    kind: &'static str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: String,
    entries: &'a [JsonEntry],
    total_bytes: u64,
    total_mb: f64,
    elapsed_secs: f64,
}

/// One JSON document per root, written on a single line at finish
pub struct JsonReporter<W: Write> {
    out: W,
    root: PathBuf,
    pending: Vec<SizeResult>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            root: PathBuf::new(),
            pending: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DistributionReporter for JsonReporter<W> {
    fn begin(&mut self, root: &Path) -> io::Result<()> {
        self.root = root.to_path_buf();
        self.pending.clear();
        Ok(())
    }

    fn entry(&mut self, result: &SizeResult) -> io::Result<()> {
        self.pending.push(result.clone());
        Ok(())
    }

    fn finish(&mut self, total: u64, elapsed: Duration) -> io::Result<()> {
        let mut pending = std::mem::take(&mut self.pending);
        pending.sort_by(SizeResult::largest_first);

        let entries: Vec<JsonEntry> = pending
            .iter()
            .map(|r| JsonEntry {
                path: r.path.to_string_lossy().into_owned(),
                size_bytes: r.size,
                size_mb: bytes_to_mb(r.size),
                elapsed_secs: r.elapsed.as_secs_f64(),
                kind: r.kind.as_str(),
            })
            .collect();

        let report = JsonReport {
            root: self.root.to_string_lossy().into_owned(),
            entries: &entries,
            total_bytes: total,
            total_mb: bytes_to_mb(total),
            elapsed_secs: elapsed.as_secs_f64(),
        };

        serde_json::to_writer(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
