use crate::category::Category;
use crate::error::Error;
use crate::parser::{parse_line, split_lines, Entry};
use crate::report::Report;
use crate::tally::Tally;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";

pub struct Pipeline {
    input: PathBuf,
    output: PathBuf,
}

impl Pipeline {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Pipeline {
        Pipeline {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Reads the input, tallies it and replaces the output with the report.
    /// The output is left untouched unless the whole report was written.
    pub fn run(&self) -> Result<Tally, Error> {
        let text = fs::read_to_string(&self.input).map_err(|source| Error::Read {
            path: self.input.clone(),
            source,
        })?;

        let tally = process(&text);
        let report = Report::from_tally(&tally);
        log::info!(
            "total recycled {}, {} rejected line(s)",
            report.total_recycled(),
            tally.rejected_inputs().len()
        );

        self.write(&report).map_err(|source| Error::Write {
            path: self.output.clone(),
            source,
        })?;
        Ok(tally)
    }

    fn write(&self, report: &Report) -> std::io::Result<()> {
        let dir = match self.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = temp_file_in(dir)?;
        write!(file, "{}", report)?;
        file.flush()?;
        if let Ok(metadata) = fs::metadata(&self.output) {
            file.as_file().set_permissions(metadata.permissions())?;
        }
        file.persist(&self.output).map_err(|err| err.error)?;
        Ok(())
    }
}

/// A fresh output file gets the usual 0o666 minus umask, not the owner-only
/// mode temp files default to.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

fn record(tally: &mut Tally, entry: Entry) {
    match entry.category {
        Category::Paper => tally.add_paper(entry.quantity),
        Category::Plastic => tally.add_plastic(entry.quantity),
        Category::Glass => tally.add_glass(entry.quantity),
        Category::Metal => tally.add_metal(entry.quantity),
    }
}

/// Every line either lands in one counter or in the rejected inputs.
pub fn process(text: &str) -> Tally {
    let mut tally = Tally::new();
    let lines = split_lines(text);
    for (number, line) in lines.iter().enumerate() {
        match parse_line(line) {
            Ok(entry) => {
                log::debug!("line {}: {} += {}", number + 1, entry.category, entry.quantity);
                record(&mut tally, entry);
            }
            Err(err) => {
                log::warn!("line {}: rejected {:?}: {}", number + 1, line, err);
                tally.add_invalid_input(line);
            }
        }
    }
    log::info!("processed {} line(s)", lines.len());
    tally
}
