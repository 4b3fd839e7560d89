//! Script files
//!
//! Owns the two output files for the lifetime of one emission. Both handles
//! are buffered and closed when `ScriptFiles` is dropped, on success or error.

use crate::application::emitter::{EmitSummary, emit_scenario};
use crate::application::generators::Scenario;
use crate::error::{FixtureError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Open enrollment and bid scripts
pub struct ScriptFiles {
    enrollment_path: PathBuf,
    bid_path: PathBuf,
    enrollment: BufWriter<File>,
    bids: BufWriter<File>,
}

impl ScriptFiles {
    /// Create (or truncate) both script files
    pub fn create(enrollment_path: impl AsRef<Path>, bid_path: impl AsRef<Path>) -> Result<Self> {
        let enrollment_path = enrollment_path.as_ref().to_path_buf();
        let bid_path = bid_path.as_ref().to_path_buf();

        let enrollment = Self::open(&enrollment_path)?;
        let bids = Self::open(&bid_path)?;

        Ok(Self {
            enrollment_path,
            bid_path,
            enrollment,
            bids,
        })
    }

    fn open(path: &Path) -> Result<BufWriter<File>> {
        let file = File::create(path).map_err(|source| FixtureError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufWriter::new(file))
    }

    pub fn enrollment_path(&self) -> &Path {
        &self.enrollment_path
    }

    pub fn bid_path(&self) -> &Path {
        &self.bid_path
    }

    /// Emit a scenario into both files and flush them
    pub fn write(mut self, scenario: &Scenario) -> Result<EmitSummary> {
        let summary = emit_scenario(scenario, &mut self.enrollment, &mut self.bids)?;
        self.enrollment.flush()?;
        self.bids.flush()?;

        tracing::info!(
            enrollment = %self.enrollment_path.display(),
            bids = %self.bid_path.display(),
            agents = scenario.len(),
            "wrote scripts"
        );
        Ok(summary)
    }
}
