//! Sweep driver: fill, snapshot, time, verify, report for each size.

use super::accuracy::{Mismatch, first_mismatch};
use super::config::BenchConfig;
use super::error::BenchResult;
use super::fill::RandomFiller;
use super::metrics::Measurement;
use super::workspace::Workspace;
use crate::kernels::DgemvKernel;
use crate::matrix::reference::reference_dgemv;
use log::{info, warn};
use std::fmt;
use std::time::Instant;

/// Outcome of one entry in the size sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    /// Position in the configured sweep.
    pub index: usize,
    /// True for a leading entry that the next entry repeats.
    pub warmup: bool,
    pub measurement: Measurement,
    /// First element where the candidate disagreed with the reference.
    pub mismatch: Option<Mismatch>,
}

impl SizeReport {
    pub fn size(&self) -> usize {
        self.measurement.size
    }

    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.measurement;
        write!(f, "N={}", m.size)?;
        if self.warmup {
            write!(f, " (warm-up)")?;
        }
        writeln!(f)?;
        writeln!(f, " Elapsed time is : {:.5} seconds", m.elapsed_secs())?;
        match (m.mflops, m.bandwidth_pct) {
            (Some(mflops), Some(pct)) => {
                writeln!(f, " MFLOP/s: {:.5}", mflops)?;
                writeln!(f, " Memory bandwidth utilization: {:.5}%", pct)?;
            }
            _ => {
                writeln!(f, " MFLOP/s: indeterminate (zero elapsed time)")?;
                writeln!(f, " Memory bandwidth utilization: indeterminate")?;
            }
        }
        match &self.mismatch {
            None => write!(f, " Accuracy: PASS"),
            Some(mm) => write!(
                f,
                " Accuracy: FAIL at y[{}]: expected {}, got {} (|diff| = {:e})",
                mm.index,
                mm.expected,
                mm.actual,
                mm.diff()
            ),
        }
    }
}

/// Runs one kernel over the configured size sweep.
///
/// Owns the workspace and the random generator for its whole lifetime.
/// Accuracy failures and zero-length timings are logged and recorded in the
/// per-size report; the sweep always runs to the last size.
pub struct BenchmarkDriver<K: DgemvKernel> {
    kernel: K,
    config: BenchConfig,
    filler: RandomFiller,
    workspace: Workspace,
}

impl<K: DgemvKernel> BenchmarkDriver<K> {
    /// Validates `config` and allocates the workspace for its largest size.
    ///
    /// Returns an error before any work is done if the workspace can't be
    /// allocated.
    pub fn new(kernel: K, config: BenchConfig) -> BenchResult<Self> {
        Self::with_filler(kernel, config, RandomFiller::from_os_rng())
    }

    /// Same as [`BenchmarkDriver::new`] with a caller-supplied generator.
    pub fn with_filler(kernel: K, config: BenchConfig, filler: RandomFiller) -> BenchResult<Self> {
        config.validate()?;
        let workspace = Workspace::new(config.max_size())?;

        Ok(Self {
            kernel,
            config,
            filler,
            workspace,
        })
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs the whole sweep, handing each report to `on_report` as soon as
    /// its size is done.
    pub fn run_with<F>(&mut self, mut on_report: F)
    where
        F: FnMut(&SizeReport),
    {
        info!(
            "Sweeping {} sizes with kernel '{}'",
            self.config.sizes.len(),
            self.kernel.name()
        );

        for index in 0..self.config.sizes.len() {
            let report = self.run_entry(index);
            on_report(&report);
        }
    }

    /// Runs the whole sweep and collects every report.
    pub fn run(&mut self) -> Vec<SizeReport> {
        let mut reports = Vec::with_capacity(self.config.sizes.len());
        self.run_with(|r| reports.push(r.clone()));
        reports
    }

    fn run_entry(&mut self, index: usize) -> SizeReport {
        let sizes = &self.config.sizes;
        let n = sizes[index];
        let warmup = index == 0 && sizes.get(1) == Some(&n);

        info!("Working on problem size N={}", n);

        let mut v = self.workspace.views(n);

        // Prepare inputs and take snapshots for the reference
        self.filler.fill(v.a);
        self.filler.fill(v.x);
        self.filler.fill(v.y);
        v.snapshot();

        // Nothing but the kernel call sits between the two clock reads
        let start = Instant::now();
        self.kernel.dgemv(n, v.a, v.x, v.y);
        let elapsed = start.elapsed();

        reference_dgemv(n, v.a_copy, v.x_copy, v.y_copy);
        let mismatch = first_mismatch(v.y_copy, v.y, self.config.tolerance);

        let measurement = Measurement::new(n, elapsed, self.config.peak_bandwidth_gbps);

        if measurement.is_indeterminate() {
            warn!(
                "N={}: timer reported zero elapsed time, metrics are indeterminate",
                n
            );
        }
        if let Some(mm) = &mismatch {
            warn!(
                "N={}: kernel '{}' differs from reference at y[{}] (expected {}, got {})",
                n,
                self.kernel.name(),
                mm.index,
                mm.expected,
                mm.actual
            );
        }

        SizeReport {
            index,
            warmup,
            measurement,
            mismatch,
        }
    }
}
