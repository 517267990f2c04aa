use dgemv::harness::{
    BenchConfig, BenchError, BenchmarkDriver, Measurement, RandomFiller, SizeReport,
};
use dgemv::{DgemvKernel, ScalarKernel, UnrolledKernel};
use std::time::Duration;

fn small_config(sizes: Vec<usize>) -> BenchConfig {
    BenchConfig {
        sizes,
        ..BenchConfig::default()
    }
}

fn seeded_driver<K: DgemvKernel>(kernel: K, sizes: Vec<usize>, seed: u64) -> BenchmarkDriver<K> {
    BenchmarkDriver::with_filler(kernel, small_config(sizes), RandomFiller::seeded(seed)).unwrap()
}

/// Deliberately broken kernel: only ever writes y[0], skipping every other row.
struct FirstRowOnly;

impl DgemvKernel for FirstRowOnly {
    fn name(&self) -> &'static str {
        "first-row-only"
    }

    fn description(&self) -> &'static str {
        "Broken kernel that only updates y[0]."
    }

    fn dgemv(&self, n: usize, a: &[f64], x: &[f64], y: &mut [f64]) {
        if n == 0 {
            return;
        }
        for j in 0..n {
            y[0] += a[j] * x[j];
        }
    }
}

#[test]
fn test_sweep_reports_every_size_in_order() {
    let sizes = vec![16, 16, 5, 33, 64];
    let mut driver = seeded_driver(UnrolledKernel, sizes.clone(), 1);

    let reports = driver.run();

    assert_eq!(reports.len(), sizes.len());
    for (i, (report, &n)) in reports.iter().zip(&sizes).enumerate() {
        assert_eq!(report.index, i);
        assert_eq!(report.size(), n);
        assert!(report.passed(), "N={} failed: {:?}", n, report.mismatch);
    }
}

#[test]
fn test_warmup_flag_only_on_repeated_leading_size() {
    let mut driver = seeded_driver(ScalarKernel, vec![8, 8, 16], 2);
    let flags: Vec<bool> = driver.run().iter().map(|r| r.warmup).collect();
    assert_eq!(flags, vec![true, false, false]);

    let mut driver = seeded_driver(ScalarKernel, vec![8, 16, 16], 2);
    assert!(driver.run().iter().all(|r| !r.warmup));
}

#[test]
fn test_mismatch_is_reported_and_sweep_continues() {
    let sizes = vec![4, 9, 12];
    let mut driver = seeded_driver(FirstRowOnly, sizes, 3);

    let mut seen = Vec::new();
    driver.run_with(|r: &SizeReport| seen.push(r.clone()));

    assert_eq!(seen.len(), 3);
    for report in &seen {
        let mm = report.mismatch.expect("broken kernel must be caught");
        // y[0] is right, so the first bad element is y[1]
        assert_eq!(mm.index, 1);
        assert!(mm.diff() > 1e-5);
        assert!(report.to_string().contains("Accuracy: FAIL at y[1]"));
    }
}

#[test]
fn test_single_element_problem() {
    let mut driver = seeded_driver(ScalarKernel, vec![1], 4);
    let reports = driver.run();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].passed());
}

#[test]
fn test_largest_size_need_not_be_last() {
    let mut driver = seeded_driver(UnrolledKernel, vec![40, 7, 13], 5);
    assert!(driver.run().iter().all(SizeReport::passed));
}

#[test]
fn test_invalid_config_rejected_before_sweep() {
    let result = BenchmarkDriver::new(ScalarKernel, small_config(vec![]));
    assert!(matches!(result, Err(BenchError::InvalidConfig { .. })));

    let result = BenchmarkDriver::new(ScalarKernel, small_config(vec![8, 0]));
    assert!(matches!(result, Err(BenchError::InvalidConfig { .. })));
}

#[test]
fn test_unallocatable_workspace_is_fatal() {
    let result = BenchmarkDriver::new(ScalarKernel, small_config(vec![usize::MAX / 4]));
    assert!(matches!(result, Err(BenchError::Allocation { .. })));
}

#[test]
fn test_report_display() {
    let mut driver = seeded_driver(ScalarKernel, vec![32, 32], 6);
    let reports = driver.run();

    let first = reports[0].to_string();
    assert!(first.starts_with("N=32 (warm-up)"));
    assert!(first.contains("Elapsed time is :"));
    assert!(first.contains("Accuracy: PASS"));

    let second = reports[1].to_string();
    assert!(second.starts_with("N=32\n"));

    // Zero-duration timings render as indeterminate instead of inf
    let mut zero = reports[1].clone();
    zero.measurement = Measurement::new(32, Duration::ZERO, 204.8);
    let text = zero.to_string();
    assert!(text.contains("indeterminate"));
    assert!(!text.contains("inf"));
}
