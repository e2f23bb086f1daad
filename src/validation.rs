// SPDX-License-Identifier: AGPL-3.0-only

//! Validation harness for the convergence binaries.
//!
//! Follows the house pattern: hardcoded expected values with provenance,
//! explicit pass/fail checks, exit code 0 (all pass) or 1 (any fail), and a
//! machine-readable summary on stdout.

use std::process;

/// A single validation check with result tracking.
#[derive(Debug, Clone)]
pub struct Check {
    /// Human-readable label
    pub label: String,
    /// Whether this check passed
    pub passed: bool,
    /// Observed-vs-expected detail for the summary line
    pub detail: String,
}

/// Accumulates validation checks and produces a summary with exit code.
#[derive(Debug, Default)]
#[must_use]
pub struct ValidationHarness {
    /// Name of the validation binary
    pub name: String,
    /// All checks performed
    pub checks: Vec<Check>,
}

impl ValidationHarness {
    /// Create a new harness for a named validation binary.
    #[must_use = "validation harness must be used to run checks"]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: Vec::new(),
        }
    }

    /// Add a boolean pass/fail check.
    pub fn check_bool(&mut self, label: &str, passed: bool) {
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            detail: String::new(),
        });
    }

    /// Add a digit-count lower-bound check: observed ≥ required.
    pub fn check_digits(&mut self, label: &str, observed: usize, required: usize) {
        self.checks.push(Check {
            label: label.to_string(),
            passed: observed >= required,
            detail: format!("{observed} digits, required ≥ {required}"),
        });
    }

    /// Add an exact string comparison check.
    pub fn check_str(&mut self, label: &str, observed: &str, expected: &str) {
        let passed = observed == expected;
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            detail: if passed {
                "exact match".to_string()
            } else {
                format!("mismatch: got {observed:.32}…, expected {expected:.32}…")
            },
        });
    }

    /// Number of checks that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Total number of checks.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Whether all checks passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Print summary and exit with appropriate code.
    ///
    /// Exit 0 if all checks pass, exit 1 if any fails.
    pub fn finish(&self) -> ! {
        println!();
        println!(
            "═══ {} validation: {}/{} checks passed ═══",
            self.name,
            self.passed_count(),
            self.total_count()
        );

        for check in &self.checks {
            let icon = if check.passed { "✓" } else { "✗" };
            if check.detail.is_empty() {
                println!("  {icon} {}", check.label);
            } else {
                println!("  {icon} {}: {}", check.label, check.detail);
            }
        }

        if self.all_passed() {
            println!("ALL CHECKS PASSED");
            process::exit(0);
        } else {
            let failed: Vec<&str> = self
                .checks
                .iter()
                .filter(|c| !c.passed)
                .map(|c| c.label.as_str())
                .collect();
            println!("FAILED CHECKS: {}", failed.join(", "));
            process::exit(1);
        }
    }
}
