//! Outcome of a rewrite pass

/// Counters collected over a single pass. `updates` is the total number of
/// upload parameters encountered, whether their path came from the table
/// (`matched`) or the fallback (`defaulted`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub updates: usize,
    pub matched: usize,
    pub defaulted: usize,
}

impl RewriteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_match(&mut self) {
        self.updates += 1;
        self.matched += 1;
    }

    pub(crate) fn record_default(&mut self) {
        self.updates += 1;
        self.defaulted += 1;
    }
}

/// Render the post-run summary banner. `unmatched` is empty on a successful
/// pass; on a mismatch it lists the residual table names.
pub fn format_summary(updates: usize, unmatched: &[String]) -> String {
    let mut summary = String::new();
    summary.push_str("##########################################\n");
    summary.push_str("Summary\n");
    summary.push_str("##########################################\n");
    summary.push_str(&format!("Total replacements: {}\n", updates));
    summary.push_str(&format!("Unmatched replacements: {}\n", unmatched.len()));

    for name in unmatched {
        summary.push_str(&format!("\t{}\n", name));
    }
    summary.push_str("##########################################\n");

    summary
}
