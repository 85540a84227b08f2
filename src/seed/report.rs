use tracing::info;

use super::Domain;

/// Outcome of one domain's seeding run.
///
/// Master-data rows are either created or skipped (already present); ledger
/// rows are always appended. The counts reflect that asymmetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub domain: Domain,
    /// Master rows inserted this run
    pub created: usize,
    /// Master rows already present and left untouched
    pub skipped: usize,
    /// Ledger rows appended this run
    pub appended: usize,
}

impl SeedReport {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            created: 0,
            skipped: 0,
            appended: 0,
        }
    }

    /// One progress line per created record, for operator visibility.
    pub fn note_created(&mut self, entity: &str, key: &str) {
        info!(domain = %self.domain, "  + created {} {}", entity, key);
        self.created += 1;
    }

    pub fn note_skipped(&mut self, entity: &str, key: &str) {
        info!(domain = %self.domain, "  = {} {} already present, left untouched", entity, key);
        self.skipped += 1;
    }

    pub fn note_appended(&mut self, entity: &str, key: &str) {
        info!(domain = %self.domain, "  + appended {} for {}", entity, key);
        self.appended += 1;
    }
}

/// Aggregate outcome of a full `run_all`.
#[derive(Debug, Default)]
pub struct OverallReport {
    pub reports: Vec<SeedReport>,
}

impl OverallReport {
    pub fn push(&mut self, report: SeedReport) {
        self.reports.push(report);
    }

    pub fn total_created(&self) -> usize {
        self.reports.iter().map(|r| r.created).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.reports.iter().map(|r| r.skipped).sum()
    }

    pub fn total_appended(&self) -> usize {
        self.reports.iter().map(|r| r.appended).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_accumulate() {
        let mut report = SeedReport::new(Domain::Inventory);
        report.note_created("product", "prod-001");
        report.note_created("supplier", "sup-001");
        report.note_skipped("product", "prod-002");
        report.note_appended("stock_movement", "prod-001");
        assert_eq!(report.created, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.appended, 1);
    }

    #[test]
    fn overall_totals_span_domains() {
        let mut overall = OverallReport::default();
        let mut a = SeedReport::new(Domain::Auth);
        a.note_created("clinic", "clinic-001");
        let mut b = SeedReport::new(Domain::Hr);
        b.note_skipped("employee", "emp-001");
        overall.push(a);
        overall.push(b);
        assert_eq!(overall.total_created(), 1);
        assert_eq!(overall.total_skipped(), 1);
        assert_eq!(overall.total_appended(), 0);
    }
}
