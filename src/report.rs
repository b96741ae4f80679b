use crate::core::state::{Process, Ticks};
use average::{Estimate, Mean};
use std::fmt::Write as _;

/// One process's share of the reporting contract, in arrival-sorted order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub completion: Ticks,
    pub turnaround: Ticks,
    pub waiting: Ticks,
    pub normalized: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub mean_turnaround: f64,
    pub mean_normalized: f64,
    /// Maximum completion time; right edge of the timeline.
    pub last_instant: Ticks,
}

impl Report {
    pub fn new(procs: &[Process]) -> Self {
        let rows: Vec<ReportRow> = procs
            .iter()
            .map(|proc| {
                let metrics = proc
                    .metrics
                    .as_ref()
                    .expect("Report requires a completed simulation");
                ReportRow {
                    name: proc.name.clone(),
                    arrival: proc.arrival,
                    burst: proc.burst,
                    completion: proc
                        .completion
                        .expect("Completed process must have a completion time"),
                    turnaround: metrics.turnaround,
                    waiting: metrics.waiting,
                    normalized: metrics.normalized,
                }
            })
            .collect();

        let (mean_turnaround, mean_normalized) = if rows.is_empty() {
            (0.0, 0.0)
        } else {
            (
                avg(rows.iter().map(|row| row.turnaround as f64)),
                avg(rows.iter().map(|row| row.normalized)),
            )
        };
        let last_instant = rows.iter().map(|row| row.completion).max().unwrap_or(0);

        Self {
            rows,
            mean_turnaround,
            mean_normalized,
            last_instant,
        }
    }

    /// Row-major statistics table; the mean is appended to the turnaround
    /// and normalized-turnaround rows.
    pub fn render_stats(&self) -> String {
        let mut out = String::new();

        out.push_str("P_ID     |");
        for row in &self.rows {
            let _ = write!(out, " {} |", row.name);
        }
        out.push_str("\nAT       |");
        for row in &self.rows {
            let _ = write!(out, "{:>3} |", row.arrival);
        }
        out.push_str("\nBT       |");
        for row in &self.rows {
            let _ = write!(out, "{:>3} |", row.burst);
        }
        out.push_str("\nCT       |");
        for row in &self.rows {
            let _ = write!(out, "{:>3} |", row.completion);
        }
        out.push_str("\nTAT      |");
        for row in &self.rows {
            let _ = write!(out, "{:>3} |", row.turnaround);
        }
        let _ = write!(out, "{:.2} |", self.mean_turnaround);
        out.push_str("\nWT       |");
        for row in &self.rows {
            let _ = write!(out, "{:>3} |", row.waiting);
        }
        out.push_str("\nNT       |");
        for row in &self.rows {
            let _ = write!(out, "{:>4.2} |", row.normalized);
        }
        let _ = writeln!(out, "{:.2} |", self.mean_normalized);

        out
    }

    /// Timeline marking each process's arrival-to-completion span against a
    /// tick ruler printed modulo 10.
    pub fn render_timeline(&self) -> String {
        let mut out = String::new();

        for instant in 0..=self.last_instant {
            let _ = write!(out, "{} ", instant % 10);
        }
        out.push_str("\n------------------------------------------------\n");
        for row in &self.rows {
            let _ = write!(out, "{}     |", row.name);
            for instant in 0..self.last_instant {
                if instant >= row.arrival && instant < row.completion {
                    out.push_str("*|");
                } else {
                    out.push_str(" |");
                }
            }
            out.push('\n');
        }
        out.push_str("------------------------------------------------\n");

        out
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{simulate, PolicyKind};
    use crate::sim::workload;

    #[test]
    fn report_exposes_means_and_timeline_edge() {
        let procs = simulate(PolicyKind::Fcfs, workload::demo_set()).unwrap();
        let report = Report::new(&procs);

        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.last_instant, 16);
        // Turnarounds 2, 5, 5, 9, 12
        assert!((report.mean_turnaround - 6.6).abs() < 1e-9);
        assert!(report.mean_normalized > 0.0);
    }

    #[test]
    fn empty_process_set_yields_empty_report() {
        let procs = simulate(PolicyKind::Fcfs, Vec::new()).unwrap();
        let report = Report::new(&procs);

        assert!(report.rows.is_empty());
        assert_eq!(report.mean_turnaround, 0.0);
        assert_eq!(report.mean_normalized, 0.0);
        assert_eq!(report.last_instant, 0);
    }

    #[test]
    fn stats_table_carries_one_column_per_process() {
        let procs = simulate(PolicyKind::Fcfs, workload::demo_set()).unwrap();
        let report = Report::new(&procs);
        let stats = report.render_stats();

        let header = stats.lines().next().unwrap();
        assert_eq!(header.matches('|').count(), 6);
        assert!(stats.contains("6.60 |"));
    }
}
