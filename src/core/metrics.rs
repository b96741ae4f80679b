use super::state::Ticks;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("burst time of zero makes normalized turnaround undefined")]
    DivisionByZero,
}

/// Timing metrics derived once per process when it completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcMetrics {
    pub turnaround: Ticks,
    pub waiting: Ticks,
    pub normalized: f64,
}

/// Derive turnaround, waiting time, and normalized turnaround from a
/// completion time produced by a policy. Burst is the original burst,
/// never the remaining time.
pub fn derive(arrival: Ticks, burst: Ticks, completion: Ticks) -> Result<ProcMetrics, MetricsError> {
    if burst == 0 {
        return Err(MetricsError::DivisionByZero);
    }

    debug_assert!(
        completion >= arrival + burst,
        "Completion at {completion} before arrival {arrival} + burst {burst}"
    );

    let turnaround = completion - arrival;
    Ok(ProcMetrics {
        turnaround,
        waiting: turnaround - burst,
        normalized: turnaround as f64 / burst as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_reference_formulas() {
        let m = derive(2, 2, 7).unwrap();
        assert_eq!(m.turnaround, 5);
        assert_eq!(m.waiting, 3);
        assert!((m.normalized - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn process_that_never_waits_has_unit_normalized_turnaround() {
        let m = derive(4, 4, 8).unwrap();
        assert_eq!(m.turnaround, 4);
        assert_eq!(m.waiting, 0);
        assert!((m.normalized - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_burst_is_rejected() {
        assert_eq!(derive(0, 0, 5), Err(MetricsError::DivisionByZero));
    }
}
