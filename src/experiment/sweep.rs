use crate::*;

/// `n` evenly spaced points from `lo` to `hi`, both ends included.
pub fn linspace(lo: Utility, hi: Utility, n: usize) -> Vec<Utility> {
    match n {
        0 => vec![],
        1 => vec![lo],
        _ => (0..n)
            .map(|i| lo + (hi - lo) * i as Utility / (n - 1) as Utility)
            .collect(),
    }
}

/// The default aspiration grid for SRE-vs-aspiration curves.
pub fn aspirations() -> Vec<Utility> {
    linspace(SWEEP_ASPIRATION_MIN, SWEEP_ASPIRATION_MAX, SWEEP_POINTS)
}

impl Experiment {
    /// Rerun this experiment at every initial aspiration and
    /// report the mutual cooperation rate reached at `measure`.
    pub fn sweep(
        &self,
        aspirations: &[Utility],
        measure: Measure,
        threshold: Probability,
    ) -> Result<Vec<(Utility, Probability)>> {
        aspirations
            .iter()
            .map(|&aspiration| -> Result<(Utility, Probability)> {
                let rate = self
                    .with_aspiration(aspiration)?
                    .run()?
                    .mutual_cooperation_rate(Action::Cooperate, threshold, measure)?;
                log::info!("{:<24} A0 {:>6.3}  SRE {:.4}", self.label(), aspiration, rate);
                Ok((aspiration, rate))
            })
            .collect()
    }
}
