use crate::*;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Address of one persisted array: which agent, which metric, which parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    agent: usize,
    metric: Metric,
    label: String,
}

impl Artifact {
    pub fn new(agent: usize, metric: Metric, experiment: &Experiment) -> Self {
        Self {
            agent,
            metric,
            label: experiment.label(),
        }
    }
    /// Every artifact written for one experiment.
    pub fn all(experiment: &Experiment) -> Vec<Self> {
        (0..N)
            .flat_map(|agent| Metric::all().map(|metric| Self::new(agent, metric, experiment)))
            .collect()
    }
    pub fn name(&self) -> String {
        format!("agent_{}_{}_{}.json", self.agent, self.metric, self.label)
    }
    pub fn path(&self, dir: &Path) -> PathBuf {
        dir.join(self.name())
    }
    /// Whether this artifact already exists under `dir`.
    pub fn done(&self, dir: &Path) -> bool {
        std::fs::metadata(self.path(dir)).is_ok()
    }
    /// Write this artifact's slice of `ensemble`.
    pub fn save(&self, dir: &Path, ensemble: &Ensemble) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = self.path(dir);
        let ref mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut *writer, &ensemble.series(self.agent, self.metric))?;
        writer.flush()?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }
    pub fn load(&self, dir: &Path) -> Result<Vec<Vec<f64>>> {
        load(self.path(dir))
    }
}

/// Persist every (agent, metric) artifact of `ensemble`.
pub fn save(dir: &Path, experiment: &Experiment, ensemble: &Ensemble) -> Result<Vec<PathBuf>> {
    Artifact::all(experiment)
        .iter()
        .map(|artifact| artifact.save(dir, ensemble))
        .collect()
}

/// Whether every artifact and the summary of `experiment` already exist under `dir`.
pub fn saved(dir: &Path, experiment: &Experiment) -> bool {
    Artifact::all(experiment).iter().all(|artifact| artifact.done(dir))
        && std::fs::metadata(summary_path(dir, experiment)).is_ok()
}

/// Read back one artifact, repetition × episode.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Persist a run's summary next to its artifacts.
pub fn save_summary(dir: &Path, summary: &Summary) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = summary_path(dir, &summary.experiment);
    let ref mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writer.flush()?;
    Ok(path)
}

fn summary_path(dir: &Path, experiment: &Experiment) -> PathBuf {
    dir.join(format!("summary_{}.json", experiment.label()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bush-mosteller-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn names_encode_agent_metric_and_parameters() {
        let experiment = "PD fear 0 2 0.5 10 20".parse::<Experiment>().unwrap();
        let artifact = Artifact::new(1, Metric::Aspiration, &experiment);
        assert_eq!(artifact.name(), "agent_1_asp_PD_fear_0_2_0.5_10_20_p0.5_s24301.json");
        assert_eq!(Artifact::all(&experiment).len(), N * Metric::all().len());
    }

    #[test]
    fn saved_series_load_back() {
        let dir = scratch("roundtrip");
        let experiment = "CH classic 0.1 2 0.5 6 15".parse::<Experiment>().unwrap();
        let ensemble = experiment.run().unwrap();
        let paths = save(&dir, &experiment, &ensemble).unwrap();
        assert_eq!(paths.len(), N * Metric::all().len());
        for artifact in Artifact::all(&experiment) {
            assert!(artifact.done(&dir));
        }
        let artifact = Artifact::new(0, Metric::Probability(Action::Cooperate), &experiment);
        let loaded = artifact.load(&dir).unwrap();
        assert_eq!(loaded.len(), 6);
        assert!(loaded.iter().all(|row| row.len() == 15));
        assert_eq!(loaded, ensemble.series(0, Metric::Probability(Action::Cooperate)));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn summary_is_written() {
        let dir = scratch("summary");
        let experiment = "PD classic 0 2 0.5 4 8".parse::<Experiment>().unwrap();
        let ensemble = experiment.run().unwrap();
        let summary = Summary::new(&experiment, &ensemble, Measure::Last, SRE_THRESHOLD).unwrap();
        let path = save_summary(&dir, &summary).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        let back = serde_json::from_str::<Summary>(&text).unwrap();
        assert_eq!(back, summary);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn saved_requires_every_file() {
        let dir = scratch("saved");
        let experiment = "SG fear 0 2 0.5 3 5".parse::<Experiment>().unwrap();
        assert!(!saved(&dir, &experiment));
        let ensemble = experiment.run().unwrap();
        save(&dir, &experiment, &ensemble).unwrap();
        assert!(!saved(&dir, &experiment));
        let summary = Summary::new(&experiment, &ensemble, Measure::Last, SRE_THRESHOLD).unwrap();
        save_summary(&dir, &summary).unwrap();
        assert!(saved(&dir, &experiment));
        assert!(!saved(&dir, &experiment.with_seed(1)));
        std::fs::remove_file(Artifact::new(1, Metric::Stimulus, &experiment).path(&dir)).unwrap();
        assert!(!saved(&dir, &experiment));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let dir = scratch("missing");
        assert!(matches!(load(dir.join("nope.json")), Err(Error::Io(_))));
    }
}
