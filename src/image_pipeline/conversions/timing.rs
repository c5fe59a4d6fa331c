use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;

/// Timed stages of a grayscale conversion, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    ReadInputFile,
    ParsePpm,
    ValidateDimensions,
    Grayscale,
    CreateOutputFile,
    EncodePpm,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::ReadInputFile => "read_input_file",
            Stage::ParsePpm => "parse_ppm",
            Stage::ValidateDimensions => "validate_dimensions",
            Stage::Grayscale => "grayscale",
            Stage::CreateOutputFile => "create_output_file",
            Stage::EncodePpm => "encode_ppm",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StepTiming {
    pub stage: Stage,
    pub duration: Duration,
}

/// Ordered record of how long each pipeline stage took.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    totals: HashMap<Stage, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a stage. A stage recorded twice is summed in [`get_step`](Self::get_step).
    pub fn add_step(&mut self, stage: Stage, duration: Duration) {
        *self.totals.entry(stage).or_insert(Duration::ZERO) += duration;
        self.steps.push(StepTiming { stage, duration });
    }

    /// Stops `timer` and records its stage.
    pub fn record(&mut self, timer: Timer) {
        let (stage, duration) = timer.stop();
        self.add_step(stage, duration);
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, stage: Stage) -> Option<Duration> {
        self.totals.get(&stage).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        self.steps.iter().map(|s| s.stage)
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            let percentage = if total.is_zero() {
                0.0
            } else {
                step.duration.as_secs_f64() / total.as_secs_f64() * 100.0
            };
            info!(
                "{:<22} {:>10} us ({:>5.1}%)",
                step.stage,
                step.duration.as_micros(),
                percentage
            );
        }
        info!("{:<22} {:>10} us", "total", total.as_micros());
    }
}

/// Measures one [`Stage`] from `start` until `stop`.
pub struct Timer {
    stage: Stage,
    started: Instant,
}

impl Timer {
    pub fn start(stage: Stage) -> Self {
        Self {
            stage,
            started: Instant::now(),
        }
    }

    pub fn stop(self) -> (Stage, Duration) {
        (self.stage, self.started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_keep_order_and_sum_by_stage() {
        let mut timings = PipelineTimings::new();
        timings.add_step(Stage::ParsePpm, Duration::from_micros(30));
        timings.add_step(Stage::Grayscale, Duration::from_micros(10));
        timings.add_step(Stage::ParsePpm, Duration::from_micros(5));

        let stages: Vec<Stage> = timings.stages().collect();
        assert_eq!(stages, [Stage::ParsePpm, Stage::Grayscale, Stage::ParsePpm]);
        assert_eq!(timings.get_step(Stage::ParsePpm), Some(Duration::from_micros(35)));
        assert_eq!(timings.get_step(Stage::EncodePpm), None);
        assert_eq!(timings.total_duration(), Duration::from_micros(45));
    }

    #[test]
    fn test_timer_records_its_stage() {
        let mut timings = PipelineTimings::new();
        timings.record(Timer::start(Stage::Grayscale));

        assert_eq!(timings.steps().len(), 1);
        assert!(timings.get_step(Stage::Grayscale).is_some());
    }

    #[test]
    fn test_stage_names_match_log_labels() {
        assert_eq!(Stage::ReadInputFile.to_string(), "read_input_file");
        assert_eq!(Stage::EncodePpm.name(), "encode_ppm");
    }
}
