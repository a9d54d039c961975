use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    /// `logic`, or the browser the scenario ran in.
    pub target: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

impl ScenarioResult {
    /// Result of a single timed run, as produced by browser scenarios.
    #[must_use]
    pub fn single(
        scenario_name: &str,
        target: &str,
        duration: Duration,
        outcome: Result<(), String>,
    ) -> Self {
        let passed = outcome.is_ok();
        Self {
            scenario_name: scenario_name.to_string(),
            target: target.to_string(),
            passed,
            iterations_run: 1,
            successful_iterations: usize::from(passed),
            failures: outcome.err().into_iter().collect(),
            average_duration: duration,
            performance_data: vec![duration],
        }
    }
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    #[must_use]
    pub fn run_scenario(&self, scenario: &TestScenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name.bright_white());
        }

        let mut failures = Vec::new();
        let mut performance_data = Vec::with_capacity(iterations);
        for i in 0..iterations {
            let start = Instant::now();
            match (scenario.check)() {
                Ok(()) => {
                    let duration = start.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!("  ✅ Iteration {}/{iterations} passed ({duration:?})", i + 1);
                    }
                }
                Err(err) => {
                    let message = format!("iteration {}: {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            target: "logic".to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: performance_data.len(),
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S>(durations: &Vec<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Vec::<u64>::deserialize(deserializer)?;
        Ok(millis.into_iter().map(Duration::from_millis).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn passes() -> anyhow::Result<()> {
        Ok(())
    }

    fn fails() -> anyhow::Result<()> {
        bail!("font size drifted")
    }

    #[test]
    fn passing_scenario_counts_every_iteration() {
        let scenario = TestScenario::new("ok", passes);
        let result = LogicTester::new(false).run_scenario(&scenario, 3);
        assert!(result.passed);
        assert_eq!(result.successful_iterations, 3);
        assert_eq!(result.target, "logic");
    }

    #[test]
    fn failures_keep_iteration_numbers() {
        let scenario = TestScenario::new("broken", fails);
        let result = LogicTester::new(false).run_scenario(&scenario, 2);
        assert!(!result.passed);
        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[0].starts_with("iteration 1:"));
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn results_serialize_durations_as_millis() {
        let result = ScenarioResult::single("smoke", "chrome", Duration::from_millis(42), Ok(()));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 42);
        assert_eq!(json["performance_data"][0], 42);
    }
}
