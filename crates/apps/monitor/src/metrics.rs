//! Synthetic system metrics and the bounded sample history behind the monitor charts.

use std::collections::VecDeque;

use desktop_app_contract::{ClockSnapshot, Entropy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSample {
    pub time_label: String,
    /// Percent, 20..=49.
    pub cpu: u32,
    /// Percent, 30..=69.
    pub memory: u32,
    /// Percent, 10..=29.
    pub disk: u32,
    /// MB/s, 10..=59.
    pub network: u32,
    /// Degrees Celsius, 45..=64.
    pub temperature: u32,
}

pub fn sample_metrics(entropy: &mut impl Entropy, now: ClockSnapshot) -> MetricsSample {
    MetricsSample {
        time_label: now.time_label(),
        cpu: entropy.below(30) + 20,
        memory: entropy.below(40) + 30,
        disk: entropy.below(20) + 10,
        network: entropy.below(50) + 10,
        temperature: entropy.below(20) + 45,
    }
}

/// Network gauge fill; readings above 100 MB/s pin the bar.
pub fn network_gauge_percent(network: u32) -> u32 {
    network.min(100)
}

/// Temperature gauge fill, scaled so 30 C is empty and 80 C is full.
pub fn temperature_gauge_percent(temperature: u32) -> u32 {
    (temperature.saturating_sub(30) * 2).min(100)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Most recent samples, oldest first, never longer than `capacity`.
pub struct MetricsHistory {
    samples: VecDeque<MetricsSample>,
    capacity: usize,
}

impl MetricsHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, sample: MetricsSample) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn latest(&self) -> Option<&MetricsSample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn series(&self, pick: impl Fn(&MetricsSample) -> u32) -> Vec<u32> {
        self.samples.iter().map(pick).collect()
    }
}

/// SVG polyline points for a 0..=100 series drawn into a `width` x `height` box.
pub fn chart_points(values: &[u32], width: u32, height: u32) -> String {
    let step = match values.len() {
        0 | 1 => 0.0,
        n => f64::from(width) / (n - 1) as f64,
    };
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = step * idx as f64;
            let y = f64::from(height) * (1.0 - f64::from((*value).min(100)) / 100.0);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ScriptedEntropy;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample(cpu: u32) -> MetricsSample {
        MetricsSample {
            time_label: format!("00:00:{cpu:02}"),
            cpu,
            memory: 40,
            disk: 15,
            network: 20,
            temperature: 50,
        }
    }

    #[test]
    fn samples_stay_in_documented_ranges() {
        let mut low = ScriptedEntropy::new([0.0]);
        let mut high = ScriptedEntropy::new([1.0]);
        let now = ClockSnapshot::at_unix_ms(0);

        let floor = sample_metrics(&mut low, now);
        let ceiling = sample_metrics(&mut high, now);

        assert_eq!(
            (floor.cpu, floor.memory, floor.disk, floor.network, floor.temperature),
            (20, 30, 10, 10, 45)
        );
        assert_eq!(
            (
                ceiling.cpu,
                ceiling.memory,
                ceiling.disk,
                ceiling.network,
                ceiling.temperature
            ),
            (49, 69, 29, 59, 64)
        );
        assert_eq!(floor.time_label, "00:00:00");
    }

    #[test]
    fn history_keeps_only_the_newest_samples() {
        let mut history = MetricsHistory::new(3);
        for cpu in 20..26 {
            history.push(sample(cpu));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.series(|s| s.cpu), vec![23, 24, 25]);
        assert_eq!(history.latest().map(|s| s.cpu), Some(25));
    }

    #[test]
    fn zero_capacity_still_keeps_latest() {
        let mut history = MetricsHistory::new(0);
        history.push(sample(20));
        history.push(sample(21));
        assert_eq!(history.series(|s| s.cpu), vec![21]);
    }

    #[test]
    fn gauges_clamp_to_full_bar() {
        assert_eq!(temperature_gauge_percent(45), 30);
        assert_eq!(temperature_gauge_percent(20), 0);
        assert_eq!(temperature_gauge_percent(95), 100);
        assert_eq!(network_gauge_percent(140), 100);
    }

    #[test]
    fn chart_points_span_the_box() {
        assert_eq!(chart_points(&[0, 50, 100], 100, 40), "0.0,40.0 50.0,20.0 100.0,0.0");
        assert_eq!(chart_points(&[], 100, 40), "");
    }
}
