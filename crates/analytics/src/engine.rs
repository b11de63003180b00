use crate::report::{
    EfficiencyRating, FuelUsageSummary, MileageSample, MonthlyComparison, PlausibilityWarning,
    VehicleEfficiencyRanking, WarningLevel,
};
use chrono::{DateTime, Datelike, Utc};
use core_types::FuelLog;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

/// Mileage below this is flagged as likely bad data entry.
const PLAUSIBLE_MIN: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
/// Mileage above this is flagged as likely bad data entry.
const PLAUSIBLE_MAX: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// A stateless calculator for deriving efficiency metrics from fill-up history.
///
/// Every method is pure: inputs are read once, nothing is mutated, and no
/// method panics or errors on malformed data. Records that cannot contribute
/// to a metric (out-of-order odometer readings, non-positive volumes) are
/// excluded from aggregation rather than treated as zero.
#[derive(Debug, Default)]
pub struct FuelEfficiencyAnalyzer {}

impl FuelEfficiencyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a mileage sample from two fills presumed adjacent for the same
    /// vehicle, `current` being the more recent one.
    ///
    /// The volume consumed over the distance is the volume bought at the
    /// *earlier* fill: that is the fuel that was in the tank while the
    /// odometer advanced. Returns `None` when the distance or the volume is
    /// not positive, which covers out-of-order and corrupt records.
    pub fn pair_sample(&self, current: &FuelLog, previous: &FuelLog) -> Option<MileageSample> {
        if current.odometer <= previous.odometer {
            return None;
        }
        let distance = current.odometer - previous.odometer;

        let volume_consumed = previous.volume;
        if volume_consumed <= Decimal::ZERO {
            return None;
        }

        let efficiency = round2(Decimal::from(distance) / volume_consumed);
        Some(MileageSample {
            distance,
            volume_consumed,
            efficiency,
        })
    }

    /// km per gallon between two adjacent fills, rounded to 2 decimal places,
    /// or `None` when the pair is unusable.
    pub fn pair_mileage(&self, current: &FuelLog, previous: &FuelLog) -> Option<Decimal> {
        self.pair_sample(current, previous).map(|s| s.efficiency)
    }

    /// Average mileage over a collection of fills.
    ///
    /// The collection is sorted by odometer reading before pairing, so the
    /// result does not depend on input order. Unusable pairs are dropped from
    /// the mean, not counted as zero. Returns `None` when fewer than two
    /// records are given or no usable pair remains.
    ///
    /// Callers wanting a per-vehicle figure must prefilter by vehicle first;
    /// this method averages whatever collection it is handed.
    pub fn average_efficiency(&self, logs: &[FuelLog]) -> Option<Decimal> {
        let refs: Vec<&FuelLog> = logs.iter().collect();
        self.average_of(refs)
    }

    /// Average mileage for every vehicle in the collection.
    ///
    /// Vehicles with fewer than two usable fills are excluded entirely.
    /// `fill_count` is the vehicle's raw record count, not its pair count.
    /// Output order is unspecified; callers sort for display.
    pub fn per_vehicle_efficiency(&self, logs: &[FuelLog]) -> Vec<VehicleEfficiencyRanking> {
        let mut groups: HashMap<i64, Vec<&FuelLog>> = HashMap::new();
        for log in logs {
            groups.entry(log.vehicle_id()).or_default().push(log);
        }

        groups
            .into_iter()
            .filter_map(|(vehicle_id, group)| {
                let fill_count = group.len();
                self.average_of(group).map(|average_efficiency| {
                    VehicleEfficiencyRanking {
                        vehicle_id,
                        average_efficiency,
                        fill_count,
                    }
                })
            })
            .collect()
    }

    /// Buckets a mileage figure into the fixed display scale.
    ///
    /// Thresholds are inclusive lower bounds evaluated highest-first:
    /// ≥ 15 Excellent, ≥ 10 Good, ≥ 7 Fair, below that Low.
    pub fn classify(&self, value: Option<Decimal>) -> EfficiencyRating {
        let Some(value) = value else {
            return EfficiencyRating::NoData;
        };

        if value >= Decimal::from(15) {
            EfficiencyRating::Excellent
        } else if value >= Decimal::from(10) {
            EfficiencyRating::Good
        } else if value >= Decimal::from(7) {
            EfficiencyRating::Fair
        } else {
            EfficiencyRating::Low
        }
    }

    /// Flags mileage figures outside [3, 30] km/gal as suspect data entry.
    ///
    /// Purely advisory; the figure still participates in every other
    /// computation.
    pub fn check_plausibility(&self, value: Option<Decimal>) -> Option<PlausibilityWarning> {
        let value = value?;

        if value < PLAUSIBLE_MIN {
            return Some(PlausibilityWarning {
                message: "Mileage implausibly low. Verify the recorded data.",
                level: WarningLevel::Error,
            });
        }
        if value > PLAUSIBLE_MAX {
            return Some(PlausibilityWarning {
                message: "Mileage implausibly high. Verify the recorded data.",
                level: WarningLevel::Warning,
            });
        }
        None
    }

    /// Average efficiency of the calendar month containing `now` against the
    /// immediately preceding calendar month.
    ///
    /// `now` is injected rather than read from the system clock so the
    /// partitioning is testable; production callers pass `Utc::now()`.
    /// The January case rolls the previous month back to December of the
    /// prior year. `delta` is only present when both months have a value.
    pub fn monthly_comparison(&self, logs: &[FuelLog], now: DateTime<Utc>) -> MonthlyComparison {
        let current = (now.month(), now.year());
        let previous = if now.month() == 1 {
            (12, now.year() - 1)
        } else {
            (now.month() - 1, now.year())
        };

        let in_month = |target: (u32, i32)| -> Vec<&FuelLog> {
            logs.iter()
                .filter(|log| (log.date.month(), log.date.year()) == target)
                .collect()
        };

        let current_month = self.average_of(in_month(current));
        let previous_month = self.average_of(in_month(previous));

        let delta = match (current_month, previous_month) {
            (Some(cur), Some(prev)) => Some(round2(cur - prev)),
            _ => None,
        };

        MonthlyComparison {
            current_month,
            previous_month,
            delta,
        }
    }

    /// Total distance covered across the collection: the span between the
    /// smallest and largest odometer reading.
    ///
    /// A span rather than a sum of pair distances, so missing intermediate
    /// fills do not shrink it. Returns 0 for fewer than two records.
    pub fn total_distance(&self, logs: &[FuelLog]) -> u32 {
        if logs.len() < 2 {
            return 0;
        }
        let first = logs.iter().map(|log| log.odometer).min().unwrap_or(0);
        let last = logs.iter().map(|log| log.odometer).max().unwrap_or(0);
        last - first
    }

    /// Aggregate consumption figures for the collection, as shown on the
    /// statistics screen. A zeroed summary comes back for an empty collection.
    ///
    /// Volume and cost totals cover every fill. The efficiency figure only
    /// pairs full-tank fills: after a partial top-up the tank level is
    /// unknown, so the distance/volume ratio of such a pair is meaningless.
    pub fn usage_summary(&self, logs: &[FuelLog]) -> FuelUsageSummary {
        if logs.is_empty() {
            return FuelUsageSummary::empty();
        }

        let fill_count = logs.len();
        let total_volume: Decimal = logs.iter().map(|log| log.volume).sum();
        let total_cost: Decimal = logs.iter().map(|log| log.total_cost).sum();
        let count = Decimal::from(fill_count as u64);

        let full_tank_fills: Vec<&FuelLog> = logs.iter().filter(|log| log.full_tank).collect();

        FuelUsageSummary {
            fill_count,
            total_volume,
            total_cost,
            avg_volume: round2(total_volume / count),
            avg_cost: round2(total_cost / count),
            average_efficiency: self.average_of(full_tank_fills),
        }
    }

    /// Shared core of the averaging operations: sort by odometer, pair up
    /// consecutive fills, average the usable pair mileages.
    fn average_of(&self, mut logs: Vec<&FuelLog>) -> Option<Decimal> {
        if logs.len() < 2 {
            return None;
        }
        // Stable sort; records with equal readings keep their relative order.
        logs.sort_by_key(|log| log.odometer);

        let mileages: Vec<Decimal> = logs
            .windows(2)
            .filter_map(|pair| self.pair_mileage(pair[1], pair[0]))
            .collect();

        if mileages.is_empty() {
            return None;
        }

        let sum: Decimal = mileages.iter().sum();
        Some(round2(sum / Decimal::from(mileages.len() as u64)))
    }
}

/// Rounds to 2 decimal places with midpoints away from zero, so 26.665
/// becomes 26.67. Used for every figure the presentation layer receives.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
