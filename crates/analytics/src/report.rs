use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The efficiency derived from exactly two consecutive fills of one vehicle.
///
/// Ephemeral: produced during a calculation pass and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MileageSample {
    /// Distance covered between the two odometer readings, in km.
    pub distance: u32,
    /// Gallons consumed to cover it (the volume bought at the earlier fill).
    pub volume_consumed: Decimal,
    /// km per gallon, rounded to 2 decimal places.
    pub efficiency: Decimal,
}

/// One vehicle's average efficiency, for ranking displays.
///
/// Only vehicles with at least two usable fills produce a ranking entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleEfficiencyRanking {
    pub vehicle_id: i64,
    pub average_efficiency: Decimal,
    /// Number of fill records for the vehicle, not the number of valid pairs.
    pub fill_count: usize,
}

/// Qualitative bucket for a mileage figure. Ordering follows severity, so
/// `Low < Fair < Good < Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EfficiencyRating {
    NoData,
    Low,
    Fair,
    Good,
    Excellent,
}

impl EfficiencyRating {
    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyRating::NoData => "No data",
            EfficiencyRating::Low => "Low",
            EfficiencyRating::Fair => "Fair",
            EfficiencyRating::Good => "Good",
            EfficiencyRating::Excellent => "Excellent",
        }
    }

    /// Hex color token used by the cards and the dashboard gauge.
    pub fn color(&self) -> &'static str {
        match self {
            EfficiencyRating::NoData => "#888888",
            EfficiencyRating::Low => "#ef4444",
            EfficiencyRating::Fair => "#f59e0b",
            EfficiencyRating::Good => "#3b82f6",
            EfficiencyRating::Excellent => "#22c55e",
        }
    }

    /// Icon token from the app's icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            EfficiencyRating::NoData => "help-circle",
            EfficiencyRating::Low => "alert-triangle",
            EfficiencyRating::Fair => "alert-circle",
            EfficiencyRating::Good => "thumbs-up",
            EfficiencyRating::Excellent => "star",
        }
    }
}

/// How suspicious an implausible mileage figure is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningLevel {
    Warning,
    Error,
}

/// Advisory notice that a computed mileage looks like bad data entry.
/// Never blocks a computation or a caller flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlausibilityWarning {
    pub message: &'static str,
    pub level: WarningLevel,
}

/// Current calendar month's average efficiency against the previous month's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyComparison {
    pub current_month: Option<Decimal>,
    pub previous_month: Option<Decimal>,
    /// current − previous, 2 decimal places; `None` unless both months have a value.
    pub delta: Option<Decimal>,
}

/// Aggregate consumption figures for a fuel-log collection, mirroring the
/// backend's statistics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelUsageSummary {
    pub fill_count: usize,
    pub total_volume: Decimal,
    pub total_cost: Decimal,
    pub avg_volume: Decimal,
    pub avg_cost: Decimal,
    pub average_efficiency: Option<Decimal>,
}

impl FuelUsageSummary {
    /// A zeroed summary, returned for an empty collection.
    pub fn empty() -> Self {
        Self {
            fill_count: 0,
            total_volume: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            avg_volume: Decimal::ZERO,
            avg_cost: Decimal::ZERO,
            average_efficiency: None,
        }
    }
}

/// Formats a mileage figure for display, e.g. `"26.67 km/gal"` or `"N/A"`.
pub fn format_mileage(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{v} km/gal"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rating_severity_is_ordered() {
        assert!(EfficiencyRating::Low < EfficiencyRating::Fair);
        assert!(EfficiencyRating::Fair < EfficiencyRating::Good);
        assert!(EfficiencyRating::Good < EfficiencyRating::Excellent);
    }

    #[test]
    fn mileage_formatting() {
        assert_eq!(format_mileage(Some(dec!(26.67))), "26.67 km/gal");
        assert_eq!(format_mileage(None), "N/A");
    }
}
