use crate::enums::{FuelType, VehicleKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A registered vehicle, as returned by the vehicles endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub plate: String,
    pub kind: VehicleKind,
    /// Last known cumulative odometer reading, in km.
    pub current_odometer: u32,
    /// Tank capacity in gallons.
    pub tank_capacity: Decimal,
    pub color: Option<String>,
    pub active: bool,
}

impl Vehicle {
    /// The name shown in rankings and detail headers.
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.plate)
    }
}

/// The backend returns either a raw vehicle id or the embedded vehicle
/// object, depending on the endpoint. This union normalizes both shapes at
/// the deserialization boundary so downstream code only deals in ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleRef {
    Embedded(Vehicle),
    Id(i64),
}

impl VehicleRef {
    /// The canonical vehicle id, regardless of which shape was received.
    pub fn id(&self) -> i64 {
        match self {
            VehicleRef::Embedded(vehicle) => vehicle.id,
            VehicleRef::Id(id) => *id,
        }
    }

    /// The embedded vehicle, when the endpoint resolved it.
    pub fn vehicle(&self) -> Option<&Vehicle> {
        match self {
            VehicleRef::Embedded(vehicle) => Some(vehicle),
            VehicleRef::Id(_) => None,
        }
    }
}

/// One fuel fill-up record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelLog {
    pub id: i64,
    pub vehicle: VehicleRef,
    pub date: DateTime<Utc>,
    /// Cumulative odometer reading at the time of the fill, in km.
    /// Non-decreasing per vehicle in well-formed data.
    pub odometer: u32,
    /// Gallons purchased. Must be > 0 to be usable in efficiency math.
    pub volume: Decimal,
    pub unit_price: Decimal,
    pub total_cost: Decimal,
    pub fuel_type: FuelType,
    pub station: Option<String>,
    pub full_tank: bool,
    pub notes: Option<String>,
}

impl FuelLog {
    pub fn vehicle_id(&self) -> i64 {
        self.vehicle.id()
    }
}

/// A fuel-log listing as served over the wire: either a plain array or the
/// paginated envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FuelLogPage {
    Paginated {
        count: usize,
        next: Option<String>,
        previous: Option<String>,
        results: Vec<FuelLog>,
    },
    Plain(Vec<FuelLog>),
}

impl FuelLogPage {
    /// Flattens either wire shape into the record list.
    pub fn into_logs(self) -> Vec<FuelLog> {
        match self {
            FuelLogPage::Paginated { results, .. } => results,
            FuelLogPage::Plain(logs) => logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_log_json(vehicle: &str) -> String {
        format!(
            r#"{{
                "id": 7,
                "vehicle": {vehicle},
                "date": "2025-06-14T09:30:00Z",
                "odometer": 40500,
                "volume": "10.00",
                "unit_price": "2.45",
                "total_cost": "24.50",
                "fuel_type": "EXTRA",
                "station": null,
                "full_tank": true,
                "notes": null
            }}"#
        )
    }

    #[test]
    fn vehicle_ref_accepts_raw_id() {
        let log: FuelLog = serde_json::from_str(&sample_log_json("3")).unwrap();
        assert_eq!(log.vehicle_id(), 3);
        assert!(log.vehicle.vehicle().is_none());
        assert_eq!(log.volume, dec!(10.00));
    }

    #[test]
    fn vehicle_ref_accepts_embedded_object() {
        let vehicle = r#"{
            "id": 3,
            "make": "Toyota",
            "model": "Hilux",
            "year": 2019,
            "plate": "PBX-1234",
            "kind": "CAMION",
            "current_odometer": 41200,
            "tank_capacity": "21.00",
            "color": null,
            "active": true
        }"#;
        let log: FuelLog = serde_json::from_str(&sample_log_json(vehicle)).unwrap();
        assert_eq!(log.vehicle_id(), 3);
        let resolved = log.vehicle.vehicle().unwrap();
        assert_eq!(resolved.display_name(), "Toyota Hilux (PBX-1234)");
        assert_eq!(resolved.kind, VehicleKind::Truck);
    }

    #[test]
    fn page_flattens_both_wire_shapes() {
        let plain = format!("[{}]", sample_log_json("3"));
        let page: FuelLogPage = serde_json::from_str(&plain).unwrap();
        assert_eq!(page.into_logs().len(), 1);

        let paginated = format!(
            r#"{{"count": 1, "next": null, "previous": null, "results": [{}]}}"#,
            sample_log_json("3")
        );
        let page: FuelLogPage = serde_json::from_str(&paginated).unwrap();
        assert_eq!(page.into_logs().len(), 1);
    }
}
