use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category a vehicle belongs to, as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    #[serde(rename = "AUTO")]
    Car,
    #[serde(rename = "MOTO")]
    Motorcycle,
    #[serde(rename = "CAMION")]
    Truck,
    #[serde(rename = "SUV")]
    Suv,
    #[serde(rename = "VAN")]
    Van,
}

impl VehicleKind {
    /// Returns the human-readable name shown in listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Motorcycle => "Motorcycle",
            VehicleKind::Truck => "Truck",
            VehicleKind::Suv => "SUV",
            VehicleKind::Van => "Van",
        }
    }
}

impl FromStr for VehicleKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUTO" => Ok(VehicleKind::Car),
            "MOTO" => Ok(VehicleKind::Motorcycle),
            "CAMION" => Ok(VehicleKind::Truck),
            "SUV" => Ok(VehicleKind::Suv),
            "VAN" => Ok(VehicleKind::Van),
            other => Err(CoreError::InvalidInput(
                "vehicle kind".to_string(),
                other.to_string(),
            )),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The grade of fuel purchased in a fill-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    Extra,
    Super,
    Ecopais,
    Diesel,
}

impl FromStr for FuelType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXTRA" => Ok(FuelType::Extra),
            "SUPER" => Ok(FuelType::Super),
            "ECOPAIS" => Ok(FuelType::Ecopais),
            "DIESEL" => Ok(FuelType::Diesel),
            other => Err(CoreError::InvalidInput(
                "fuel type".to_string(),
                other.to_string(),
            )),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FuelType::Extra => "Extra",
            FuelType::Super => "Super",
            FuelType::Ecopais => "Ecopais",
            FuelType::Diesel => "Diesel",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_type_parses_wire_codes() {
        assert_eq!("DIESEL".parse::<FuelType>().unwrap(), FuelType::Diesel);
        assert_eq!("ECOPAIS".parse::<FuelType>().unwrap(), FuelType::Ecopais);
        assert!("PREMIUM".parse::<FuelType>().is_err());
    }

    #[test]
    fn vehicle_kind_parses_wire_codes() {
        assert_eq!("MOTO".parse::<VehicleKind>().unwrap(), VehicleKind::Motorcycle);
        assert!("BICYCLE".parse::<VehicleKind>().is_err());
    }
}
