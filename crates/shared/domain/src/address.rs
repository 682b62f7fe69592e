//! Station address, map location and the profile completeness check.

use serde::{Deserialize, Serialize};

use crate::constants::{
    LABEL_BRAND, LABEL_CEP, LABEL_CITY, LABEL_DISTRICT, LABEL_LATITUDE, LABEL_LONGITUDE,
    LABEL_NUMBER, LABEL_STREET, LABEL_UF,
};

/// Postal address of a station.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Address {
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub cidade: String,
    /// Federative unit, e.g. "SP"
    #[serde(default)]
    pub uf: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complemento: Option<String>,
}

/// Map coordinates picked for a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Labels of the station profile fields still missing, in display order.
///
/// A station is ready for review only when this returns an empty list.
pub fn missing_station_fields(
    address: Option<&Address>,
    brand: Option<&str>,
    location: Option<&Location>,
) -> Vec<&'static str> {
    let mut missing = Vec::new();

    match address {
        Some(a) => {
            let fields = [
                (&a.cep, LABEL_CEP),
                (&a.logradouro, LABEL_STREET),
                (&a.numero, LABEL_NUMBER),
                (&a.bairro, LABEL_DISTRICT),
                (&a.cidade, LABEL_CITY),
                (&a.uf, LABEL_UF),
            ];
            missing.extend(
                fields
                    .into_iter()
                    .filter(|(value, _)| is_blank(value))
                    .map(|(_, label)| label),
            );
        }
        None => missing.extend([
            LABEL_CEP,
            LABEL_STREET,
            LABEL_NUMBER,
            LABEL_DISTRICT,
            LABEL_CITY,
            LABEL_UF,
        ]),
    }

    if brand.map_or(true, is_blank) {
        missing.push(LABEL_BRAND);
    }

    match location {
        Some(loc) => {
            if !loc.lat.is_finite() {
                missing.push(LABEL_LATITUDE);
            }
            if !loc.lng.is_finite() {
                missing.push(LABEL_LONGITUDE);
            }
        }
        None => missing.extend([LABEL_LATITUDE, LABEL_LONGITUDE]),
    }

    missing
}
