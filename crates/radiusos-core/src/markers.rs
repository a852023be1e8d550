//! Map marker emission for the presentation layer.
//!
//! The map itself is rendered elsewhere; this module only decides where the
//! view is centred and what each pin says.

use std::io::Write;

use serde::Serialize;

use crate::facility::{Coordinates, FacilityRecord};

pub const DEFAULT_ZOOM: u8 = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

/// Builds a map view over the locatable records among `records`, each paired
/// with an optional distance. The centre is the mean latitude and longitude
/// of the markers.
///
/// Returns `None` when no record is locatable.
pub fn map_view<'a, I>(records: I) -> Option<MapView>
where
    I: IntoIterator<Item = (&'a FacilityRecord, Option<f64>)>,
{
    let markers: Vec<MapMarker> = records
        .into_iter()
        .filter_map(|(record, distance_miles)| {
            let coords = record.coordinates()?;
            Some(MapMarker {
                latitude: coords.latitude,
                longitude: coords.longitude,
                label: marker_label(record),
                distance_miles,
            })
        })
        .collect();

    if markers.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = markers.len() as f64;
    let center = Coordinates {
        latitude: markers.iter().map(|m| m.latitude).sum::<f64>() / count,
        longitude: markers.iter().map(|m| m.longitude).sum::<f64>() / count,
    };

    Some(MapView {
        center,
        zoom: DEFAULT_ZOOM,
        markers,
    })
}

/// Writes `view` as pretty-printed JSON for a map front end.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if writing to `writer` fails.
pub fn write_map_json<W: Write>(view: &MapView, writer: W) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, view)
}

fn marker_label(record: &FacilityRecord) -> String {
    match (&record.city, &record.state) {
        (Some(city), Some(state)) => format!("{}<br>{city}, {state}", record.name),
        _ => match &record.address {
            Some(address) if *address != record.name => {
                format!("{}<br>{address}", record.name)
            }
            _ => record.name.clone(),
        },
    }
}
