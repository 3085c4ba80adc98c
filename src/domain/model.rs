use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, validate_required_field};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;

/// A number as the API wrote it. Positions arrive as strings (`"40.71"`),
/// echoed request values as JSON numbers (`-74.0`); both keep their text so
/// reports show exactly what the server used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawNumber")]
pub struct ApiNumber {
    text: String,
    value: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

impl TryFrom<RawNumber> for ApiNumber {
    type Error = String;

    fn try_from(raw: RawNumber) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawNumber::Number(n) => {
                let value = n
                    .as_f64()
                    .ok_or_else(|| format!("{} is not representable as a float", n))?;
                Ok(ApiNumber {
                    text: n.to_string(),
                    value,
                })
            }
            RawNumber::Text(s) => {
                let trimmed = s.trim();
                let value = trimmed
                    .parse::<f64>()
                    .map_err(|e| format!("'{}' is not a number: {}", s, e))?;
                Ok(ApiNumber {
                    text: trimmed.to_string(),
                    value,
                })
            }
        }
    }
}

impl ApiNumber {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ApiNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Position object of the current-location endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Position {
    pub latitude: ApiNumber,
    pub longitude: ApiNumber,
}

impl Position {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude.value(), self.longitude.value())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationReport {
    pub timestamp: i64,
    #[serde(rename = "iss_position")]
    pub position: Position,
}

/// Query for the pass-prediction endpoint. Starts from the required
/// coordinate; optional keys are only sent when set so the server applies
/// its own defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct PassRequest {
    coordinate: Coordinate,
    altitude: Option<f64>,
    passes: Option<u32>,
}

impl PassRequest {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            altitude: None,
            passes: None,
        }
    }

    /// Fails with `MissingParameter` when either half of the coordinate is
    /// absent and with `InvalidConfigValue` when it is NaN or infinite.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Result<Self> {
        let latitude = validate_finite("-lat", validate_required_field("-lat", latitude)?)?;
        let longitude = validate_finite("-long", validate_required_field("-long", longitude)?)?;
        Ok(Self::new(Coordinate::new(latitude, longitude)))
    }

    pub fn with_altitude(mut self, altitude: Option<f64>) -> Self {
        self.altitude = altitude;
        self
    }

    pub fn with_passes(mut self, passes: Option<u32>) -> Self {
        self.passes = passes;
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("lat", self.coordinate.latitude.to_string()),
            ("lon", self.coordinate.longitude.to_string()),
        ];
        if let Some(alt) = self.altitude {
            params.push(("alt", alt.to_string()));
        }
        if let Some(n) = self.passes {
            params.push(("n", n.to_string()));
        }
        params
    }
}

/// Request parameters as the server echoed them back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EchoedPassRequest {
    pub latitude: ApiNumber,
    pub longitude: ApiNumber,
    pub altitude: ApiNumber,
    pub passes: ApiNumber,
    #[serde(default)]
    pub datetime: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PassEvent {
    #[serde(rename = "risetime")]
    pub rise_time: i64,
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PassReport {
    pub request: EchoedPassRequest,
    #[serde(rename = "response", default)]
    pub passes: Vec<PassEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Astronaut {
    pub name: String,
    pub craft: String,
}

/// Crew grouped by craft. Crafts and members keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrewManifest {
    crews: IndexMap<String, Vec<String>>,
    reported_count: Option<u32>,
}

impl CrewManifest {
    pub fn from_astronauts<I>(astronauts: I) -> Self
    where
        I: IntoIterator<Item = Astronaut>,
    {
        let mut crews: IndexMap<String, Vec<String>> = IndexMap::new();
        for astronaut in astronauts {
            crews.entry(astronaut.craft).or_default().push(astronaut.name);
        }
        Self {
            crews,
            reported_count: None,
        }
    }

    pub fn with_reported_count(mut self, count: Option<u32>) -> Self {
        self.reported_count = count;
        self
    }

    /// Head-count the API claimed, which may disagree with the records it sent.
    pub fn reported_count(&self) -> Option<u32> {
        self.reported_count
    }

    /// `(reported, listed)` when the API's head-count disagrees with its records.
    pub fn count_mismatch(&self) -> Option<(u32, usize)> {
        let reported = self.reported_count()?;
        let listed = self.total_people();
        (reported as usize != listed).then_some((reported, listed))
    }

    pub fn crafts(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.crews
            .iter()
            .map(|(craft, names)| (craft.as_str(), names.as_slice()))
    }

    pub fn members(&self, craft: &str) -> Option<&[String]> {
        self.crews.get(craft).map(Vec::as_slice)
    }

    pub fn total_people(&self) -> usize {
        self.crews.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.crews.is_empty()
    }
}
