use crate::domain::model::{CrewManifest, LocationReport, PassReport};
use chrono::{DateTime, Local};

/// Zone used when rendering epoch timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeDisplay {
    #[default]
    Utc,
    Local,
}

pub fn format_timestamp(timestamp: i64, display: TimeDisplay) -> String {
    let Some(utc) = DateTime::from_timestamp(timestamp, 0) else {
        return format!("{} (out of range)", timestamp);
    };

    match display {
        TimeDisplay::Utc => utc.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        TimeDisplay::Local => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S %:z")
            .to_string(),
    }
}

pub fn location_line(report: &LocationReport, display: TimeDisplay) -> String {
    format!(
        "The ISS current location at {} is (longitude {}, latitude {})",
        format_timestamp(report.timestamp, display),
        report.position.longitude,
        report.position.latitude
    )
}

/// Header from the echoed request, then one line per pass in server order.
pub fn pass_lines(report: &PassReport, display: TimeDisplay) -> Vec<String> {
    let request = &report.request;
    let mut lines = Vec::with_capacity(report.passes.len() + 2);
    lines.push(format!("The following {} passes", request.passes));
    lines.push(format!(
        "In ({},{}) at altitude {} will be:",
        request.latitude, request.longitude, request.altitude
    ));

    for pass in &report.passes {
        lines.push(format!(
            "\tStarting at {}, for {} seconds",
            format_timestamp(pass.rise_time, display),
            pass.duration
        ));
    }

    lines
}

pub fn crew_lines(manifest: &CrewManifest) -> Vec<String> {
    let mut lines = Vec::new();
    for (craft, names) in manifest.crafts() {
        lines.push(format!("Crew of the craft {}", craft));
        lines.extend(names.iter().map(|name| format!("\t* {}", name)));
    }
    lines
}
