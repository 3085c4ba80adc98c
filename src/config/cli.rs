use crate::app::commands::Command;
use crate::config::toml_config::TomlConfig;
use crate::config::ClientSettings;
use crate::core::TimeDisplay;
use crate::domain::model::PassRequest;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, Validate};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "iss-tracker")]
#[command(about = "Show where the ISS is, when it passes overhead, and who is in space")]
pub struct CliArgs {
    /// Print the current location of the ISS
    #[arg(long)]
    pub loc: bool,

    /// Print, for each craft, the people currently in space
    #[arg(long)]
    pub people: bool,

    /// Print the passing details of the ISS for a given location (needs -lat and -long)
    #[arg(long)]
    pub pass: bool,

    /// Latitude
    #[arg(long = "lat", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude
    #[arg(long = "long", visible_alias = "lon", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Altitude in meters
    #[arg(long = "alt", allow_negative_numbers = true)]
    pub alt: Option<f64>,

    /// Number of passes
    #[arg(short = 'n')]
    pub passes: Option<u32>,

    /// Base URL of the open-notify API
    #[arg(long)]
    pub api_base: Option<String>,

    /// TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render times in the local zone instead of UTC
    #[arg(long)]
    pub local_time: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Rewrites the single-dash spellings (`-lat`, `-long`, `-lon`, `-alt`) to
/// the `--` form clap understands.
pub fn normalize_legacy_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.into();
            match arg.to_str() {
                Some("-lat") => OsString::from("--lat"),
                Some("-long") => OsString::from("--long"),
                Some("-lon") => OsString::from("--lon"),
                Some("-alt") => OsString::from("--alt"),
                _ => arg,
            }
        })
        .collect()
}

impl CliArgs {
    pub fn from_env() -> Self {
        Self::parse_from(normalize_legacy_args(std::env::args_os()))
    }

    pub fn try_from_args<I, S>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_args(args))
    }

    /// Selected commands in fixed order: loc, people, pass. `--pass` without
    /// a full coordinate fails here, before any request goes out.
    pub fn commands(&self) -> Result<Vec<Command>> {
        let mut commands = Vec::new();
        if self.loc {
            commands.push(Command::Location);
        }
        if self.people {
            commands.push(Command::People);
        }
        if self.pass {
            let request = PassRequest::from_parts(self.lat, self.lon)?;
            let altitude = self
                .alt
                .map(|alt| validate_finite("-alt", alt))
                .transpose()?;
            let request = request
                .with_altitude(altitude)
                .with_passes(self.passes);
            commands.push(Command::Passes(request));
        }
        Ok(commands)
    }

    /// Command line overrides the config file, which overrides defaults.
    pub fn settings(&self) -> Result<ClientSettings> {
        let mut settings = ClientSettings::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            file.apply_to(&mut settings);
        }
        if let Some(api_base) = &self.api_base {
            settings.api_base = api_base.clone();
        }
        if self.local_time {
            settings.time_display = TimeDisplay::Local;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Coordinate;
    use crate::utils::error::IssError;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_from_args(std::iter::once("iss-tracker").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_legacy_single_dash_arguments() {
        let args = parse(&["--pass", "-long", "40.71", "-lat", "-74", "-alt", "100", "-n", "1"]);

        assert!(args.pass);
        assert_eq!(args.lat, Some(-74.0));
        assert_eq!(args.lon, Some(40.71));
        assert_eq!(args.alt, Some(100.0));
        assert_eq!(args.passes, Some(1));

        // Flags keep their names: no lat/long swap.
        match args.commands().unwrap().as_slice() {
            [Command::Passes(request)] => assert_eq!(
                request.query_params()[..2],
                [("lat", "-74".to_string()), ("lon", "40.71".to_string())]
            ),
            other => panic!("expected a single pass command, got {:?}", other),
        }
    }

    #[test]
    fn test_double_dash_and_alias() {
        let args = parse(&["--pass", "--lat", "10", "--lon", "-20.5"]);
        assert_eq!(args.lat, Some(10.0));
        assert_eq!(args.lon, Some(-20.5));
    }

    #[test]
    fn test_non_numeric_latitude_is_usage_error() {
        let result = CliArgs::try_from_args(["iss-tracker", "--pass", "-lat", "north"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_flags_selects_nothing() {
        assert!(parse(&[]).commands().unwrap().is_empty());
    }

    #[test]
    fn test_commands_in_fixed_order() {
        let args = parse(&["--pass", "-lat", "1", "-long", "2", "--people", "--loc"]);
        let commands = args.commands().unwrap();

        assert_eq!(
            commands,
            vec![
                Command::Location,
                Command::People,
                Command::Passes(PassRequest::new(Coordinate::new(1.0, 2.0))),
            ]
        );
    }

    #[test]
    fn test_pass_without_longitude_is_missing_parameter() {
        let args = parse(&["--loc", "--pass", "-lat", "40.71"]);
        match args.commands() {
            Err(IssError::MissingParameter { field }) => assert_eq!(field, "-long"),
            other => panic!("expected MissingParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_coordinates_are_usage_errors() {
        let args = parse(&["--pass", "-long", "NaN", "-lat", "inf"]);
        let err = args.commands().unwrap_err();
        assert!(matches!(err, IssError::InvalidConfigValue { .. }));
        assert_eq!(err.exit_code(), 2);

        let args = parse(&["--pass", "-lat", "NaN", "-long", "2"]);
        assert!(args.commands().is_err());

        let args = parse(&["--pass", "-lat", "1", "-long", "2", "-alt", "inf"]);
        assert!(args.commands().is_err());
    }

    #[test]
    fn test_coordinates_ignored_without_pass() {
        let args = parse(&["--loc", "-lat", "40.71"]);
        assert_eq!(args.commands().unwrap(), vec![Command::Location]);
    }

    #[test]
    fn test_settings_defaults_and_overrides() {
        let defaults = parse(&["--loc"]).settings().unwrap();
        assert_eq!(defaults, ClientSettings::default());

        let overridden = parse(&["--api-base", "https://iss.example.com", "--local-time"])
            .settings()
            .unwrap();
        assert_eq!(overridden.api_base, "https://iss.example.com");
        assert_eq!(overridden.time_display, TimeDisplay::Local);
    }

    #[test]
    fn test_invalid_api_base() {
        let result = parse(&["--api-base", "not a url"]).settings();
        assert!(matches!(result, Err(IssError::InvalidConfigValue { .. })));
    }
}
