use crate::output::OutputWriter;
use console::style;
use geofilter_core::models::DistanceUnit;
use geofilter_core::GeoFilterError;

/// Error message with suggestions on how to fix the invocation
pub struct CliError {
    pub message: String,
    pub suggestions: Vec<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), suggestions: Vec::new() }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn display(&self, output: &OutputWriter) {
        output.error(&self.message);

        if output.is_json() || self.suggestions.is_empty() {
            return;
        }

        eprintln!();
        eprintln!("{}", style("To fix this:").yellow().bold());
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, suggestion);
        }
    }
}

/// Build the user-facing error for a failed command
pub fn from_anyhow(err: &anyhow::Error) -> CliError {
    let message = format!("{:#}", err);
    let Some(geo_err) = err
        .chain()
        .find_map(|e| e.downcast_ref::<GeoFilterError>())
        .filter(|e| e.is_validation())
    else {
        return CliError::new(message);
    };

    match geo_err {
        GeoFilterError::OutOfRangeLatitude { .. } | GeoFilterError::OutOfRangeLongitude { .. } => {
            CliError::new(message)
                .with_suggestion("Pass --mode coerce to clamp latitudes and wrap longitudes")
        }
        GeoFilterError::InvalidCornerOrder { .. } => CliError::new(message)
            .with_suggestion("--top must be the northern edge: swap --top and --bottom"),
        GeoFilterError::UnknownDistanceUnit { .. } => {
            let known: Vec<&str> = DistanceUnit::ALL.iter().map(|u| u.symbol()).collect();
            CliError::new(message)
                .with_suggestion(format!("Use one of: {}", known.join(", ")))
                .with_suggestion("Or register the unit under [units] in the configuration file")
        }
        GeoFilterError::NegativeRadius { .. } => {
            CliError::new(message).with_suggestion("Give a radius of zero or more, e.g. 25km")
        }
        _ => CliError::new(message),
    }
}

/// Print a failed command's error to stderr
pub fn report(err: &anyhow::Error, output: &OutputWriter) {
    from_anyhow(err).display(output);
}
