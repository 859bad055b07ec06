use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse condition shown by the widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
}

impl WeatherCondition {
    /// Map a provider's free-text condition ("Clear", "Thunderstorm", ...).
    pub fn from_description(main: &str) -> Self {
        let main = main.to_lowercase();
        if main.contains("clear") {
            WeatherCondition::Sunny
        } else if main.contains("rain") {
            WeatherCondition::Rainy
        } else if main.contains("snow") {
            WeatherCondition::Snowy
        } else if main.contains("storm") || main.contains("thunder") {
            WeatherCondition::Stormy
        } else {
            WeatherCondition::Cloudy
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "☀️",
            WeatherCondition::Rainy => "🌧️",
            WeatherCondition::Snowy => "❄️",
            WeatherCondition::Stormy => "⛈️",
            WeatherCondition::Cloudy => "☁️",
        }
    }
}

/// What a provider returns for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub condition: String,
    /// Degrees Fahrenheit.
    pub temperature: f64,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WeatherError {
    #[error("city not found")]
    NotFound { message: Option<String> },
    #[error("weather service unavailable: {0}")]
    Unavailable(String),
}

impl WeatherError {
    /// Text shown inside the widget.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::NotFound {
                message: Some(message),
            } => format!("Error: {message}"),
            WeatherError::NotFound { message: None } => {
                "City not found. Please select a valid city.".into()
            }
            WeatherError::Unavailable(_) => "Error fetching weather. Please try again.".into(),
        }
    }
}

/// Source of current conditions for a city.
pub trait WeatherProvider {
    fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

/// Trim, collapse inner whitespace and capitalise each word.
///
/// Best effort: words are split on spaces only, so hyphenated or non-Latin
/// names keep whatever casing `to_lowercase` gives them after the first char.
pub fn normalize_city(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut word: String = first.to_uppercase().collect();
                    word.push_str(&chars.as_str().to_lowercase());
                    word
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub current_weather: Option<WeatherCondition>,
    #[serde(default)]
    pub temperature: Option<i32>,
}

impl WeatherData {
    /// Ask `provider` for `location` and build the data to store. `self` is
    /// never modified, so a failed lookup cannot clobber saved weather.
    pub fn lookup(
        &self,
        location: &str,
        provider: &dyn WeatherProvider,
    ) -> Result<WeatherData, WeatherError> {
        let city = normalize_city(location);
        if city.is_empty() {
            return Err(WeatherError::NotFound { message: None });
        }
        let report = provider.current(&city)?;
        Ok(WeatherData {
            location: Some(city),
            current_weather: Some(WeatherCondition::from_description(&report.condition)),
            temperature: Some(report.temperature.round() as i32),
        })
    }
}
