use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;

use crate::formatting::BoxChars;
use crate::ranking::BracketThresholds;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub teams_file: String,
    pub matches_file: String,
    pub time_format: String,
    pub bracket: BracketThresholds,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub header_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub winners_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub losers_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub eliminated_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub win_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub loss_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub predicted_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error_fg: Color,
    /// Derived from `use_unicode` after loading
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            teams_file: "teams.json".to_string(),
            matches_file: "matches.json".to_string(),
            time_format: "%H:%M:%S".to_string(),
            bracket: BracketThresholds::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            header_fg: Color::Rgb(159, 226, 191),
            winners_fg: Color::Green,
            losers_fg: Color::Yellow,
            eliminated_fg: Color::DarkGray,
            win_fg: Color::Green,
            loss_fg: Color::Red,
            predicted_fg: Color::Cyan,
            error_fg: Color::Red,
            box_chars: BoxChars::unicode(),
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color given as a name ("cyan"), hex ("#f60", "#FF6600") or an
/// "r,g,b" triple
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    let named = match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        "orange" => Some(Color::Rgb(255, 165, 0)),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
        return match hex.len() {
            6 => Some(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => Some(Color::Rgb(
                channel(&hex[0..1].repeat(2))?,
                channel(&hex[1..2].repeat(2))?,
                channel(&hex[2..3].repeat(2))?,
            )),
            _ => None,
        };
    }

    let parts: Vec<u8> = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
        _ => None,
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Parse config file content, filling in derived display fields
pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.display.box_chars = BoxChars::from_use_unicode(config.display.use_unicode);
    Ok(config)
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    parse(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("Cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("ORANGE"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("grey"), Some(Color::Gray));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#0f0f"), None);
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("1,2"), None);
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("mauve"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
        assert_eq!(parse_color("256,0,0"), None);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.bracket, BracketThresholds::default());
        assert_eq!(config.teams_file, "teams.json");
        assert_eq!(config.matches_file, "matches.json");
        assert!(config.display.use_unicode);
    }

    #[test]
    fn test_config_from_toml_bracket() {
        let config = parse(
            r#"
[bracket]
winners_max_rank = 2
losers_max_rank = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.bracket.winners_max_rank, 2);
        assert_eq!(config.bracket.losers_max_rank, 5);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_partial_bracket_keeps_default() {
        let config = parse("[bracket]\nwinners_max_rank = 3\n").unwrap();
        assert_eq!(config.bracket.winners_max_rank, 3);
        assert_eq!(config.bracket.losers_max_rank, 6);
    }

    #[test]
    fn test_config_from_toml_display() {
        let config = parse(
            r##"
teams_file = "data/teams.json"

[display]
use_unicode = false
predicted_fg = "#00FFFF"
win_fg = "0,128,0"
            "##,
        )
        .unwrap();
        assert_eq!(config.teams_file, "data/teams.json");
        assert_eq!(config.display.predicted_fg, Color::Rgb(0, 255, 255));
        assert_eq!(config.display.win_fg, Color::Rgb(0, 128, 0));
        assert_eq!(config.display.box_chars, BoxChars::ascii());
    }

    #[test]
    fn test_config_invalid_color_is_error() {
        assert!(parse("[display]\nloss_fg = \"nope\"\n").is_err());
    }
}
