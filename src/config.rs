use std::env;
use std::path::PathBuf;

use crate::error::{ClientError, Result};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

const API_KEY_VAR: &str = "GPTKEY";
const MODEL_VAR: &str = "GPTMOD";
const WRAP_VAR: &str = "GPTWRAP";
const API_URL_VAR: &str = "GPTURL";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    pub wrap_width: Option<i64>,
    pub home_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| env::var(key).ok(), dirs::home_dir())
    }

    pub(crate) fn from_env_with(
        mut get_var: impl FnMut(&str) -> Option<String>,
        home_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let wrap_width = parse_wrap_width(get_var(WRAP_VAR).as_deref())?;
        let api_url = get_var(API_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_key: get_var(API_KEY_VAR).unwrap_or_default(),
            model: get_var(MODEL_VAR).unwrap_or_default(),
            api_url,
            wrap_width,
            home_dir,
        })
    }
}

fn parse_wrap_width(raw: Option<&str>) -> Result<Option<i64>> {
    let Some(raw) = raw.filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    raw.trim().parse::<i64>().map(Some).map_err(|err| {
        ClientError::Config(format!(
            "Invalid {}='{}': {}. Expected an integer line width.",
            WRAP_VAR, raw, err
        ))
    })
}
