use crate::error::{Result, SevdError};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

pub const ENCRYPT_URL: &str = "https://www.sageexchange.com/sevd/frmenvelope.aspx";
pub const DECRYPT_URL: &str = "https://www.sageexchange.com/sevd/frmopenenvelope.aspx";
pub const PAYMENT_URL: &str = "https://www.sageexchange.com/sevd/frmpayment.aspx";

/// Gateway account and endpoint settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub application_id: Option<String>,
    pub merchant_id: Option<String>,
    pub merchant_key: Option<String>,
    pub language_id: String,
    pub encrypt_url: String,
    pub decrypt_url: String,
    pub payment_url: String,
    pub vault_create_postback_url: Option<String>,
    pub vault_create_return_url: Option<String>,
    pub vault_create_button_text: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            application_id: None,
            merchant_id: None,
            merchant_key: None,
            language_id: "EN".to_string(),
            encrypt_url: ENCRYPT_URL.to_string(),
            decrypt_url: DECRYPT_URL.to_string(),
            payment_url: PAYMENT_URL.to_string(),
            vault_create_postback_url: None,
            vault_create_return_url: None,
            vault_create_button_text: None,
        }
    }
}

/// The identifiers every gateway request carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub application_id: String,
    pub merchant_id: String,
    pub merchant_key: String,
    pub language_id: String,
}

impl Settings {
    /// Reads settings from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| SevdError::Config(e.to_string()))
    }

    /// Reads settings from `SEVD_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            application_id: lookup("SEVD_APPLICATION_ID"),
            merchant_id: lookup("SEVD_MERCHANT_ID"),
            merchant_key: lookup("SEVD_MERCHANT_KEY"),
            language_id: lookup("SEVD_LANGUAGE_ID").unwrap_or(defaults.language_id),
            encrypt_url: lookup("SEVD_ENCRYPT_URL").unwrap_or(defaults.encrypt_url),
            decrypt_url: lookup("SEVD_DECRYPT_URL").unwrap_or(defaults.decrypt_url),
            payment_url: lookup("SEVD_PAYMENT_URL").unwrap_or(defaults.payment_url),
            vault_create_postback_url: lookup("SEVD_VAULT_CREATE_POSTBACK_URL"),
            vault_create_return_url: lookup("SEVD_VAULT_CREATE_RETURN_URL"),
            vault_create_button_text: lookup("SEVD_VAULT_CREATE_BUTTON_TEXT"),
        }
    }

    /// The account identifiers, or a config error naming the first missing one.
    pub fn credentials(&self) -> Result<Credentials> {
        Ok(Credentials {
            application_id: require(&self.application_id, "application_id")?,
            merchant_id: require(&self.merchant_id, "merchant_id")?,
            merchant_key: require(&self.merchant_key, "merchant_key")?,
            language_id: self.language_id.clone(),
        })
    }
}

fn require(value: &Option<String>, name: &str) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| SevdError::Config(format!("{name} is not set")))
}
