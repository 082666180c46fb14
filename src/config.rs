//! API configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no process environment, so settings are baked in with
//! `option_env!` when the WASM bundle is built. Parsing goes through
//! [`ApiConfig::from_lookup`] so the same rules apply to any variable source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_CLOUDINARY_FOLDER: &str = "laporin";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Media-host settings.
///
/// Uploads go through `upload_preset` (unsigned) when one is set. The
/// `signing` key pair is compiled into the WASM bundle and readable by anyone
/// who downloads it, which lets them sign destroy calls for any image; only
/// configure it for trusted admin-only deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub folder: String,
    pub upload_preset: Option<String>,
    pub signing: Option<SigningKey>,
}

/// API key pair for signed media-host calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningKey {
    pub api_key: String,
    pub api_secret: String,
}

impl CloudinaryConfig {
    #[must_use]
    pub fn upload_url(&self) -> String {
        format!("https://api.cloudinary.com/v1_1/{}/image/upload", self.cloud_name)
    }

    #[must_use]
    pub fn destroy_url(&self) -> String {
        format!("https://api.cloudinary.com/v1_1/{}/image/destroy", self.cloud_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin plus API prefix, without a trailing slash.
    pub base_url: String,
    /// Media host settings; `None` disables image upload/delete.
    pub cloudinary: Option<CloudinaryConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned(), cloudinary: None }
    }
}

impl ApiConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `LAPORIN_API_URL`: backend base URL (default `http://localhost:3000/api`)
    /// - `LAPORIN_CLOUDINARY_CLOUD`: media host cloud; required to enable it
    /// - `LAPORIN_CLOUDINARY_PRESET`: unsigned upload preset
    /// - `LAPORIN_CLOUDINARY_KEY`, `LAPORIN_CLOUDINARY_SECRET`: signing key
    ///   pair, needed for delete and for uploads without a preset. The secret
    ///   ships inside the public bundle.
    /// - `LAPORIN_CLOUDINARY_FOLDER`: upload folder (default `laporin`)
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is not an http(s) URL.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "LAPORIN_API_URL" => option_env!("LAPORIN_API_URL"),
                "LAPORIN_CLOUDINARY_CLOUD" => option_env!("LAPORIN_CLOUDINARY_CLOUD"),
                "LAPORIN_CLOUDINARY_PRESET" => option_env!("LAPORIN_CLOUDINARY_PRESET"),
                "LAPORIN_CLOUDINARY_KEY" => option_env!("LAPORIN_CLOUDINARY_KEY"),
                "LAPORIN_CLOUDINARY_SECRET" => option_env!("LAPORIN_CLOUDINARY_SECRET"),
                "LAPORIN_CLOUDINARY_FOLDER" => option_env!("LAPORIN_CLOUDINARY_FOLDER"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is not an http(s) URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = parse_base_url(non_empty(lookup("LAPORIN_API_URL")).as_deref())?;

        let upload_preset = non_empty(lookup("LAPORIN_CLOUDINARY_PRESET"));
        let signing = match (
            non_empty(lookup("LAPORIN_CLOUDINARY_KEY")),
            non_empty(lookup("LAPORIN_CLOUDINARY_SECRET")),
        ) {
            (Some(api_key), Some(api_secret)) => Some(SigningKey { api_key, api_secret }),
            _ => None,
        };
        let cloudinary = match non_empty(lookup("LAPORIN_CLOUDINARY_CLOUD")) {
            Some(cloud_name) if upload_preset.is_some() || signing.is_some() => Some(CloudinaryConfig {
                cloud_name,
                folder: non_empty(lookup("LAPORIN_CLOUDINARY_FOLDER"))
                    .unwrap_or_else(|| DEFAULT_CLOUDINARY_FOLDER.to_owned()),
                upload_preset,
                signing,
            }),
            _ => None,
        };

        Ok(Self { base_url, cloudinary })
    }

    /// Join an API path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.unwrap_or(DEFAULT_API_URL).trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            var: "LAPORIN_API_URL",
            reason: format!("expected an http(s) URL, got '{url}'"),
        });
    }
    Ok(url.to_owned())
}
