use super::LlmConfig;
use crate::{Error, Result};
use std::fmt;
use tracing::{debug, info};

/// API credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Resolves the credential stored under `var` using `lookup`.
///
/// Absent, empty and whitespace-only values are all `MissingCredential`.
pub fn resolve_api_key<F>(var: &str, lookup: F) -> Result<ApiKey>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => {
            debug!("Credential {} resolved", var);
            Ok(ApiKey(value))
        }
        _ => Err(Error::missing_credential(var)),
    }
}

/// The resolved {credential, endpoint, model} tuple the model client is built from.
#[derive(Debug, Clone)]
pub struct ModelBinding {
    pub api_key: ApiKey,
    pub base_url: String,
    pub model: String,
    pub temperature: Option<f32>,
}

impl ModelBinding {
    pub fn new(api_key: ApiKey, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            api_key,
            base_url,
            model: model.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builds the binding from config, reading the key through `lookup`.
    pub fn resolve<F>(config: &LlmConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if config.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        if config.base_url.trim().is_empty() {
            return Err(Error::config("llm.base_url must not be empty"));
        }

        let api_key = resolve_api_key(&config.api_key_env, lookup)?;
        let binding = Self::new(api_key, config.base_url.clone(), config.model.clone())
            .with_temperature(config.temperature);

        info!(
            "Model binding ready: model={}, base_url={}",
            binding.model, binding.base_url
        );
        Ok(binding)
    }

    /// Builds the binding from config, reading the key from the process environment.
    pub fn from_env(config: &LlmConfig) -> Result<Self> {
        Self::resolve(config, |name| std::env::var(name).ok())
    }
}
