//! Connection configuration resolved from CLI flags and the environment

use crate::error::{CoreError, CoreResult};

/// Environment variable holding the hosted database URL.
pub const ENV_URL: &str = "SUPABASE_URL";

/// Fallback URL variable, as written to `.env.local` by frontend tooling.
pub const ENV_URL_FALLBACK: &str = "NEXT_PUBLIC_SUPABASE_URL";

/// Environment variable holding the service-role key.
pub const ENV_SERVICE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Tables the drill-system migration is expected to create.
///
/// Treated as configuration: commands accept a `--tables` override, this is
/// only the default set.
pub const DEFAULT_EXPECTED_TABLES: [&str; 4] = [
    "drill_scenarios",
    "drill_runs",
    "drill_executions",
    "drill_evaluations",
];

/// Connection settings for the hosted database REST API.
///
/// Built once at startup and passed explicitly into the remote backend so
/// that nothing reads the environment ambiently.
#[derive(Clone)]
pub struct RemoteConfig {
    /// Base URL of the hosted project (e.g. `https://abcd1234.supabase.co`)
    pub url: String,

    /// Service-role key used for both the `apikey` header and bearer auth
    pub service_key: String,
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("url", &self.url)
            .field("service_key", &"***")
            .finish()
    }
}

impl RemoteConfig {
    /// Resolve connection settings, CLI flags taking precedence over the
    /// environment.
    ///
    /// The URL is read from `SUPABASE_URL`, falling back to
    /// `NEXT_PUBLIC_SUPABASE_URL`; the key from `SUPABASE_SERVICE_ROLE_KEY`.
    /// Missing values are fatal before any remote call is made.
    pub fn resolve(url_flag: Option<&str>, key_flag: Option<&str>) -> CoreResult<Self> {
        let url = match url_flag {
            Some(url) => url.to_string(),
            None => std::env::var(ENV_URL)
                .or_else(|_| std::env::var(ENV_URL_FALLBACK))
                .map_err(|_| CoreError::ConfigMissing {
                    var: ENV_URL.to_string(),
                    flag: "--url".to_string(),
                })?,
        };
        let service_key = match key_flag {
            Some(key) => key.to_string(),
            None => std::env::var(ENV_SERVICE_KEY).map_err(|_| CoreError::ConfigMissing {
                var: ENV_SERVICE_KEY.to_string(),
                flag: "--service-key".to_string(),
            })?,
        };

        let url = url.trim().trim_end_matches('/').to_string();
        if url.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database URL is empty".to_string(),
            });
        }
        if service_key.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "service key is empty".to_string(),
            });
        }

        Ok(Self { url, service_key })
    }

    /// Project reference extracted from the URL host
    /// (`https://abcd1234.supabase.co` → `abcd1234`).
    ///
    /// Returns `None` when the URL has no host part to extract from.
    pub fn project_ref(&self) -> Option<&str> {
        let host = match self.url.split_once("//") {
            Some((_, rest)) => rest,
            None => self.url.as_str(),
        };
        let label = host.split('.').next()?;
        if label.is_empty() {
            None
        } else {
            Some(label)
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
