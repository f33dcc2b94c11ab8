//! Base URLs for the two APIs, the data-package bucket and the public site.
//!
//! WASM builds bake the values in at compile time through `option_env!`;
//! the CLI overrides them from arguments or the same environment variables.

pub const DEFAULT_API_BASE_URL: &str = "https://api.dadosjusbr.org";
pub const DEFAULT_UI_API_BASE_URL: &str = "https://api.dadosjusbr.org/uiapi";
pub const DEFAULT_REPO_URL: &str = "https://dadosjusbr-public.s3.amazonaws.com";
pub const DEFAULT_SITE_URL: &str = "https://dadosjusbr.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// General API (agencies, transparency index, downloads).
    pub api_base_url: String,
    /// UI-specific API (summaries, search).
    pub ui_api_base_url: String,
    /// Storage bucket prefix for bundled data packages.
    pub repo_url: String,
    /// Public site, used for share links.
    pub site_url: String,
}

impl ApiConfig {
    pub fn new(
        api_base_url: impl AsRef<str>,
        ui_api_base_url: impl AsRef<str>,
        repo_url: impl AsRef<str>,
        site_url: impl AsRef<str>,
    ) -> Self {
        Self {
            api_base_url: trim_base(api_base_url.as_ref()),
            ui_api_base_url: trim_base(ui_api_base_url.as_ref()),
            repo_url: trim_base(repo_url.as_ref()),
            site_url: trim_base(site_url.as_ref()),
        }
    }

    /// Configuration injected at build time, defaulting to the public endpoints.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL),
            option_env!("UI_API_BASE_URL").unwrap_or(DEFAULT_UI_API_BASE_URL),
            option_env!("S3_REPO_URL").unwrap_or(DEFAULT_REPO_URL),
            option_env!("SITE_URL").unwrap_or(DEFAULT_SITE_URL),
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_API_BASE_URL,
            DEFAULT_UI_API_BASE_URL,
            DEFAULT_REPO_URL,
            DEFAULT_SITE_URL,
        )
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
