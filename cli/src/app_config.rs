use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use wenote_client::{AppOptions, TOKEN_KEY};

use crate::{args::ConfigArgs, profile::Profile};

#[derive(Debug, Serialize)]
pub struct AppConfig {
    pub profile_name: String,
    pub profile_path: String,
    pub profile_exists: bool,
    pub api_url: String,
    pub timeout_secs: u64,
    pub page_size: u32,
    pub token_path: String,
}

impl AppConfig {
    pub fn from_args(
        args: &ConfigArgs,
        profile_name: &str,
        profile_path: &Path,
        data_dir: &Path,
        profile: Option<&Profile>,
    ) -> Self {
        let defaults = Profile::default();
        let profile_values = profile.unwrap_or(&defaults);

        AppConfig {
            profile_name: profile_name.to_string(),
            profile_path: profile_path.to_string_lossy().into_owned(),
            profile_exists: profile.is_some(),
            // Flag and env win over the profile file
            api_url: args
                .api_url
                .clone()
                .unwrap_or_else(|| profile_values.api_url.clone()),
            timeout_secs: profile_values.timeout_secs,
            page_size: profile_values.page_size,
            token_path: data_dir.join(TOKEN_KEY).to_string_lossy().into_owned(),
        }
    }

    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            page_size: self.page_size,
        }
    }
}
