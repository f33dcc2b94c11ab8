//! Command implementations for the DadosJusBr CLI.
//!
//! Each subcommand goes through the same client, codec and loaders the web
//! pages use, and prints what the corresponding page would show.

use clap::{Args, Subcommand};
use djbr_api::config::{
    DEFAULT_API_BASE_URL, DEFAULT_REPO_URL, DEFAULT_SITE_URL, DEFAULT_UI_API_BASE_URL,
};
use djbr_api::{ApiClient, ApiConfig};

pub mod report;
pub mod search;

/// Base URLs, overridable per invocation or through the environment.
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// General API (agencies, transparency index, downloads)
    #[arg(long, global = true, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// UI API (summaries, search)
    #[arg(long, global = true, env = "UI_API_BASE_URL", default_value = DEFAULT_UI_API_BASE_URL)]
    pub ui_api_base_url: String,

    /// Storage bucket holding the agency data packages
    #[arg(long, global = true, env = "S3_REPO_URL", default_value = DEFAULT_REPO_URL)]
    pub repo_url: String,

    /// Public site, used for share links
    #[arg(long, global = true, env = "SITE_URL", default_value = DEFAULT_SITE_URL)]
    pub site_url: String,
}

impl ApiArgs {
    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(
            &self.api_base_url,
            &self.ui_api_base_url,
            &self.repo_url,
            &self.site_url,
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the monitored agencies
    Agencies {
        /// Only agencies of this group (e.g. justica-estadual)
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Run a parametric search and print the first page of results
    Search(search::SearchArgs),

    /// Print the headline figures and the monthly totals of the current year
    Summary,

    /// Print transparency index scores of a group or of one agency
    Index {
        /// Group slug (e.g. ministerios-publicos)
        #[arg(short, long, conflicts_with = "agency", required_unless_present = "agency")]
        group: Option<String>,

        /// Agency id (e.g. tjal)
        #[arg(short, long)]
        agency: Option<String>,
    },
}

pub async fn run(api: &ApiArgs, command: Command) -> anyhow::Result<()> {
    let client = ApiClient::new(api.config());
    match command {
        Command::Agencies { group } => report::run_agencies(&client, group.as_deref()).await,
        Command::Search(args) => search::run_search(&client, &args).await,
        Command::Summary => report::run_summary(&client).await,
        Command::Index { group, agency } => match (group, agency) {
            (Some(group), _) => report::run_group_index(&client, &group).await,
            (None, Some(agency)) => report::run_agency_index(&client, &agency).await,
            (None, None) => anyhow::bail!("either --group or --agency is required"),
        },
    }
}
