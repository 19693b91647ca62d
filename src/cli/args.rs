//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Instagram likes downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "instadown",
    version,
    about = "Download your liked Instagram photos",
    long_about = "Fetches the list of media you have liked, through the foauth.org gateway,\n\
                  and downloads each standard-resolution image to a local directory."
)]
pub struct Args {
    /// The foauth endpoint to use.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// The directory to put downloaded images in.
    #[arg(short = 'o', long = "output")]
    pub output_directory: Option<PathBuf>,

    /// Email to authenticate foauth with.
    #[arg(short, long, env = "INSTADOWN_EMAIL")]
    pub email: Option<String>,

    /// Password to authenticate foauth with.
    #[arg(short, long, env = "INSTADOWN_PASSWORD")]
    pub password: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(email) = self.email {
            config.account.email = email;
        }

        if let Some(password) = self.password {
            config.account.password = password;
        }

        if let Some(endpoint) = self.endpoint {
            config.options.endpoint = endpoint;
        }

        if let Some(dir) = self.output_directory {
            config.options.output_directory = dir;
        }
    }
}
