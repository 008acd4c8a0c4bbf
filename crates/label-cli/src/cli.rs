use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "label",
    about = "Label: consistent resource identifiers and tags from your naming convention",
    version
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Workspace-scoped naming facts.
///
/// Each value falls back to its `LABEL_*` environment variable, then to the
/// `--config` file, then to its default.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Tenant identifier (e.g. dpl)
    #[arg(long, global = true, env = "LABEL_TENANT")]
    pub tenant: Option<String>,

    /// Environment identifier (e.g. ane2)
    #[arg(long, global = true, env = "LABEL_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Stage (e.g. dev, prd)
    #[arg(long, global = true, env = "LABEL_STAGE")]
    pub stage: Option<String>,

    /// Workspace name for domain extraction (e.g. data-sales-api)
    #[arg(long, global = true, env = "LABEL_WORKSPACE")]
    pub workspace: Option<String>,

    /// Namespace, used in tags only (e.g. acme)
    #[arg(long, global = true, env = "LABEL_NAMESPACE")]
    pub namespace: Option<String>,

    /// Default identifier delimiter [default: -]
    #[arg(long, global = true, env = "LABEL_DELIMITER")]
    pub default_delimiter: Option<String>,

    /// Workspace segmentation: drop-first or full-split [default: drop-first]
    #[arg(long, global = true, env = "LABEL_SEGMENT_POLICY")]
    pub segment_policy: Option<String>,

    /// TOML file with the same keys as the flags above (snake_case; `delimiter`
    /// for the default delimiter)
    #[arg(long = "config", global = true, env = "LABEL_CONFIG")]
    pub config_file: Option<PathBuf>,
}

/// The resource being named.
#[derive(Args, Debug, Clone)]
pub struct DescriptorArgs {
    /// Resource type abbreviation (e.g. sg, role, emr, db)
    #[arg(long, short = 't')]
    pub resource_type: String,

    /// Qualifier segment (e.g. emr, msk)
    #[arg(long, short = 'q')]
    pub qualifier: Option<String>,

    /// Instance key distinguishing multiple resources of the same type
    #[arg(long, short = 'k')]
    pub instance_key: Option<String>,

    /// Override the default delimiter for this identifier
    #[arg(long, short = 'd')]
    pub delimiter: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the generated identifier
    Id {
        #[command(flatten)]
        resource: DescriptorArgs,
    },

    /// Print the generated tags as JSON
    Tags {
        #[command(flatten)]
        resource: DescriptorArgs,

        /// Leave out the Name tag
        #[arg(long)]
        without_name: bool,
    },

    /// Print identifier, tags, and tags without Name
    Generate {
        #[command(flatten)]
        resource: DescriptorArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved configuration and any missing values
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
