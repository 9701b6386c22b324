use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "gitlab-cli", version, about = "Browse GitLab projects from the terminal")]
pub struct Args {
    /// GitLab instance URL, e.g. https://gitlab.com
    #[arg(long, env = "GITLAB_URL", global = true)]
    pub url: Option<String>,

    /// Personal access token
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Print raw JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log requests and resolved settings to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Request timeout in seconds (none by default)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Projects the user is a member of
    Projects {
        #[arg(long)]
        search: Option<String>,

        #[arg(long, short = 'n')]
        quantity: Option<u32>,
    },

    /// Project issues
    Issues {
        #[arg(long, short)]
        project: String,

        #[arg(long, value_enum, default_value_t = StateArg::Opened)]
        state: StateArg,

        #[arg(long, short = 'n')]
        quantity: Option<u32>,
    },

    /// Project milestones, newest first
    Milestones {
        #[arg(long, short)]
        project: String,

        #[arg(long)]
        only_active: bool,

        #[arg(long, short = 'n')]
        quantity: Option<u32>,
    },

    /// Issues of one milestone
    MilestoneIssues {
        #[arg(long, short)]
        project: String,

        #[arg(long, short)]
        milestone: String,
    },

    /// Project releases, oldest first
    Releases {
        #[arg(long, short)]
        project: String,

        #[arg(long, short = 'n')]
        quantity: Option<u32>,
    },

    /// One release with its milestones and asset links
    Release {
        #[arg(long, short)]
        project: String,

        #[arg(long, short)]
        release: String,
    },

    /// Issues of every milestone of a release
    ReleaseIssues {
        #[arg(long, short)]
        project: String,

        #[arg(long, short)]
        release: String,
    },

    /// Repository tags, most recent first
    Tags {
        #[arg(long, short)]
        project: String,

        #[arg(long, short = 'n')]
        quantity: Option<u32>,
    },

    /// Latest successful pipeline of a tag
    TagPipeline {
        #[arg(long, short)]
        project: String,

        #[arg(long, short)]
        tag: String,
    },

    /// Project pipelines, newest first
    Pipelines {
        #[arg(long, short)]
        project: String,

        #[arg(long, short = 'n')]
        quantity: Option<u32>,
    },

    /// Project labels
    Labels {
        #[arg(long, short)]
        project: String,

        #[arg(long, short = 'n')]
        quantity: Option<u32>,
    },

    /// Project merge requests
    MergeRequests {
        #[arg(long, short)]
        project: String,

        #[arg(long, value_enum)]
        state: Option<MergeRequestStateArg>,

        #[arg(long, short = 'n')]
        quantity: Option<u32>,
    },

    /// Project packages and their files
    Packages {
        #[arg(long, short)]
        project: String,

        #[arg(long, short = 'n')]
        quantity: Option<u32>,
    },

    /// Replace one label of an issue with another
    SwapLabel {
        #[arg(long, short)]
        project: String,

        /// Issue number inside the project
        #[arg(long, short)]
        issue: u64,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateArg {
    Opened,
    Closed,
    All,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRequestStateArg {
    Opened,
    Closed,
    Merged,
}
