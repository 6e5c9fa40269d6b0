use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "assetls")]
#[command(about = "List the files of a build directory as upload candidates", long_about = None)]
pub struct Cli {
    /// Root directory to enumerate (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Skip entries whose name matches (pipe-separated, supports * and ?)
    #[arg(short = 'I', long = "exclude", value_name = "PATTERN")]
    pub exclude: Option<String>,

    /// Follow symbolic links, skipping directories already visited
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// Print the upload plan (key, content type, source) instead of paths
    #[arg(long)]
    pub plan: bool,

    /// Key prefix for the upload plan (implies --plan)
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Print the upload plan as JSON (implies --plan)
    #[arg(long)]
    pub json: bool,

    /// Sort paths before printing
    #[arg(long)]
    pub sort: bool,

    /// Log each directory as it is read
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn wants_plan(&self) -> bool {
        self.plan || self.json || self.prefix.is_some()
    }
}
