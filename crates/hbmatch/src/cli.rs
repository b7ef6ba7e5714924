use crate::registry::{RenderOptions, HELPER_NAME};
use crate::render::DataSource;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hbmatch",
    about = "Render Handlebars templates with a regex `match` block helper",
    version
)]
pub struct Cli {
    /// Template file, or "-" to read from stdin
    #[arg(default_value = "-")]
    pub template: PathBuf,

    /// JSON file with the data to render against
    #[arg(short, long, conflicts_with = "json")]
    pub data: Option<PathBuf>,

    /// Inline JSON data to render against
    #[arg(short, long)]
    pub json: Option<String>,

    /// Fail when the template references missing variables
    #[arg(short, long)]
    pub strict: bool,

    /// Do not HTML-escape expression output
    #[arg(long)]
    pub no_escape: bool,

    /// Name to register the match helper under
    #[arg(long, default_value = HELPER_NAME)]
    pub helper_name: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log helper activity to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            strict: self.strict,
            escape_html: !self.no_escape,
            helper_name: self.helper_name.clone(),
        }
    }

    pub fn data_source(&self) -> DataSource {
        match (&self.data, &self.json) {
            (Some(path), _) => DataSource::File(path.clone()),
            (None, Some(text)) => DataSource::Inline(text.clone()),
            (None, None) => DataSource::Empty,
        }
    }
}
