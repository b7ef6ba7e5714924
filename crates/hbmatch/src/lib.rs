pub mod cli;
pub mod error;
pub mod helper;
pub mod logging;
pub mod output;
pub mod registry;
pub mod render;

pub use error::{Error, Result};
pub use hbmatch_predicate::{evaluate, is_match, Branches, PatternError};
pub use helper::MatchHelper;
pub use registry::{register, register_as, registry, RenderOptions, HELPER_NAME};
pub use render::{load_data, read_template, render_str, DataSource};
