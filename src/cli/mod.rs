pub(crate) mod args;
pub(crate) mod prompt;

pub(crate) use args::{Cli, Mode};
pub(crate) use prompt::prompt_filter;
