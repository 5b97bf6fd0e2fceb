/// Dataset location relative to the directory holding the executable
pub(crate) const DEFAULT_DATA_DIR: &str = "prices";
pub(crate) const DEFAULT_DATA_FILE: &str = "data.json";

/// Width of the `=` banners framing each listing section
pub(crate) const BANNER_WIDTH: usize = 120;

/// Filter token that means "match everything"
pub(crate) const ALL_FILTER: &str = "all";
