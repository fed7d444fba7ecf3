/// Dataset file names follow `{stem}_{index:02}.json` under the dataset
/// directory, with `index` cycling `0..DATASET_FILE_COUNT`.
pub const DATASET_FILE_STEM: &str = "output_concentrations";
pub const DATASET_FILE_COUNT: usize = 12;

/// Name the gridded variable must carry inside a dataset document.
pub const DATASET_VARIABLE_NAME: &str = "concentrations";

pub const DEFAULT_DATASET_DIR: &str = "assets/datasets";
