use std::path::PathBuf;

pub const DEFAULT_WORKBOOK: &str = "countyPopChange2020-2021.xlsx";
pub const DEFAULT_SHEET: &str = "co-est2021-alldata";

/// Where the population rows are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    pub workbook: PathBuf,
    pub sheet: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub source: SourceConfig,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            sheet: DEFAULT_SHEET.to_owned(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            window_title: "State Population Change 2020-2021".to_owned(),
            window_size: [800.0, 800.0],
        }
    }
}
