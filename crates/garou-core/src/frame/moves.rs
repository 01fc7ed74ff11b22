use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Attack height as listed in the "Low/Overhead" sheet column
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Height {
    High,
    Low,
    Overhead,
    #[default]
    None,
}

impl Height {
    /// Map a raw sheet cell. The sheet writes `//` for moves that hit high.
    pub fn from_sheet(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "//" => Self::High,
            "low" => Self::Low,
            "overhead" => Self::Overhead,
            _ => Self::None,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Japanese label used on the frame sheets
    pub fn japanese_name(&self) -> &'static str {
        match self {
            Self::High => "上段",
            Self::Low => "下段",
            Self::Overhead => "中段",
            Self::None => "なし",
        }
    }
}

/// One row of a character's frame data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    /// Frames until the move becomes active
    #[serde(default)]
    pub startup: Option<u32>,
    #[serde(default)]
    pub guard: Option<String>,
    #[serde(default)]
    pub hit: Option<String>,
    /// Frames for the whole move to resolve; the amount it fills in a setup
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub cancel: Option<String>,
    #[serde(default)]
    pub low_overhead: Height,
}

impl Move {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_startup(mut self, startup: u32) -> Self {
        self.startup = Some(startup);
        self
    }

    pub fn with_total(mut self, total: u32) -> Self {
        self.total = Some(total);
        self
    }

    /// Opponent reference tables only show moves that actually come out
    pub fn has_active_startup(&self) -> bool {
        self.startup.is_some_and(|s| s >= 1)
    }
}
