//! Dashboard-wide presentation settings

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Theme settings
    pub theme: ThemeSettings,

    /// List rendering settings
    pub list: ListSettings,
}

/// Theme settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// UI scale factor
    pub scale_factor: f32,

    /// Whether to use dark mode
    pub dark_mode: bool,
}

/// Settings for the list screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSettings {
    /// Maximum rows handed to the rendering layer
    pub max_rows_displayed: usize,

    /// Whether list projections include row numbering
    pub show_row_numbers: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            theme: ThemeSettings {
                scale_factor: 1.0,
                dark_mode: true,
            },
            list: ListSettings {
                max_rows_displayed: 1000,
                show_row_numbers: true,
            },
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        DashboardSettings::default().theme
    }
}

impl Default for ListSettings {
    fn default() -> Self {
        DashboardSettings::default().list
    }
}
