//! `config` command
//!
//! Shows the resolved paths, the state of each data file and the effective
//! settings.

use std::path::Path;

use crate::config::{ExpensePaths, Settings};
use crate::storage::json_file_valid;

fn file_status(path: &Path) -> &'static str {
    if !path.exists() {
        "missing"
    } else if json_file_valid(path) {
        "ok"
    } else {
        "unreadable (defaults in use)"
    }
}

/// Render paths and settings as text
pub fn render_config(paths: &ExpensePaths, settings: &Settings) -> String {
    let mut lines = vec![
        "Expense Tracker Configuration".to_string(),
        "=============================".to_string(),
        format!("Config file:    {}", paths.settings_file().display()),
        format!("Data directory: {}", paths.data_dir().display()),
        String::new(),
        "Data files:".to_string(),
    ];

    for path in [
        paths.expenses_file(),
        paths.budget_file(),
        paths.income_file(),
        paths.expense_seq_file(),
    ] {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        lines.push(format!("  {:<18} {}", name, file_status(&path)));
    }

    lines.push(String::new());
    lines.push("Settings:".to_string());
    lines.push(format!("  Listen address:  {}", settings.listen_addr));
    lines.push(format!(
        "  Static dir:      {}",
        settings
            .static_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    ));
    lines.push(format!("  Request timeout: {}s", settings.request_timeout_secs));
    lines.push(format!(
        "  CORS origins:    {}",
        settings.cors_allow_origins.join(", ")
    ));
    lines.push(format!("  Currency symbol: {}", settings.currency_symbol));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Handle the config command
pub fn handle_config_command(paths: &ExpensePaths, settings: &Settings) {
    print!("{}", render_config(paths, settings));
}
