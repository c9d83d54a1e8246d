//! Error rendering.
//!
//! Human mode prints a one-line message with the stable error code. JSON and
//! Markdown modes print a structured object so scripts can branch on
//! `error_code`.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::error::WalletError;

/// Render an error for stderr.
#[must_use]
pub fn render_error(error: &WalletError, format: OutputFormat, no_color: bool, pretty: bool) -> String {
    match format {
        OutputFormat::Json => render_error_json(error, pretty),
        OutputFormat::Md => render_error_json(error, true),
        OutputFormat::Human => {
            let use_color = !no_color && crate::util::env::stderr_is_tty();
            render_simple(error, use_color)
        }
    }
}

/// Render error as structured JSON for machine consumption.
#[must_use]
pub fn render_error_json(error: &WalletError, pretty: bool) -> String {
    let error_json = ErrorJson::from_error(error);
    let rendered = if pretty {
        serde_json::to_string_pretty(&error_json)
    } else {
        serde_json::to_string(&error_json)
    };
    rendered.unwrap_or_else(|_| render_simple(error, false))
}

fn render_simple(error: &WalletError, use_color: bool) -> String {
    let header = format!("Error [{}]", error.error_code());
    if use_color {
        format!("{}: {error}", header.red().bold())
    } else {
        format!("{header}: {error}")
    }
}

/// JSON representation of an error for machine consumption.
#[derive(serde::Serialize)]
struct ErrorJson {
    error_code: &'static str,
    category: String,
    message: String,
    exit_code: i32,
}

impl ErrorJson {
    fn from_error(error: &WalletError) -> Self {
        Self {
            error_code: error.error_code(),
            category: error.category().to_string(),
            message: error.to_string(),
            exit_code: error.exit_code().into(),
        }
    }
}
