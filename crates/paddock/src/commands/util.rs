//! Shared helpers for command handlers.

use std::path::Path;

use owo_colors::OwoColorize;
use uuid::Uuid;

use paddock_api::{ListRequest, MutationAck};

use crate::cli::{GlobalOpts, ListArgs};
use crate::error::CliError;
use crate::output::should_color;

/// Parse a UUID argument, reporting which field was malformed.
pub fn parse_id(field: &str, value: &str) -> Result<Uuid, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("'{value}' is not a valid UUID"),
    })
}

/// Parse an optional UUID argument.
pub fn parse_opt_id(field: &str, value: Option<&str>) -> Result<Option<Uuid>, CliError> {
    value.map(|v| parse_id(field, v)).transpose()
}

/// Reject an empty required text field before any request is made.
pub fn required(field: &str, value: &str) -> Result<(), CliError> {
    paddock_core::require_nonempty(field, value).map_err(|err| match err {
        paddock_core::CoreError::Validation { field, message } => CliError::Validation {
            field,
            reason: message,
        },
        other => CliError::Validation {
            field: field.into(),
            reason: other.to_string(),
        },
    })
}

/// Build a [`ListRequest`] from the shared list flags.
pub fn list_request(args: &ListArgs) -> ListRequest {
    let mut req = ListRequest::new(args.page, args.limit)
        .opt_param("search", args.search.as_deref());
    if let Some(ref key) = args.sort {
        req = req.sort(key.clone(), !args.desc);
    }
    req
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Print a mutation acknowledgement, preferring the server's message.
pub fn print_ack(ack: &MutationAck, fallback: &str, global: &GlobalOpts) {
    if global.quiet {
        return;
    }
    let message = ack.message.as_deref().unwrap_or(fallback);
    if should_color(&global.color) {
        eprintln!("{}", message.green());
    } else {
        eprintln!("{message}");
    }
    if let Some(ref summary) = ack.summary {
        eprintln!(
            "Imported {} rows; {} skipped, {} failed",
            summary.created,
            summary.skipped,
            summary.errors.len()
        );
        for row_error in &summary.errors {
            eprintln!("  {row_error}");
        }
    }
}

/// Read and parse a JSON file for `--points`-style flags.
pub fn read_json_file<T: serde::de::DeserializeOwned>(
    field: &str,
    path: &Path,
) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: field.into(),
        reason: format!("invalid JSON: {e}"),
    })
}
