// Console rendering: tables for listings and the timestamp format the
// remote API's RFC 3339 values are displayed in.

use chrono::DateTime;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, Table};

use crate::api::types::{BoxDetails, ProviderDetails, User, VersionDetails};

/// Render a server timestamp in the locale-style `%c` format, falling
/// back to the raw string when the value does not parse as RFC 3339.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%c").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn table_with(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(headers.iter().map(|h| Cell::new(h)));
    table
}

/// Box listing for `user <username>`.
pub fn print_user(user: &User) {
    if user.boxes.is_empty() {
        println!("No boxes available for {}", user.username);
        return;
    }
    println!("Available boxes for '{}':", user.username);
    let mut table = table_with(&["Name", "Description", "Created", "Updated", "Current Version"]);
    for b in &user.boxes {
        let current = b
            .current_version
            .as_ref()
            .map_or_else(|| "None Released".to_string(), |v| v.version.clone());
        table.add_row(vec![
            Cell::new(&b.name),
            Cell::new(b.short_description.as_deref().unwrap_or("")),
            Cell::new(format_timestamp(&b.created_at)),
            Cell::new(format_timestamp(&b.updated_at)),
            Cell::new(current),
        ]);
    }
    println!("{table}");
}

/// Box header plus its version listing for `box info`.
pub fn print_box_details(details: &BoxDetails) {
    println!("Details for '{}'", details.tag);
    if let Some(desc) = details.short_description.as_deref().filter(|d| !d.is_empty()) {
        println!("Description: {desc}\n");
    }
    if details.versions.is_empty() {
        println!("No versions available");
        return;
    }
    println!("Available versions:");
    let mut table = table_with(&["Version", "Created", "Updated", "Providers"]);
    for v in &details.versions {
        let providers = if v.providers.is_empty() {
            "None".to_string()
        } else {
            v.providers
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            Cell::new(&v.version),
            Cell::new(format_timestamp(&v.created_at)),
            Cell::new(format_timestamp(&v.updated_at)),
            Cell::new(providers),
        ]);
    }
    println!("{table}");
}

/// Provider listing for `version info`.
pub fn print_version_details(tag: &str, version: &str, details: &VersionDetails) {
    println!("Version information for '{tag}' v{version}");
    if details.providers.is_empty() {
        println!("No providers available");
        return;
    }
    let mut table = table_with(&["Provider", "Created", "Updated"]);
    for p in &details.providers {
        table.add_row(vec![
            Cell::new(&p.name),
            Cell::new(format_timestamp(&p.created_at)),
            Cell::new(format_timestamp(&p.updated_at)),
        ]);
    }
    println!("{table}");
}

/// Field lines for `provider info`.
pub fn print_provider_details(tag: &str, version: &str, details: &ProviderDetails) {
    println!(
        "Information for provider '{}' for '{tag}' v{version}",
        details.name
    );
    println!("Created: {}", format_timestamp(&details.created_at));
    println!("Updated: {}", format_timestamp(&details.updated_at));
    println!(
        "Download URL: {}",
        details.download_url.as_deref().unwrap_or("None")
    );
}
