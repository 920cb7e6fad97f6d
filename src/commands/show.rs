// src/commands/show.rs

//! The `show` command: print all recorded applications as an aligned
//! table, with a consistent color per device and per package manager.

use crate::db;
use crate::error::Result;
use crate::query::{AppListing, list_applications};
use owo_colors::{OwoColorize, Stream::Stdout, Style};
use std::collections::HashMap;
use std::path::Path;

// Small fixed palettes, assigned in first-seen order and cycled when
// exhausted. Devices and package managers draw from separate palettes
// so the two columns stay visually apart.
const DEVICE_PALETTE: [fn(Style) -> Style; 3] = [
    |s| s.cyan(),
    |s| s.green(),
    |s| s.yellow(),
];

const PACKAGE_MANAGER_PALETTE: [fn(Style) -> Style; 4] = [
    |s| s.blue(),
    |s| s.magenta(),
    |s| s.red(),
    |s| s.white(),
];

/// Hands out one style per distinct value, cycling through a palette.
struct PaletteMap<'a> {
    palette: &'a [fn(Style) -> Style],
    assigned: HashMap<String, Style>,
}

impl<'a> PaletteMap<'a> {
    fn new(palette: &'a [fn(Style) -> Style]) -> Self {
        Self {
            palette,
            assigned: HashMap::new(),
        }
    }

    fn style_for(&mut self, value: &str) -> Style {
        if let Some(style) = self.assigned.get(value) {
            return *style;
        }
        let next = self.palette[self.assigned.len() % self.palette.len()];
        let style = next(Style::new());
        self.assigned.insert(value.to_string(), style);
        style
    }
}

/// Print all (or only distinct) applications with their device and
/// package manager.
pub fn cmd_show(distinct: bool, db_path: &Path) -> Result<()> {
    let conn = db::init(db_path)?;
    let listings = list_applications(&conn, distinct)?;

    if listings.is_empty() {
        println!("No applications recorded.");
        return Ok(());
    }

    print_table(&listings);
    println!("\nTotal: {} application(s)", listings.len());
    Ok(())
}

fn print_table(listings: &[AppListing]) {
    let app_width = column_width("Application", listings.iter().map(|l| l.app_name.as_str()));
    let device_width = column_width("Device", listings.iter().map(|l| l.device_name.as_str()));

    println!(
        "{:<app_width$}  {:<device_width$}  {}",
        "Application", "Device", "Package manager"
    );
    println!(
        "{:-<app_width$}  {:-<device_width$}  {:-<15}",
        "", "", ""
    );

    let mut device_colors = PaletteMap::new(&DEVICE_PALETTE);
    let mut pm_colors = PaletteMap::new(&PACKAGE_MANAGER_PALETTE);

    for listing in listings {
        let device_style = device_colors.style_for(&listing.device_name);
        let pm_style = pm_colors.style_for(&listing.package_manager_name);

        // Pad before styling so the ANSI codes do not skew alignment
        let device = format!("{:<device_width$}", listing.device_name);
        println!(
            "{:<app_width$}  {}  {}",
            listing.app_name,
            device.if_supports_color(Stdout, |t| t.style(device_style)),
            listing
                .package_manager_name
                .if_supports_color(Stdout, |t| t.style(pm_style)),
        );
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.len())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}
