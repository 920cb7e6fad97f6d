// src/gui/app.rs

use egui_extras::{Column, TableBuilder};
use std::path::PathBuf;

use crate::db;
use crate::query::AppListing;

/// Which column the table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortColumn {
    Application,
    Device,
    PackageManager,
}

/// Main application state for the list view.
pub struct AppListApp {
    /// Database file the rows are loaded from.
    db_path: PathBuf,

    /// Current distinct-filter state; toggling triggers a re-query.
    distinct: bool,

    /// Rows as returned by the query, before view sorting.
    rows: Vec<AppListing>,

    /// Active sort column and direction.
    sort_column: SortColumn,
    sort_ascending: bool,

    /// Last query error, shown in place of the table.
    error: Option<String>,
}

impl AppListApp {
    pub fn new(db_path: PathBuf, distinct: bool) -> Self {
        let mut app = Self {
            db_path,
            distinct,
            rows: Vec::new(),
            sort_column: SortColumn::Application,
            sort_ascending: true,
            error: None,
        };
        app.requery();
        app
    }

    /// Re-run the query with the current distinct flag and replace the
    /// displayed rows. Opens a scoped connection per call.
    fn requery(&mut self) {
        let result = db::init(&self.db_path)
            .and_then(|conn| crate::query::list_applications(&conn, self.distinct));
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
                self.apply_sort();
            }
            Err(e) => {
                self.rows.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    fn apply_sort(&mut self) {
        let ascending = self.sort_ascending;
        let column = self.sort_column;
        self.rows.sort_by(|a, b| {
            let ordering = match column {
                SortColumn::Application => a.app_name.to_lowercase().cmp(&b.app_name.to_lowercase()),
                SortColumn::Device => a.device_name.cmp(&b.device_name),
                SortColumn::PackageManager => {
                    a.package_manager_name.cmp(&b.package_manager_name)
                }
            };
            if ascending { ordering } else { ordering.reverse() }
        });
    }

    fn sort_by(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_column = column;
            self.sort_ascending = true;
        }
        self.apply_sort();
    }

    fn header_label(&self, column: SortColumn, title: &str) -> String {
        if self.sort_column == column {
            let arrow = if self.sort_ascending { "^" } else { "v" };
            format!("{} {}", title, arrow)
        } else {
            title.to_string()
        }
    }
}

impl eframe::App for AppListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .checkbox(&mut self.distinct, "Only apps on exactly one device")
                    .changed()
                {
                    self.requery();
                }
                if ui.button("Reload").clicked() {
                    self.requery();
                }
                ui.label(format!("{} row(s)", self.rows.len()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::LIGHT_RED, error);
                return;
            }

            if self.rows.is_empty() {
                ui.label("No applications recorded.");
                return;
            }

            let text_height = egui::TextStyle::Body
                .resolve(ui.style())
                .size
                .max(ui.spacing().interact_size.y);

            let mut clicked_column = None;

            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::initial(280.0).at_least(100.0)) // Application
                .column(Column::initial(160.0).at_least(60.0)) // Device
                .column(Column::remainder().at_least(80.0)) // Package manager
                .min_scrolled_height(0.0)
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        if ui
                            .button(self.header_label(SortColumn::Application, "Application"))
                            .clicked()
                        {
                            clicked_column = Some(SortColumn::Application);
                        }
                    });
                    header.col(|ui| {
                        if ui
                            .button(self.header_label(SortColumn::Device, "Device"))
                            .clicked()
                        {
                            clicked_column = Some(SortColumn::Device);
                        }
                    });
                    header.col(|ui| {
                        if ui
                            .button(self.header_label(
                                SortColumn::PackageManager,
                                "Package manager",
                            ))
                            .clicked()
                        {
                            clicked_column = Some(SortColumn::PackageManager);
                        }
                    });
                })
                .body(|body| {
                    body.rows(text_height, self.rows.len(), |mut row| {
                        let listing = &self.rows[row.index()];
                        row.col(|ui| {
                            ui.label(&listing.app_name);
                        });
                        row.col(|ui| {
                            ui.label(&listing.device_name);
                        });
                        row.col(|ui| {
                            ui.label(&listing.package_manager_name);
                        });
                    });
                });

            if let Some(column) = clicked_column {
                self.sort_by(column);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_app() -> (TempDir, AppListApp) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("applist.db");

        let conn = db::init(&db_path).unwrap();
        conn.execute_batch(
            "INSERT INTO devices (name) VALUES ('laptop'), ('server');
             INSERT INTO package_managers (name) VALUES ('flatpak');
             INSERT INTO apps (name, device_id, package_manager_id) VALUES
                 ('zeta', 1, 1), ('Apple', 2, 1), ('banana', 1, 1);",
        )
        .unwrap();

        (temp_dir, AppListApp::new(db_path, false))
    }

    #[test]
    fn test_new_loads_rows_sorted_case_insensitively() {
        let (_temp, app) = seeded_app();
        let names: Vec<&str> = app.rows.iter().map(|r| r.app_name.as_str()).collect();
        assert_eq!(names, ["Apple", "banana", "zeta"]);
    }

    #[test]
    fn test_toggle_distinct_requeries() {
        let (_temp, mut app) = seeded_app();
        assert_eq!(app.rows.len(), 3);

        app.distinct = true;
        app.requery();
        // zeta and banana live only on laptop, Apple only on server;
        // every name here is on exactly one device
        assert_eq!(app.rows.len(), 3);
    }

    #[test]
    fn test_sort_by_same_column_flips_direction() {
        let (_temp, mut app) = seeded_app();

        app.sort_by(SortColumn::Application);
        assert!(!app.sort_ascending);
        let names: Vec<&str> = app.rows.iter().map(|r| r.app_name.as_str()).collect();
        assert_eq!(names, ["zeta", "banana", "Apple"]);

        app.sort_by(SortColumn::Device);
        assert!(app.sort_ascending);
        assert_eq!(app.sort_column, SortColumn::Device);
    }
}
