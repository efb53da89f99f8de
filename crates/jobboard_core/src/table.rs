//! Record tables for the admin screens.
//!
//! # Responsibility
//! - Describe one screen's columns once, for any record type.
//! - Produce header/row cells and a plain-text rendering.
//!
//! # Invariants
//! - Tables never mutate or reorder store contents; sorting returns a copy.
//! - Absent optional values render as empty cells.

use crate::model::company::Company;
use crate::model::job::Job;
use crate::model::record::Record;

/// One displayed column of a record table.
pub struct Column<R> {
    /// Stable key, matching the serialized field name.
    pub key: &'static str,
    /// Header text.
    pub title: &'static str,
    /// Cell value for one record.
    pub value: fn(&R) -> String,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

/// Column layout for one record type.
pub struct RecordTable<R> {
    columns: Vec<Column<R>>,
}

impl<R: Record> RecordTable<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn header(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.title.to_string())
            .collect()
    }

    /// Cell text per record, in the given record order.
    pub fn rows(&self, records: &[R]) -> Vec<Vec<String>> {
        records
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|column| (column.value)(record))
                    .collect()
            })
            .collect()
    }

    /// Returns a copy of `records` ordered by the column named `key`.
    ///
    /// Unknown keys keep store order. Ties keep store order.
    pub fn sorted_by(&self, records: &[R], key: &str) -> Vec<R> {
        let mut sorted = records.to_vec();
        if let Some(column) = self.columns.iter().find(|column| column.key == key) {
            sorted.sort_by_cached_key(|record| (column.value)(record));
        }
        sorted
    }

    /// Renders a left-aligned text table with a dashed header rule.
    pub fn render(&self, records: &[R]) -> String {
        let header = self.header();
        let rows = self.rows(records);

        let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Columns of the companies screen.
pub fn company_table() -> RecordTable<Company> {
    RecordTable::new(vec![
        Column {
            key: "title",
            title: "Company",
            value: |c: &Company| c.title.clone(),
        },
        Column {
            key: "description",
            title: "Description",
            value: |c: &Company| text(&c.description),
        },
        Column {
            key: "image",
            title: "Image",
            value: |c: &Company| text(&c.image),
        },
        Column {
            key: "website",
            title: "Website",
            value: |c: &Company| text(&c.website),
        },
    ])
}

/// Columns of the jobs screen.
pub fn job_table() -> RecordTable<Job> {
    RecordTable::new(vec![
        Column {
            key: "title",
            title: "Job",
            value: |j: &Job| j.title.clone(),
        },
        Column {
            key: "description",
            title: "Description",
            value: |j: &Job| j.description.clone(),
        },
        Column {
            key: "technologies",
            title: "Technologies",
            value: |j: &Job| j.technologies.join(", "),
        },
        Column {
            key: "location",
            title: "Location",
            value: |j: &Job| text(&j.location),
        },
        Column {
            key: "salary",
            title: "Salary",
            value: |j: &Job| j.salary.clone(),
        },
        Column {
            key: "phone",
            title: "Phone",
            value: |j: &Job| text(&j.phone),
        },
        Column {
            key: "email",
            title: "Email",
            value: |j: &Job| text(&j.email),
        },
        Column {
            key: "telegram",
            title: "Telegram",
            value: |j: &Job| text(&j.telegram),
        },
        Column {
            key: "instagram",
            title: "Instagram",
            value: |j: &Job| text(&j.instagram),
        },
        Column {
            key: "companyId",
            title: "CompanyId",
            value: |j: &Job| j.company_id.clone(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::{company_table, job_table};
    use crate::model::company::Company;
    use crate::model::job::JobInput;

    #[test]
    fn company_rows_render_missing_optionals_as_empty() {
        let mut tesla = Company::with_id("1", "Tesla");
        tesla.website = Some("https://www.tesla.com".to_string());

        let rows = company_table().rows(&[tesla]);
        assert_eq!(rows, vec![vec!["Tesla", "", "", "https://www.tesla.com"]]);
    }

    #[test]
    fn job_technologies_join_in_display_order() {
        let mut input = JobInput::new("QA Engineer", "Tests things", "2000 USD", "1");
        input.technologies = vec!["Selenium".to_string(), "Rust".to_string()];
        let job = input.into_record("9".to_string());

        let table = job_table();
        let row = &table.rows(&[job])[0];
        assert_eq!(row[2], "Selenium, Rust");
        assert_eq!(row[9], "1");
        assert_eq!(table.header().len(), 10);
    }

    #[test]
    fn sorted_by_returns_sorted_copy_and_ignores_unknown_keys() {
        let records = vec![
            Company::with_id("1", "Tesla"),
            Company::with_id("2", "Apple"),
        ];
        let table = company_table();

        let sorted = table.sorted_by(&records, "title");
        assert_eq!(sorted[0].title, "Apple");
        assert_eq!(records[0].title, "Tesla");

        let unchanged = table.sorted_by(&records, "nope");
        assert_eq!(unchanged, records);
    }

    #[test]
    fn render_aligns_columns_under_header() {
        let records = vec![Company::with_id("1", "Tesla")];
        let rendered = company_table().render(&records);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Company | Description"));
        assert!(lines[1].starts_with("------- | -----------"));
        assert!(lines[2].starts_with("Tesla   |"));
    }
}
