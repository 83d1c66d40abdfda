use crate::models::DateWindow;

/// A search query yields at most 1000 results, so recent periods are sliced
/// finer than old ones.
const DEFAULT_WINDOWS: &[(&str, &str)] = &[
    ("2008-01-01", "2017-12-31"),
    ("2018-01-01", "2020-12-31"),
    ("2021-01-01", "2022-06-30"),
    ("2022-07-01", "2022-11-30"),
    ("2022-12-01", "2022-12-31"),
    ("2023-01-01", "2023-01-31"),
    ("2023-02-01", "2023-02-28"),
    ("2023-03-01", "2023-03-31"),
    ("2023-04-01", "2023-04-30"),
    ("2023-05-01", "2023-05-31"),
    ("2023-06-01", "2023-06-30"),
    ("2023-07-01", "2023-07-31"),
    ("2023-08-01", "2023-08-31"),
    ("2023-09-01", "2023-09-30"),
    ("2023-10-01", "2023-10-31"),
    ("2023-11-01", "2023-11-30"),
    ("2023-12-01", "2023-12-31"),
    ("2024-01-01", "2024-01-15"),
    ("2024-01-16", "2024-01-31"),
    ("2024-02-01", "2024-02-15"),
    ("2024-02-16", "2024-02-29"),
    ("2024-03-01", "2024-03-15"),
    ("2024-03-16", "2024-03-31"),
    ("2024-04-01", "2024-04-15"),
    ("2024-04-16", "2024-04-30"),
    ("2024-05-01", "2024-05-15"),
    ("2024-05-16", "2024-05-31"),
    ("2024-06-01", "2024-06-15"),
    ("2024-06-16", "2024-06-30"),
    ("2024-07-01", "2024-07-15"),
    ("2024-07-16", "2024-07-31"),
    ("2024-08-01", "2024-08-15"),
    ("2024-08-16", "2024-08-31"),
    ("2024-09-01", "2024-09-15"),
    ("2024-09-16", "2024-09-30"),
    ("2024-10-01", "2024-10-15"),
    ("2024-10-16", "2024-10-31"),
    ("2024-11-01", "2024-11-15"),
    ("2024-11-16", "2024-11-30"),
    ("2024-12-01", "2024-12-15"),
    ("2024-12-16", "2024-12-31"),
    ("2025-01-01", "2025-01-07"),
    ("2025-01-08", "2025-01-14"),
    ("2025-01-15", "2025-01-21"),
    ("2025-01-22", "2025-01-31"),
    ("2025-02-01", "2025-02-07"),
    ("2025-02-08", "2025-02-14"),
    ("2025-02-15", "2025-02-21"),
    ("2025-02-22", "2025-02-28"),
    ("2025-03-01", "2025-03-07"),
    ("2025-03-08", "2025-03-14"),
    ("2025-03-15", "2025-03-21"),
    ("2025-03-22", "2025-03-31"),
    ("2025-04-01", "2025-04-07"),
    ("2025-04-08", "2025-04-14"),
    ("2025-04-15", "2025-04-21"),
    ("2025-04-22", "2025-04-30"),
    ("2025-05-01", "2025-05-07"),
    ("2025-05-08", "2025-05-14"),
    ("2025-05-15", "2025-05-21"),
    ("2025-05-22", "2025-05-31"),
    ("2025-06-01", "2025-06-07"),
    ("2025-06-08", "2025-06-14"),
    ("2025-06-15", "2025-06-21"),
    ("2025-06-22", "2025-06-30"),
    ("2025-07-01", "2025-07-07"),
    ("2025-07-08", "2025-07-14"),
    ("2025-07-15", "2025-07-21"),
    ("2025-07-22", "2025-07-31"),
    ("2025-08-01", "2025-08-07"),
    ("2025-08-08", "2025-08-14"),
    ("2025-08-15", "2025-08-21"),
    ("2025-08-22", "2025-08-31"),
    ("2025-09-01", "2025-09-07"),
    ("2025-09-08", "2025-09-14"),
    ("2025-09-15", "2025-09-21"),
    ("2025-09-22", "2025-09-30"),
    ("2025-10-01", "2025-10-07"),
    ("2025-10-08", "2025-10-14"),
    ("2025-10-15", "2025-10-21"),
    ("2025-10-22", "2025-10-31"),
    ("2025-11-01", "2025-11-07"),
    ("2025-11-08", "2025-11-14"),
    ("2025-11-15", "2025-11-21"),
    ("2025-11-22", "2025-11-30"),
    ("2025-12-01", "2025-12-31"),
];

/// The built-in window table, oldest first
#[must_use]
pub fn default_windows() -> Vec<DateWindow> {
    DEFAULT_WINDOWS
        .iter()
        .filter_map(|(start, end)| DateWindow::new(start, end).ok())
        .collect()
}
