#![allow(dead_code)]

pub mod file;

/// Entry names of a listing, in output order, without the trailing `total` line.
pub fn entry_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.starts_with("total "))
        .filter_map(|line| line.split_whitespace().last())
        .map(str::to_string)
        .collect()
}

/// The output line whose name column is `name`.
pub fn line_for<'o>(stdout: &'o str, name: &str) -> Option<&'o str> {
    stdout
        .lines()
        .find(|line| line.ends_with(&format!(" {name}")) || line.contains(&format!(" {name} ")))
}
