use crate::common::command::{listing_dir, run_k_command};
use crate::common::file::write_sized_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_for_a_missing_directory(listing_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_k_command(listing_dir.path(), &["--no-vcs", "nonexistent"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("nonexistent"));

    Ok(())
}

#[rstest]
fn fail_for_a_regular_file(listing_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_sized_file(&listing_dir.path().join("plain.txt"), 4);

    run_k_command(listing_dir.path(), &["--no-vcs", "plain.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not a directory"));

    Ok(())
}
