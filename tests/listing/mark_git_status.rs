use crate::common::command::{
    init_committed_repository, listing_dir, run_k_command, stdout_of,
};
use crate::common::file::{FileSpec, create_directory, write_file};
use crate::common::line_for;
use assert_fs::TempDir;
use rstest::{fixture, rstest};

#[fixture]
fn committed_repository(listing_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        listing_dir.path().join("tracked.txt"),
        "tracked".to_string(),
    ));
    init_committed_repository(listing_dir.path());

    listing_dir
}

#[rstest]
fn mark_tracked_and_untracked_files(
    committed_repository: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        committed_repository.path().join("untracked.txt"),
        "new".to_string(),
    ));

    let actual_output = stdout_of(&mut run_k_command(committed_repository.path(), &[]));

    let tracked = line_for(&actual_output, "tracked.txt").expect("row for tracked.txt");
    let untracked = line_for(&actual_output, "untracked.txt").expect("row for untracked.txt");
    assert!(tracked.ends_with("| tracked.txt"), "{tracked:?}");
    assert!(untracked.ends_with("+ untracked.txt"), "{untracked:?}");

    Ok(())
}

#[rstest]
fn mark_modified_files(committed_repository: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        committed_repository.path().join("tracked.txt"),
        "changed".to_string(),
    ));

    let actual_output = stdout_of(&mut run_k_command(committed_repository.path(), &[]));

    let tracked = line_for(&actual_output, "tracked.txt").expect("row for tracked.txt");
    assert!(tracked.ends_with("+ tracked.txt"), "{tracked:?}");

    Ok(())
}

#[rstest]
fn show_branch_of_a_nested_repository(
    listing_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = listing_dir.path().join("project");
    write_file(FileSpec::new(
        repository.join("README"),
        "readme".to_string(),
    ));
    init_committed_repository(&repository);
    create_directory(&listing_dir.path().join("plain"));

    let actual_output = stdout_of(&mut run_k_command(listing_dir.path(), &[]));

    let project = line_for(&actual_output, "project").expect("row for project");
    let plain = line_for(&actual_output, "plain").expect("row for plain");
    assert!(project.ends_with(" project trunk"), "{project:?}");
    assert!(plain.ends_with("   plain"), "{plain:?}");

    Ok(())
}

#[rstest]
fn leave_status_column_empty_without_vcs(
    committed_repository: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_k_command(committed_repository.path(), &["--no-vcs"]));

    let tracked = line_for(&actual_output, "tracked.txt").expect("row for tracked.txt");
    assert!(!tracked.contains('|'));
    assert!(!tracked.contains('+'));

    Ok(())
}
