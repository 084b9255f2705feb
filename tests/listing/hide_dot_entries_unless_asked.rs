use crate::common::command::{listing_dir, run_k_command, stdout_of};
use crate::common::entry_names;
use crate::common::file::{FileSpec, create_directory, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn dotted_dir(listing_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        listing_dir.path().join(".hidden"),
        "secret".to_string(),
    ));
    write_file(FileSpec::new(
        listing_dir.path().join("shown.txt"),
        "public".to_string(),
    ));
    create_directory(&listing_dir.path().join(".cache"));

    listing_dir
}

fn sorted_names(stdout: &str) -> Vec<String> {
    let mut names = entry_names(stdout);
    names.sort();
    names
}

#[rstest]
#[case::by_default(&[], &["shown.txt"])]
#[case::almost_all(&["-A"], &[".cache", ".hidden", "shown.txt"])]
#[case::all(&["-a"], &[".", "..", ".cache", ".hidden", "shown.txt"])]
#[case::all_long(&["--all"], &[".", "..", ".cache", ".hidden", "shown.txt"])]
fn list_dot_entries_only_when_asked(
    dotted_dir: TempDir,
    #[case] flags: &[&str],
    #[case] expected: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = vec!["--no-vcs"];
    args.extend_from_slice(flags);

    let actual_output = stdout_of(&mut run_k_command(dotted_dir.path(), &args));

    assert_eq!(sorted_names(&actual_output), expected);

    Ok(())
}

#[rstest]
fn list_current_and_parent_entries_first(
    dotted_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_k_command(dotted_dir.path(), &["--no-vcs", "-a"]));

    assert_eq!(entry_names(&actual_output)[..2], [".", ".."]);

    Ok(())
}
