use crate::common::command::{listing_dir, run_k_command, stdout_of};
use crate::common::entry_names;
use crate::common::file::{set_mtime, write_sized_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// `medium` is the largest and the oldest, `small` the newest.
#[fixture]
fn sized_and_dated(listing_dir: TempDir) -> TempDir {
    let entries = [
        ("tiny", 10, 1_600_000_000),
        ("medium", 5_000, 1_500_000_000),
        ("small", 100, 1_700_000_000),
    ];

    for (name, size, mtime) in entries {
        let path = listing_dir.path().join(name);
        write_sized_file(&path, size);
        set_mtime(&path, mtime);
    }

    listing_dir
}

#[rstest]
#[case::size(&["-S"], &["medium", "small", "tiny"])]
#[case::size_word(&["--sort", "s"], &["medium", "small", "tiny"])]
#[case::size_reversed(&["-S", "-r"], &["tiny", "small", "medium"])]
#[case::time(&["-t"], &["small", "tiny", "medium"])]
#[case::time_word(&["--sort", "t"], &["small", "tiny", "medium"])]
#[case::time_reversed(&["--sort", "t", "--reverse"], &["medium", "tiny", "small"])]
fn order_rows_by_key(
    sized_and_dated: TempDir,
    #[case] flags: &[&str],
    #[case] expected: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = vec!["--no-vcs"];
    args.extend_from_slice(flags);

    let actual_output = stdout_of(&mut run_k_command(sized_and_dated.path(), &args));

    assert_eq!(entry_names(&actual_output), expected);

    Ok(())
}

#[rstest]
fn later_key_overrides_earlier_one(
    sized_and_dated: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_k_command(
        sized_and_dated.path(),
        &["--no-vcs", "-S", "-t"],
    ));

    assert_eq!(entry_names(&actual_output), ["small", "tiny", "medium"]);

    Ok(())
}

#[rstest]
fn unsorted_flag_clears_keys(sized_and_dated: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let unsorted = stdout_of(&mut run_k_command(sized_and_dated.path(), &["--no-vcs", "-U"]));
    let unsorted_with_key = stdout_of(&mut run_k_command(
        sized_and_dated.path(),
        &["--no-vcs", "-U", "-S"],
    ));

    assert_eq!(entry_names(&unsorted), entry_names(&unsorted_with_key));

    Ok(())
}

#[rstest]
fn warn_when_keys_are_combined(sized_and_dated: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_k_command(sized_and_dated.path(), &["--no-vcs", "--sort", "st"])
        .assert()
        .success();
    let stderr = String::from_utf8(output.get_output().stderr.clone())?;

    assert!(stderr.contains("WARN"));
    assert!(stderr.contains("several sort keys"));

    Ok(())
}
