use crate::common::command::{listing_dir, run_k_command, stdout_of};
use crate::common::file::write_sized_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::dark("dark", 1024, "38;5;46m1024")]
#[case::light("light", 1024, "38;5;34m1024")]
#[case::dark_warning("dark", 600_000, "38;5;196m600000")]
fn paint_size_with_its_bucket_color(
    listing_dir: TempDir,
    #[case] background: &str,
    #[case] size: usize,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_sized_file(&listing_dir.path().join("data.bin"), size);

    let actual_output = stdout_of(&mut run_k_command(
        listing_dir.path(),
        &["--no-vcs", "--color", "always", "--background", background],
    ));

    assert!(
        actual_output.contains(expected),
        "{expected:?} not found in {actual_output:?}"
    );

    Ok(())
}

#[rstest]
fn pick_light_palette_from_colorfgbg(
    listing_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_sized_file(&listing_dir.path().join("data.bin"), 1024);

    let mut cmd = run_k_command(listing_dir.path(), &["--no-vcs", "--color", "always"]);
    cmd.env("COLORFGBG", "0;15");
    let actual_output = stdout_of(&mut cmd);

    assert!(actual_output.contains("38;5;34m1024"));

    Ok(())
}

#[rstest]
fn print_no_escapes_without_colors(
    listing_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_sized_file(&listing_dir.path().join("data.bin"), 1024);

    let actual_output = stdout_of(&mut run_k_command(
        listing_dir.path(),
        &["--no-vcs", "--color", "never"],
    ));

    assert!(!actual_output.contains('\x1b'));
    assert!(actual_output.contains(" 1024 "));

    Ok(())
}
