use crate::common::command::{listing_dir, run_k_command, stdout_of};
use crate::common::file::write_sized_file;
use crate::common::line_for;
use assert_fs::TempDir;
use rstest::rstest;

fn numfmt_available() -> bool {
    std::process::Command::new("numfmt")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[rstest]
#[case::iec(&["-H"], "9.8K")]
#[case::si(&["-H", "--si"], "10K")]
fn print_sizes_through_numfmt(
    listing_dir: TempDir,
    #[case] flags: &[&str],
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !numfmt_available() {
        return Ok(());
    }
    write_sized_file(&listing_dir.path().join("ten_thousand"), 10_000);

    let mut args = vec!["--no-vcs"];
    args.extend_from_slice(flags);
    let actual_output = stdout_of(&mut run_k_command(listing_dir.path(), &args));

    let line = line_for(&actual_output, "ten_thousand").expect("row for ten_thousand");
    // numfmt spells the kilo suffix `k` or `K` depending on its version
    let wanted = format!(" {} ", expected.to_lowercase());
    assert!(line.to_lowercase().contains(&wanted), "{line:?}");

    Ok(())
}

#[rstest]
fn keep_raw_sizes_by_default(listing_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_sized_file(&listing_dir.path().join("ten_thousand"), 10_000);

    let actual_output = stdout_of(&mut run_k_command(listing_dir.path(), &["--no-vcs"]));

    let line = line_for(&actual_output, "ten_thousand").expect("row for ten_thousand");
    assert!(line.contains(" 10000 "));

    Ok(())
}
