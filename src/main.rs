use anyhow::Result;
use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use k::areas::listing::Listing;
use k::areas::workspace::resolve_target;
use k::artifacts::core::logging;
use k::artifacts::format::palette::Background;
use k::artifacts::format::size::UnitBase;
use k::artifacts::sort::sort_key::SortKeys;
use k::options::{FilterOptions, FormatOptions, ListingOptions, SortOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "k",
    version = "0.1.0",
    about = "Directory listings with colors, sizes, timestamps and git status",
    long_about = "Lists a directory the way `ls -l` does, coloring sizes by magnitude and \
    modification times by age, and marking each entry with its git status.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The directory to list, the current one by default")]
    directory: Option<PathBuf>,

    #[arg(short = 'a', long, help = "List entries starting with a dot, including . and ..")]
    all: bool,
    #[arg(short = 'A', long, help = "List entries starting with a dot, except . and ..")]
    almost_all: bool,
    #[arg(short = 'd', long, help = "List only directories")]
    directories: bool,
    #[arg(short = 'n', long, help = "Do not list directories")]
    no_directories: bool,

    #[arg(short = 'H', long, help = "Print sizes in human readable form")]
    human: bool,
    #[arg(long, help = "With -H, use powers of 1000 instead of 1024")]
    si: bool,

    #[arg(short = 'r', long, help = "Reverse the sort order")]
    reverse: bool,
    #[arg(short = 'S', long, help = "Sort by size")]
    size: bool,
    #[arg(short = 't', long, help = "Sort by modification time")]
    time: bool,
    #[arg(short = 'u', long, help = "Sort by access time")]
    atime: bool,
    #[arg(short = 'c', long, help = "Sort by status change time")]
    ctime: bool,
    #[arg(short = 'U', long, help = "Do not sort, list in directory order")]
    unsorted: bool,
    #[arg(
        long,
        value_name = "WORD",
        help = "Sort keys as letters: s (size), t (time), a (atime), c (ctime)"
    )]
    sort: Option<String>,

    #[arg(long, help = "Do not show git status")]
    no_vcs: bool,
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "When to use colors")]
    color: ColorMode,
    #[arg(
        long,
        value_enum,
        help = "Terminal background the palette is tuned for, detected from COLORFGBG by default"
    )]
    background: Option<Background>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl Cli {
    fn sort_keys(&self) -> SortKeys {
        if self.unsorted {
            return SortKeys::empty();
        }

        let mut keys = self
            .sort
            .as_deref()
            .map(SortKeys::parse_word)
            .unwrap_or_default();
        for (flag, key) in [
            (self.size, SortKeys::SIZE),
            (self.time, SortKeys::MTIME),
            (self.atime, SortKeys::ATIME),
            (self.ctime, SortKeys::CTIME),
        ] {
            if flag {
                keys.insert(key);
            }
        }
        keys
    }

    fn options(&self) -> ListingOptions {
        let unit_base = if self.si { UnitBase::Si } else { UnitBase::Iec };

        ListingOptions::new(
            FilterOptions::new(
                self.all,
                self.almost_all,
                self.directories,
                self.no_directories,
            ),
            SortOptions::new(self.sort_keys(), self.reverse),
            FormatOptions::new(
                self.human,
                unit_base,
                self.background.unwrap_or_else(Background::detect),
            ),
            !self.no_vcs,
        )
    }

    fn apply_color_mode(&self) {
        match self.color {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => {
                let wanted = std::io::stdout().is_terminal();
                colored::control::set_override(wanted && std::env::var_os("NO_COLOR").is_none());
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(error) = logging::init() {
        eprintln!("warning: logging unavailable: {error}");
    }
    cli.apply_color_mode();

    let cwd = std::env::current_dir()?;
    let target = resolve_target(cli.directory.as_deref(), &cwd);
    let options = cli.options();
    log::debug!("target {target:?}, options {options:?}");

    let listing = Listing::new(&target, options, Box::new(std::io::stdout()))?;
    listing.list()?;

    Ok(())
}
