use derive_new::new;

/// Two-character status token, as printed by `git status --porcelain` plus a few local tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusCode(String);

impl StatusCode {
    /// The entry is not under version control.
    pub const NOT_REPOSITORY: &'static str = "--";
    /// Inside a work tree, nothing to report.
    pub const CLEAN: &'static str = "  ";
    /// A repository root seen from outside, with no pending changes ("directory good").
    pub const REPOSITORY_CLEAN: &'static str = "DG";
    pub const MODIFIED: &'static str = " M";
    pub const IGNORED: &'static str = "!!";
    /// Status resolution turned off.
    pub const DISABLED: &'static str = "";

    pub fn new(code: &str) -> Self {
        StatusCode(code.to_string())
    }

    /// Extracts the code from the first line of porcelain output, clean when there is none.
    pub fn from_porcelain(output: &str) -> Self {
        let first_line = output
            .lines()
            .next()
            .unwrap_or_default()
            .trim_matches(['\n', '\r', '\t', '\x0b', '\x0c']);

        match first_line.get(0..2) {
            Some(code) => StatusCode::new(code),
            None => StatusCode::new(Self::CLEAN),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Resolved version-control state of one entry.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct VcsStatus {
    pub code: StatusCode,
    /// Branch of a repository root examined from outside any repository, empty otherwise
    pub branch: String,
}

impl VcsStatus {
    pub fn not_repository() -> Self {
        VcsStatus::new(StatusCode::new(StatusCode::NOT_REPOSITORY), String::new())
    }

    pub fn disabled() -> Self {
        VcsStatus::new(StatusCode::new(StatusCode::DISABLED), String::new())
    }

    pub fn with_code(code: &str) -> Self {
        VcsStatus::new(StatusCode::new(code), String::new())
    }
}
