//! Version-control status through the external `git` binary
//!
//! Every query runs `git` as a child process in the resolver's working-directory context. The
//! context starts at the listed directory and is switched to a directory entry only for the
//! duration of its top-level query. The process current directory is never touched.
//!
//! Exit-code conventions are values, not errors:
//! - `rev-parse` failures mean "not a repository" (or an empty branch name)
//! - `diff --quiet` exiting 0 means no difference, 1 means the compared trees differ
//! - `check-ignore --quiet` exiting 0 means the path is ignored
//!
//! Failing to spawn `git` at all, or `status --porcelain` exiting non-zero, is a `VcsError`.

use crate::artifacts::status::vcs_status::{StatusCode, VcsStatus};
use crate::errors::VcsError;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output, Stdio};

const WHITESPACE: [char; 6] = [' ', '\n', '\r', '\t', '\x0b', '\x0c'];

#[derive(Debug)]
pub struct Git {
    working_dir: RefCell<PathBuf>,
}

/// Restores the previous working-directory context when dropped, including during unwinding.
struct WorkingDirGuard<'g> {
    git: &'g Git,
    previous: PathBuf,
}

impl Drop for WorkingDirGuard<'_> {
    fn drop(&mut self) {
        let previous = std::mem::take(&mut self.previous);
        self.git.working_dir.replace(previous);
    }
}

impl Git {
    pub fn new(working_dir: PathBuf) -> Self {
        Git {
            working_dir: RefCell::new(working_dir),
        }
    }

    pub fn working_dir(&self) -> PathBuf {
        self.working_dir.borrow().clone()
    }

    /// Runs `f` with the context switched to `dir`, restoring it on every exit path.
    pub fn with_working_dir<T>(&self, dir: &Path, f: impl FnOnce(&Self) -> T) -> T {
        let _guard = WorkingDirGuard {
            git: self,
            previous: self.working_dir.replace(dir.to_path_buf()),
        };

        f(self)
    }

    /// `true` iff `rev-parse --is-inside-work-tree` prints `true` in the current context.
    pub fn is_inside_work_tree(&self) -> bool {
        match self.output(&["rev-parse", "--is-inside-work-tree"]) {
            Ok(output) if output.status.success() => stdout_text(&output) == "true",
            Ok(output) => {
                log::debug!(
                    "not inside a work tree at {:?}: {}",
                    self.working_dir.borrow(),
                    stderr_text(&output)
                );
                false
            }
            Err(error) => {
                log::debug!("work tree query failed: {error}");
                false
            }
        }
    }

    /// Top level of the repository containing `path`, asked from `path` itself for directories
    /// and from the current context for files.
    pub fn top_level(&self, path: &Path, is_dir: bool) -> Option<PathBuf> {
        let ask = |git: &Self| {
            if !git.is_inside_work_tree() {
                return None;
            }

            match git.output(&["rev-parse", "--show-toplevel"]) {
                Ok(output) if output.status.success() => {
                    Some(PathBuf::from(stdout_text(&output)))
                }
                Ok(output) => {
                    log::debug!("no top level for {path:?}: {}", stderr_text(&output));
                    None
                }
                Err(error) => {
                    log::debug!("top level query for {path:?} failed: {error}");
                    None
                }
            }
        };

        if is_dir {
            self.with_working_dir(path, ask)
        } else {
            ask(self)
        }
    }

    /// Branch checked out in the repository at `top_level`, empty when it cannot be read.
    pub fn branch_name(&self, top_level: &Path, dir: &Path) -> String {
        let (git_dir, work_tree) = repository_args(top_level, dir);

        match self.output(&[&git_dir, &work_tree, "rev-parse", "--abbrev-ref", "HEAD"]) {
            Ok(output) if output.status.success() => stdout_text(&output),
            _ => String::new(),
        }
    }

    /// Status of a repository root seen from outside any repository.
    ///
    /// `DG` when `diff --quiet` finds no difference against `HEAD` (exit 0), ` M` otherwise.
    pub fn repository_status(&self, top_level: &Path, dir: &Path) -> Result<StatusCode, VcsError> {
        let (git_dir, work_tree) = repository_args(top_level, dir);
        let status = self.status(&[
            &git_dir,
            &work_tree,
            "diff",
            "--stat",
            "--quiet",
            "--ignore-submodules",
            "HEAD",
        ])?;

        let code = match status.code() {
            Some(0) => StatusCode::REPOSITORY_CLEAN,
            _ => StatusCode::MODIFIED,
        };
        Ok(StatusCode::new(code))
    }

    pub fn is_ignored(&self, path: &Path) -> Result<bool, VcsError> {
        let path = path.to_string_lossy();
        let status = self.status(&["check-ignore", "--quiet", &path])?;

        Ok(status.code() == Some(0))
    }

    pub fn has_directory_changes(&self, path: &Path) -> Result<bool, VcsError> {
        let path = path.to_string_lossy();
        let status = self.status(&[
            "diff",
            "--stat",
            "--exit-code",
            "--quiet",
            "--ignore-submodules",
            &path,
        ])?;

        Ok(status.code() == Some(1))
    }

    /// `!!` when ignored, ` M` with pending changes, clean otherwise.
    pub fn directory_status(&self, path: &Path) -> Result<StatusCode, VcsError> {
        let code = if self.is_ignored(path)? {
            StatusCode::IGNORED
        } else if self.has_directory_changes(path)? {
            StatusCode::MODIFIED
        } else {
            StatusCode::CLEAN
        };

        Ok(StatusCode::new(code))
    }

    pub fn file_status(&self, path: &Path) -> Result<StatusCode, VcsError> {
        let path = path.to_string_lossy();
        let args = [
            "status",
            "--porcelain",
            "--ignored",
            "--untracked-files=normal",
            &path,
        ];
        let output = self.output(&args)?;

        if !output.status.success() {
            return Err(VcsError::Failed {
                args: args.join(" "),
                status: output.status,
                stderr: stderr_text(&output),
            });
        }

        Ok(StatusCode::from_porcelain(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }

    /// Status of one listed entry.
    ///
    /// `inside_repository` is whether the listed directory itself sits in a work tree; it is
    /// checked once per run by the caller.
    pub fn resolve(
        &self,
        full_path: &Path,
        is_dir: bool,
        inside_repository: bool,
    ) -> Result<VcsStatus, VcsError> {
        let Some(top_level) = self.top_level(full_path, is_dir) else {
            log::debug!("{full_path:?} is not under version control");
            return Ok(VcsStatus::not_repository());
        };

        let status = if !inside_repository {
            let branch = self.branch_name(&top_level, full_path);
            let code = if is_dir {
                self.repository_status(&top_level, full_path)?
            } else {
                StatusCode::new(StatusCode::NOT_REPOSITORY)
            };
            VcsStatus::new(code, branch)
        } else if is_dir {
            VcsStatus::new(self.directory_status(full_path)?, String::new())
        } else {
            VcsStatus::new(self.file_status(full_path)?, String::new())
        };

        log::debug!(
            "{full_path:?}: code {:?}, branch {:?}, top level {top_level:?}",
            status.code.as_str(),
            status.branch
        );
        Ok(status)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new("git");
        command
            .current_dir(&*self.working_dir.borrow())
            .args(args)
            .stdin(Stdio::null());
        command
    }

    fn output(&self, args: &[&str]) -> Result<Output, VcsError> {
        self.command(args)
            .output()
            .map_err(|source| VcsError::Spawn {
                args: args.join(" "),
                source,
            })
    }

    fn status(&self, args: &[&str]) -> Result<ExitStatus, VcsError> {
        self.command(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| VcsError::Spawn {
                args: args.join(" "),
                source,
            })
    }
}

fn repository_args(top_level: &Path, dir: &Path) -> (String, String) {
    (
        format!("--git-dir={}", top_level.join(".git").display()),
        format!("--work-tree={}", dir.display()),
    )
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .trim_matches(WHITESPACE)
        .to_string()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr)
        .trim_matches(WHITESPACE)
        .to_string()
}
