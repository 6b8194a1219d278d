//! Resolve link targets and hand them to the platform opener.

use std::path::Path;
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;

use crate::core::content::{LinkTarget, PROFILE};

/// Failure to launch an outbound link.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no opener is available on this platform")]
    Unsupported,
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// URL or file path a target points at.
pub fn resolve(target: LinkTarget, assets: &Path) -> String {
    match target {
        LinkTarget::GitHub => PROFILE.github_url.to_string(),
        LinkTarget::LinkedIn => PROFILE.linkedin_url.to_string(),
        LinkTarget::Resume => assets.join(PROFILE.resume_file).display().to_string(),
    }
}

/// Candidate opener commands for this platform, tried in order.
fn openers() -> &'static [(&'static str, &'static [&'static str])] {
    #[cfg(target_os = "macos")]
    {
        return &[("open", &[])];
    }

    #[cfg(target_os = "windows")]
    {
        return &[("cmd", &["/C", "start", ""])];
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        return &[("xdg-open", &[]), ("gio", &["open"])];
    }

    #[allow(unreachable_code)]
    &[]
}

/// Launch `location` in the user's browser or viewer.  Does not wait for
/// the opener to finish; tokio reaps the child in the background.
///
/// Must be called from within a tokio runtime.
pub fn open(location: &str) -> Result<(), OpenError> {
    let mut last_err = OpenError::Unsupported;

    for &(program, args) in openers() {
        let spawned = Command::new(program)
            .args(args)
            .arg(location)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(_child) => {
                tracing::debug!("opened {location} via {program}");
                return Ok(());
            }
            Err(source) => last_err = OpenError::Spawn { program, source },
        }
    }

    Err(last_err)
}

/// Open `target` and describe the outcome for the status bar.
pub fn open_target(target: LinkTarget, assets: &Path) -> String {
    let location = resolve(target, assets);
    match open(&location) {
        Ok(()) => format!("Opened {location}"),
        Err(err) => {
            tracing::warn!("could not open {location}: {err}");
            format!("Could not open {location}: {err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn profile_links_resolve_to_urls() {
        let assets = Path::new("public");
        assert_eq!(
            resolve(LinkTarget::GitHub, assets),
            "https://github.com/devsaaqib"
        );
        assert!(resolve(LinkTarget::LinkedIn, assets).starts_with("https://www.linkedin.com/"));
    }

    #[test]
    fn resume_resolves_under_assets() {
        let resolved = resolve(LinkTarget::Resume, Path::new("site/static"));
        assert_eq!(
            Path::new(&resolved),
            Path::new("site/static").join("Saaqib_Resume.pdf")
        );
    }
}
