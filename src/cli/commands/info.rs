//! CLI implementation for `ballistics info`
//!
//! Reports the version and the build target triple.

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;

/// Build metadata captured by the build script
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub target: String,
    pub git_sha: Option<&'static str>,
    pub git_dirty: Option<&'static str>,
    pub build_timestamp: Option<&'static str>,
    pub rustc: Option<&'static str>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            target: option_env!("VERGEN_CARGO_TARGET_TRIPLE").map_or_else(
                || format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
                ToString::to_string,
            ),
            git_sha: option_env!("VERGEN_GIT_SHA"),
            git_dirty: option_env!("VERGEN_GIT_DIRTY"),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP"),
            rustc: option_env!("VERGEN_RUSTC_SEMVER"),
        }
    }
}

/// Execute the info command
pub fn execute(ctx: &Context) -> Result<()> {
    let out = &ctx.output;
    let info = BuildInfo::current();

    if out.json {
        return out.print_json(&info);
    }

    let unknown = "unknown";
    out.line(format!("ballistics {}", info.version));
    out.line(format!("  target     {}", info.target));
    out.line(format!(
        "  git        {}{}",
        info.git_sha.unwrap_or(unknown),
        if info.git_dirty == Some("true") { " (dirty)" } else { "" }
    ));
    out.line(format!("  built      {}", info.build_timestamp.unwrap_or(unknown)));
    out.line(format!("  rustc      {}", info.rustc.unwrap_or(unknown)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_has_version_and_target() {
        let info = BuildInfo::current();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(!info.target.is_empty());
    }
}
