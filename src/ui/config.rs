use anyhow::{Context, Result};
use glob::Pattern;

use crate::engine::config::{
    DEFAULT_PLACEHOLDER, DEFAULT_TEMPLATE_DIR, ScaffoldConfig, ScaffoldConfigBuilder,
};
use crate::ui::cli::Cli;

/// Applies CLI flags over the built-in defaults.
pub fn build_config_builder(args: &Cli) -> Result<ScaffoldConfigBuilder> {
    let mut b = ScaffoldConfigBuilder::default();
    b.day(args.day)
        .base_dir(args.dir.clone())
        .template(
            args.template
                .clone()
                .unwrap_or_else(|| DEFAULT_TEMPLATE_DIR.into()),
        )
        .placeholder(
            args.placeholder
                .clone()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
        )
        .exclude_patterns(patterns_from_strings(&args.exclude)?)
        .dry_run(args.dry_run);
    Ok(b)
}

pub fn build_config(args: &Cli) -> Result<ScaffoldConfig> {
    build_config_builder(args)?
        .build()
        .context("Invalid scaffold configuration")
}

pub fn patterns_from_strings(v: &[String]) -> Result<Vec<Pattern>> {
    v.iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern: '{p}'")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("make-day").chain(args.iter().copied()))
    }

    #[test]
    fn bare_day_uses_defaults() {
        let cfg = build_config(&parse(&["3"])).unwrap();
        assert_eq!(cfg.day, 3);
        assert_eq!(cfg.base_dir, PathBuf::from("."));
        assert_eq!(cfg.template, PathBuf::from("_template"));
        assert_eq!(cfg.placeholder, "dayNN");
        assert!(cfg.exclude_patterns.is_empty());
        assert!(!cfg.dry_run);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = build_config(&parse(&[
            "9",
            "--template",
            "skel",
            "-p",
            "@@",
            "-e",
            "target/,*.log",
        ]))
        .unwrap();
        assert_eq!(cfg.template, PathBuf::from("skel"));
        assert_eq!(cfg.placeholder, "@@");
        let pats: Vec<&str> = cfg.exclude_patterns.iter().map(|p| p.as_str()).collect();
        assert_eq!(pats, vec!["target/", "*.log"]);
    }

    #[test]
    fn empty_placeholder_is_rejected() {
        assert!(build_config(&parse(&["1", "--placeholder", ""])).is_err());
    }

    #[test]
    fn malformed_glob_is_rejected() {
        assert!(build_config(&parse(&["1", "-e", "[oops"])).is_err());
    }
}
