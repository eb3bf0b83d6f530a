// src/engine/config.rs

use derive_builder::Builder;
use glob::Pattern;
use std::path::PathBuf;

use crate::engine::day::DayName;

pub const DEFAULT_TEMPLATE_DIR: &str = "_template";
pub const DEFAULT_PLACEHOLDER: &str = "dayNN";

#[derive(Debug, Clone, Builder)]
#[builder(build_fn(name = "build_internal", validate = "Self::validate"))]
pub struct ScaffoldConfig {
    /// The day number to scaffold.
    pub day: u64,

    /// Directory both the template and the new day are resolved against.
    #[builder(setter(into), default = "PathBuf::from(\".\")")]
    pub base_dir: PathBuf,

    #[builder(setter(into), default = "PathBuf::from(DEFAULT_TEMPLATE_DIR)")]
    pub template: PathBuf,

    #[builder(setter(into), default = "DEFAULT_PLACEHOLDER.to_string()")]
    pub placeholder: String,

    #[builder(default)]
    pub exclude_patterns: Vec<Pattern>,

    #[builder(default)]
    pub dry_run: bool,
}

impl ScaffoldConfigBuilder {
    pub fn build(&self) -> Result<ScaffoldConfig, ScaffoldConfigBuilderError> {
        self.build_internal()
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(placeholder) = &self.placeholder {
            if placeholder.is_empty() {
                return Err("placeholder must not be empty".to_string());
            }
        }
        Ok(())
    }
}

impl ScaffoldConfig {
    pub fn day_name(&self) -> DayName {
        DayName::from_number(self.day)
    }

    pub fn template_root(&self) -> PathBuf {
        self.base_dir.join(&self.template)
    }

    pub fn destination(&self) -> PathBuf {
        self.base_dir.join(self.day_name().as_str())
    }
}
