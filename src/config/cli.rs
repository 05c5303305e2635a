use crate::config::toml_config::StorefrontConfig;
use crate::domain::model::CourseGroup;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "course-storefront")]
#[command(about = "Browse short courses, manage your selection and check out")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding the local key-value store (overrides the config file)
    #[arg(long)]
    pub store: Option<String>,

    /// Allow checking out with no courses selected (overrides the config file)
    #[arg(long)]
    pub allow_empty_checkout: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List courses, optionally only one group (six-month or six-week)
    Courses {
        #[arg(long)]
        group: Option<CourseGroup>,
    },
    /// Show a course's objective, topics and selection state
    Details { course: String },
    /// Select the course, or deselect it if already selected
    Enroll { course: String },
    /// Remove a course from the selection
    Remove { course: String },
    /// Show the selected courses with subtotal, discount and total
    Fees,
    /// Confirm the selected courses and clear the selection
    Checkout,
    /// Resolve a screen by name, e.g. `open CourseDetails --course Cooking`
    Open {
        screen: String,
        #[arg(long)]
        course: Option<String>,
    },
    /// Create the local account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Check credentials against the local account
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

impl CliConfig {
    /// 合併設定檔與命令列參數 (命令列優先)
    pub fn resolve(&self) -> Result<StorefrontConfig> {
        let mut config = match &self.config {
            Some(path) => StorefrontConfig::from_file(path)?,
            None => StorefrontConfig::default(),
        };

        if let Some(store) = &self.store {
            config.store.path = store.clone();
        }
        if self.allow_empty_checkout {
            config.checkout.allow_empty = Some(true);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enrollment::EmptyCheckout;

    #[test]
    fn test_parse_enroll_command() {
        let cli = CliConfig::try_parse_from(["course-storefront", "enroll", "First Aid"]).unwrap();
        assert!(matches!(cli.command, Command::Enroll { course } if course == "First Aid"));
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_course_group_filter() {
        let cli =
            CliConfig::try_parse_from(["course-storefront", "courses", "--group", "six-week"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::Courses {
                group: Some(CourseGroup::SixWeek)
            }
        ));
        assert!(
            CliConfig::try_parse_from(["course-storefront", "courses", "--group", "weekly"])
                .is_err()
        );
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::try_parse_from([
            "course-storefront",
            "--store",
            "/tmp/courses",
            "--allow-empty-checkout",
            "checkout",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.store_path(), "/tmp/courses");
        assert_eq!(config.empty_checkout(), EmptyCheckout::Allow);
    }

    #[test]
    fn test_store_flag_overrides_config_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("storefront.toml");
        std::fs::write(&path, "[store]\npath = \"/srv/from-file\"\n").unwrap();
        let path = path.to_string_lossy().to_string();

        let from_file =
            CliConfig::try_parse_from(["course-storefront", "--config", path.as_str(), "fees"])
                .unwrap();
        assert_eq!(from_file.resolve().unwrap().store_path(), "/srv/from-file");

        let overridden = CliConfig::try_parse_from([
            "course-storefront",
            "--config",
            path.as_str(),
            "--store",
            "/tmp/flag",
            "fees",
        ])
        .unwrap();
        assert_eq!(overridden.resolve().unwrap().store_path(), "/tmp/flag");
    }
}
