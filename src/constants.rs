//! Application-wide constants.

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "TemplateBuilder";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TEMPLATE_BUILDER_CONFIG_DIR";
