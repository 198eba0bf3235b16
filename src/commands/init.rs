use std::fs;

use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PointError, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            crate::output::print_point_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PointError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();

    fs::write(output_path, template).map_err(|source| PointError::FileAccess {
        path: output_path.clone(),
        source,
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# colorpoint configuration file

version = "1"

[palette]
# Colors allowed in addition to the built-in list
# (red, green, blue, yellow, black, periwinkle, white).
# extra = ["teal", "rojo"]
extra = []

[defaults]
# Color for point specs written without `@COLOR`.
color = "red"

# Random points fall in [-random_range, random_range].
random_range = 10

[output]
# "text" or "json"
format = "text"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
