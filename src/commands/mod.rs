pub mod colors;
pub mod compare;
pub mod context;
pub mod distance;
pub mod init;
pub mod points;
pub mod random;
pub mod show;
pub mod sort;

pub use colors::{run_colors, run_colors_impl};
pub use compare::{run_compare, run_compare_impl};
pub use context::AppContext;
pub use distance::{run_distance, run_distance_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use points::{AnyPoint, build_all};
pub use random::{run_random, run_random_impl};
pub use show::{run_show, run_show_impl};
pub use sort::{run_sort, run_sort_impl};

use crate::{EXIT_CONFIG_ERROR, EXIT_INVALID_INPUT, EXIT_SUCCESS, Result};

/// Prints a command's output or its error and maps the outcome to an exit code.
pub(crate) fn finish(ctx: &AppContext, result: Result<String>) -> i32 {
    match result {
        Ok(out) => {
            print!("{out}");
            EXIT_SUCCESS
        }
        Err(e) => {
            ctx.diagnostics.print_error(&e);
            if e.is_input_error() {
                EXIT_INVALID_INPUT
            } else {
                EXIT_CONFIG_ERROR
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::Config;
    use crate::input::SpecParser;
    use crate::output::{ColorMode, ErrorOutput, OutputFormat};

    use super::AppContext;

    pub fn ctx(format: OutputFormat) -> AppContext {
        ctx_with(Config::default(), format)
    }

    pub fn ctx_with(config: Config, format: OutputFormat) -> AppContext {
        AppContext {
            config,
            format,
            parser: SpecParser::new(),
            diagnostics: ErrorOutput::new(ColorMode::Never),
            verbose: 0,
            quiet: true,
        }
    }
}
