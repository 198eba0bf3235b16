use clap::Parser;

use colorpoint::EXIT_CONFIG_ERROR;
use colorpoint::cli::{Cli, Commands};
use colorpoint::commands::{
    AppContext, run_colors, run_compare, run_distance, run_init, run_random, run_show, run_sort,
};
use colorpoint::output::print_point_error;

fn main() {
    let cli = Cli::parse();

    if let Commands::Init(args) = &cli.command {
        std::process::exit(run_init(args));
    }

    let ctx = match AppContext::init(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            print_point_error(&e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let exit_code = match &cli.command {
        Commands::Show(args) => run_show(args, &ctx),
        Commands::Sort(args) => run_sort(args, &ctx),
        Commands::Compare(args) => run_compare(args, &ctx),
        Commands::Distance(args) => run_distance(args, &ctx),
        Commands::Colors(args) => run_colors(args, &ctx),
        Commands::Random(args) => run_random(args, &ctx),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
