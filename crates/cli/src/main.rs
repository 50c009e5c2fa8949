//! gk-rename binary
//!
//! Parses arguments and hands them to [`gk_rename::run`].

use clap::Parser;

fn main() {
    // Fatal errors are rendered by miette
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    // Missing or empty --key/--value exits here with a usage error
    let cli = gk_rename::Cli::parse();

    // Recoverable failures are only counted in the summary and still exit 0
    if let Err(e) = gk_rename::run(cli) {
        let miette_error = miette::Report::msg(format!("{e:#}"));
        eprintln!("{miette_error:?}");
        std::process::exit(1);
    }
}
