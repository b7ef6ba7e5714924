use clap::Parser;
use hbmatch::cli::Cli;
use hbmatch::output::Output;
use hbmatch::{load_data, logging, read_template, render_str};
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        let use_color = !cli.no_color && atty::is(atty::Stream::Stderr);
        Output::new(use_color).print_error(&err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let template = read_template(&cli.template)?;
    let data = load_data(&cli.data_source())?;
    let rendered = render_str(&template, &data, &cli.render_options())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
