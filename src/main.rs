use clap::Parser;
use maze2twine::cli::Cli;
use maze2twine::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        maze2twine::cli::completions::run(shell)?;
        return Ok(());
    }

    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };
    maze2twine::cli::build::run(&cli, &printer)?;

    Ok(())
}
