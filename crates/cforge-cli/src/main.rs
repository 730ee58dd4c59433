//! cforge — C project boilerplate generator.
//!
//! Single command: `cforge <stem> [-d] [-m] [-u]`. Creates `<cwd>/<stem>/`
//! containing a skeletal C source file and, per the flags, a header file, a
//! Makefile, and the fixed mmap/hexdump utility module.

mod output;

use clap::Parser;

use cforge_core::project;
use cforge_core::request::GenerationRequest;

#[derive(Parser)]
#[command(
    name = "cforge",
    about = "C project boilerplate generator — skeleton source, header, Makefile, mmap utilities",
    version
)]
struct Cli {
    /// Name of program. Source and header will be named this.
    stem: String,

    /// Add a header file
    #[arg(short = 'd', long = "create_header")]
    create_header: bool,

    /// Add a makefile
    #[arg(short = 'm', long = "create_makefile")]
    create_makefile: bool,

    /// Add the mmap/hexdump utility module and a file-mapping main()
    #[arg(short = 'u', long = "create_utility_functions")]
    create_utility_functions: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(err) = run(&cli) {
        output::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
    output::print_ok();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let request = GenerationRequest {
        stem: cli.stem.clone(),
        include_header: cli.create_header,
        include_makefile: cli.create_makefile,
        include_utility: cli.create_utility_functions,
    };

    let working_dir = std::env::current_dir()?;
    let written = project::generate(&request, &working_dir)?;
    for path in &written {
        tracing::info!(path = %path.display(), "generated");
    }
    Ok(())
}
