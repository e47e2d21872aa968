use sbsh::core::config::Config;
use sbsh::error::ShellError;
use sbsh::flags::Flags;
use sbsh::input::LineSource;
use sbsh::shell::{report, Shell};
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report::fatal(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), ShellError> {
    let mut flags = Flags::new();
    flags.parse(args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("sbsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let script = flags.script()?;
    let config = Config::from_flags(&flags);
    sbsh::logging::init(config.debug);

    let source = match script {
        Some(path) => LineSource::script(Path::new(path))?,
        None => LineSource::interactive(&config)?,
    };

    let mut shell = Shell::new(config, source)?;
    shell.run()
}
