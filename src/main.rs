use sprig::error::ShellError;
use sprig::flags::Flags;
use sprig::shell::Shell;
use std::env;

fn init_logging(flags: &Flags) {
    let level = if flags.is_set("debug") {
        "debug"
    } else if flags.is_set("quiet") {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("sprig: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("sprig {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&flags);

    let mut shell = Shell::new(flags)?;
    shell.run()
}
