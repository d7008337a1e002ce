use std::io;

fn main() {
    warsim_cli::logging::init_logging();
    let code = warsim_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
