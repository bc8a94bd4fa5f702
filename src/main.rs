use std::process;

fn main() {
    let code = xanter::cli::run();
    process::exit(code);
}
