use std::process;

fn main() {
    env_logger::init();

    if let Err(err) = account_ledger::app::run(std::env::args()) {
        eprintln!("{err}");
        process::exit(1);
    }
}
