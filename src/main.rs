use std::process::ExitCode;

fn main() -> ExitCode {
    toad::entry::run()
}
