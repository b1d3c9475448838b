fn main() {
    if let Err(err) = rapido_terminal::run() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
