use triage_core::sanitize::pipeline::sanitize_file;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: message_sanitizer <path/to/slack_message.json>");
        std::process::exit(2);
    }
    let path = std::path::Path::new(&args[1]);
    if !path.exists() {
        eprintln!("error: {} does not exist", path.display());
        std::process::exit(1);
    }

    match sanitize_file(path) {
        Ok(()) => {
            println!("Sanitized message written to {}", path.display());
        }
        Err(e) => {
            eprintln!("failed to sanitize {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
