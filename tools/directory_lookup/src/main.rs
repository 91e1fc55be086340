use triage_core::directory::lookup::{search_users, LookupMatch, LookupOptions};
use triage_core::directory::model::Directory;

const USAGE: &str =
    "usage: directory_lookup [--limit N] [--include-bots] [--json] <directory.json> <query>...";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut options = LookupOptions::default();
    let mut json_output = false;
    let mut positional: Vec<String> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--limit" => {
                let value = match iter.next() {
                    Some(v) => v,
                    None => {
                        eprintln!("{}", USAGE);
                        std::process::exit(2);
                    }
                };
                options.limit = match value.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("invalid --limit value: {}", value);
                        std::process::exit(2);
                    }
                };
            }
            "--include-bots" => options.include_bots = true,
            "--json" => json_output = true,
            other if other.starts_with("--") => {
                eprintln!("unknown flag: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(2);
            }
            _ => positional.push(arg.clone()),
        }
    }

    if positional.len() < 2 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let path = std::path::Path::new(&positional[0]);
    let directory = match Directory::load(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("failed to load {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let results: Vec<Vec<LookupMatch>> = positional[1..]
        .iter()
        .map(|query| search_users(query, &directory, options))
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results).unwrap());
    } else {
        emit_table(&results);
    }
}

fn emit_table(groups: &[Vec<LookupMatch>]) {
    for group in groups {
        if group.is_empty() {
            println!("No matches found.");
            println!("{}", "-".repeat(60));
            continue;
        }
        println!("Query: {}", group[0].query);
        println!("{}", "-".repeat(60));
        for m in group {
            let name = m
                .real_name
                .as_deref()
                .or(m.display_name.as_deref())
                .unwrap_or("(unknown)");
            println!("{:<12}  {}", m.id.as_deref().unwrap_or("(no id)"), name);
            if let Some(display) = &m.display_name {
                println!("  Display: {}", display);
            }
            if let Some(email) = &m.email {
                println!("  Email:   {}", email);
            }
            println!("  Reason:  {} (score {})", m.reason, m.score);
            println!();
        }
        println!("{}", "-".repeat(60));
    }
}
