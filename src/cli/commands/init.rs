//! Init command handler
//!
//! Interactive first-run setup: asks for a project name and file pattern,
//! then writes a `.heliumrc` seeded from the compiled-in defaults. The
//! report pipeline itself never prompts; it requires the file to exist.

use helium::config::Config;
use std::io::{self, Write};
use std::path::Path;

/// Run the init command.
pub fn run(config_path: &Path, force: bool) {
    if config_path.exists() && !force {
        eprintln!(
            "✗ {} already exists (use --force to overwrite)",
            config_path.display()
        );
        std::process::exit(1);
    }

    let mut config = Config::from_defaults();

    if let Some(name) = prompt("Project name: ") {
        if !name.is_empty() {
            config.project.name = name;
        }
    }

    if let Some(pattern) = prompt("Pattern (leave blank for all Python files): ") {
        if !pattern.is_empty() {
            config.project.pattern = pattern;
        }
    }

    if let Err(e) = config.save_to(config_path) {
        eprintln!("Failed to write {}: {e}", config_path.display());
        std::process::exit(1);
    }

    println!("✓ Created {}", config_path.display());
    println!("  Run `helium report` to generate a report.");
}

/// Read one trimmed line from stdin after printing `message`.
fn prompt(message: &str) -> Option<String> {
    print!("{message}");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok()?;
    Some(response.trim().to_string())
}
