//! Generate a bcrypt hash for one of the built-in API users.
//!
//! The output is suitable for `AUTH_USER_PASSWORD_HASH` or
//! `AUTH_ADMIN_PASSWORD_HASH`.
//!
//! Usage:
//!     cargo run -p scripts --bin generate_password_hash -- [user|admin]

use std::io::{self, Write};

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}\n> ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> io::Result<()> {
    let account = std::env::args().nth(1).unwrap_or_else(|| "admin".to_string());
    let variable = match account.as_str() {
        "user" => "AUTH_USER_PASSWORD_HASH",
        "admin" => "AUTH_ADMIN_PASSWORD_HASH",
        other => {
            eprintln!("Error: unknown account '{}', expected 'user' or 'admin'", other);
            std::process::exit(2);
        }
    };

    let password = read_line(&format!("Enter the password for '{}':", account))?;
    if password.is_empty() {
        eprintln!("Error: Password cannot be empty");
        std::process::exit(1);
    }

    if password != read_line("Confirm password:")? {
        eprintln!("Error: Passwords do not match");
        std::process::exit(1);
    }

    println!("\nGenerating hash (this may take a moment)...\n");

    match bcrypt::hash(&password, bcrypt::DEFAULT_COST) {
        Ok(hash) => {
            println!("Add this to your environment or .env file:\n");
            println!("{}=\"{}\"", variable, hash);
        }
        Err(e) => {
            eprintln!("Error: Failed to hash password: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
