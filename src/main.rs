use clap::Parser;
use corpus_seeder::{Cli, CorpusSeeder, OutputFormatter, OutputMode, SeederError, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create CorpusSeeder instance
    let seeder = match CorpusSeeder::from_cli(&cli) {
        Ok(seeder) => seeder,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    // Execute the extraction-and-seeding pass
    match seeder.seed_corpus() {
        Ok(report) => {
            seeder.output_formatter().print_seed_report(&report);
            0
        }
        Err(e) => {
            seeder.handle_error(&e);

            // Map error types to appropriate exit codes
            match e {
                SeederError::Config { .. } => 2,
                SeederError::CorpusWrite { .. } => 3,
                _ => 1, // General error
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "corpus-seeder.toml".to_string());

    match CorpusSeeder::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  corpus-seeder --config {}", config_path);
            println!("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &SeederError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let cli = Cli {
            tests_dir: None,
            extension: None,
            corpus_dir: None,
            stages: None,
            config: Some(config_path.clone()),
            output_format: corpus_seeder::cli::OutputFormat::Human,
            verbose: 0,
            quiet: false,
            dry_run: false,
            generate_config: true,
        };

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[input]"));
    }
}
