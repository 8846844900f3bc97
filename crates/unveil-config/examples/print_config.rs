/// Example program to print the loaded configuration
///
/// Run with: cargo run -p unveil-config --example print_config

fn main() {
    // Load configuration from unveil.toml
    let config = unveil_config::UnveilConfig::load();

    println!("=== Unveil Configuration ===\n");

    println!("Demo Settings:");
    println!("  Scenario: {:?}", config.demo.scenario);
    println!();

    println!("Viewport Settings:");
    println!("  Height: {}", config.viewport.height);
    println!();

    println!("Motion Settings:");
    println!("  Speed: {}", config.motion.speed);
    println!("  Reduced Motion: {}", config.motion.reduced_motion);
    println!("  Time Scale: {}", config.motion.time_scale());
    println!();

    println!("Contact Settings:");
    println!("  Submit Delay (ms): {}", config.contact.submit_delay_ms);
    println!("  Fail Submissions: {}", config.contact.fail_submissions);
    println!();

    // Try to serialize to TOML for verification
    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
