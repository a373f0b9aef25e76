/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Odometer Configuration ===\n");

    println!("Morph Settings:");
    println!("  Base Duration: {}ms", config.morph.base_duration_ms());
    println!("  Easing: {:?}", config.morph.easing);
    println!("  Font Size: {}", config.morph.style.font_size);
    println!("  Soft Wrap: {}", config.morph.soft_wrap);
    println!("  Overflow: {:?}", config.morph.overflow);
    println!("  Max Width: {:?}", config.morph.max_width);
    if let Err(err) = config.morph.validate() {
        println!("  (invalid: {err})");
    }
    println!();

    println!("Demo Settings:");
    println!("  Frame Interval: {}ms", config.demo.frame_ms);
    println!("  Old Text: {:?}", config.demo.old_text);
    println!("  New Text: {:?}", config.demo.new_text);
    println!();

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
