use anyhow::Result;
use console::style;
use ino_core::ResourceEnvironment;

pub fn run(env: &ResourceEnvironment, json: bool) -> Result<()> {
    let dist_dir = env.get("arduino_dist_dir").ok();

    if json {
        let entries: serde_json::Map<String, serde_json::Value> = env
            .entries()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
            .collect();
        let report = serde_json::json!({
            "templates_dir": env.templates_dir(),
            "build_dir": env.build_dir(),
            "src_dir": env.src_dir(),
            "hex_filename": env.hex_filename(),
            "hex_path": env.hex_path(),
            "arduino_dist_dir": dist_dir,
            "arduino_dist_dir_guesses": env.arduino_dist_dir_guesses(),
            "entries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("templates_dir: {}", env.templates_dir());
    println!("build_dir: {}", env.build_dir());
    println!("src_dir: {}", env.src_dir());
    println!("hex_filename: {}", env.hex_filename());
    println!("hex_path: {}", env.hex_path());
    match dist_dir {
        Some(dir) => println!("arduino_dist_dir: {dir}"),
        None => println!("arduino_dist_dir: {}", style("(unset)").dim()),
    }
    println!("arduino_dist_dir_guesses:");
    for guess in env.arduino_dist_dir_guesses() {
        println!("  - {guess}");
    }

    let mut entries = env.entries().peekable();
    if entries.peek().is_some() {
        println!("entries:");
        for (key, value) in entries {
            println!("  {key} = {value}");
        }
    }

    Ok(())
}
