//! Compressive-strength journal: enter three cubes and print the protocol
//!
//! Writes the protocol into `./protocols` (or the directory given as the
//! first argument). An optional `LABDESK_CONFIG` YAML file overrides the
//! built-in laboratory settings.

use labdesk::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🧪 labdesk: compressive-strength journal\n");

    let config = match std::env::var("LABDESK_CONFIG") {
        Ok(path) => LabConfig::from_yaml_file(&path)?,
        Err(_) => LabConfig::default_config(),
    };
    let mut lab = Laboratory::new(&config)?;

    {
        let form = lab.form_mut();
        form.concrete_class = Some(ConcreteClass::B20);
        form.performer = "Иванов И.И.".to_string();
    }

    for (number, load, notes) in [("1", 200.0, ""), ("2", 225.0, ""), ("3", 198.0, "скол")] {
        let form = lab.form_mut();
        form.sample_number = number.to_string();
        form.destructive_load = Some(load);
        form.notes = notes.to_string();
        form.recompute_strength();

        let notice = lab.submit_sample();
        println!("✅ {}: {}", notice.title, notice.description);
    }

    // Rejected: no sample number
    lab.form_mut().destructive_load = Some(210.0);
    let notice = lab.submit_sample();
    println!("❌ {}: {}", notice.title, notice.description);

    if let Some(summary) = lab.journal().summary() {
        println!(
            "\n📋 {}: средняя {:.2} МПа, мин {:.2}, макс {:.2}",
            summary.count_label(),
            summary.average,
            summary.min,
            summary.max
        );
    }

    let dir = std::env::args().nth(1).unwrap_or_else(|| "protocols".to_string());
    let sink = FileDocumentSink::new(dir);
    if let Some(document) = lab.generate_protocol(&sink)? {
        println!("\n📄 {} ({} bytes)", document.title, document.body.len());
        for path in sink.written()? {
            println!("   → {}", path.display());
        }
    }

    let cleared = lab.clear_journal(&|prompt: &str| {
        println!("\n❓ {} [y]", prompt);
        true
    });
    println!("🗑  Journal cleared: {}", cleared);

    Ok(())
}
