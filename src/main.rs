use anyhow::{bail, Result};
use std::env;

use finscope::{audit, educate, locales, logger, LessonRequest, RegionCode};

fn main() -> Result<()> {
    logger::init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("lesson") => run_lesson(&args[2..])?,
        Some("regions") => run_regions(),
        Some("audit") => run_audit()?,
        _ => print_usage(),
    }

    Ok(())
}

fn print_usage() {
    println!("FinScope - localized financial lessons");
    println!();
    println!("Usage:");
    println!("  finscope lesson <name> <region> <topic...>   Print a lesson (region: US, IN, KE)");
    println!("  finscope regions                             List regions and recognized topics");
    println!("  finscope audit                               Check locale tables for missing fields");
}

fn run_lesson(args: &[String]) -> Result<()> {
    if args.len() < 3 {
        bail!("usage: finscope lesson <name> <region> <topic...>");
    }

    let region: RegionCode = args[1].parse()?;
    // Multi-word topics may arrive unquoted
    let topic = args[2..].join(" ");
    let request = LessonRequest::new(args[0].clone(), region, topic);

    let lesson = educate(&request)?;
    print!("{}", lesson);

    Ok(())
}

fn run_regions() {
    for region in RegionCode::ALL {
        let table = locales::table(region);
        println!(
            "{}  {} ({}, {})",
            region, table.default.region, table.default.language, table.default.currency
        );
        for topic in table.recognized_topics() {
            println!("    • {}", topic);
        }
        println!("    • anything else → default lesson");
    }
}

fn run_audit() -> Result<()> {
    let defects = audit();

    if defects.is_empty() {
        println!("✓ All locale tables complete");
        return Ok(());
    }

    for defect in &defects {
        println!("❌ {}", defect);
    }
    bail!("{} incomplete locale field(s)", defects.len());
}
