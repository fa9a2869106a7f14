//! Synthetic Browsing Example
//!
//! Generates a directory of snapshot files for a fake training run, loads
//! them into a collection, prints the score-sorted listing, and renders the
//! figures for the best snapshot without waiting on a console.
//!
//! Run with: cargo run --example synthetic_browse

use std::fs;
use std::io::Cursor;

use rand::Rng;
use results_browser::browse::{cell_states_figure, targets_outputs_figure};
use results_browser::collection::ResultCollection;
use results_browser::session::{pick_record, print_listing};
use tempfile::TempDir;

const EPOCHS: u64 = 8;
const SAMPLES: usize = 64;
const CELLS: usize = 4;

fn main() -> anyhow::Result<()> {
    println!("=== Synthetic Result Browsing ===\n");

    // -------------------------------------------------------------------------
    // 1. Write one snapshot per epoch, error decaying as training goes
    // -------------------------------------------------------------------------
    println!("1. Generating snapshots...");

    let dir = TempDir::new()?;
    let stamp = chrono::Local::now().format("%Y-%m-%d-%H:%M:%S");
    let mut rng = rand::thread_rng();

    for epoch in 0..EPOCHS {
        let noise = 0.5 / (epoch as f64 + 1.0);
        let mse = noise * noise;

        let mut targets = Vec::with_capacity(SAMPLES * 2);
        let mut outputs = Vec::with_capacity(SAMPLES * 2);
        let mut cell_states = Vec::with_capacity(SAMPLES * CELLS);

        for sample in 0..SAMPLES {
            let phase = sample as f64 / 8.0;
            for ctrl in 0..2 {
                let target = 0.5 + 0.4 * (phase + f64::from(ctrl)).sin();
                targets.push(target);
                outputs.push(target + rng.gen_range(-noise..noise));
            }
            for cell in 0..CELLS {
                cell_states.push((phase * (cell as f64 + 1.0)).cos());
            }
        }

        let doc = serde_json::json!({
            "epoch": epoch,
            "mse": mse,
            "ctrls": [1, 74],
            "cell_count": CELLS,
            "sample_count": SAMPLES as u64,
            "targets": targets,
            "outputs": outputs,
            "cell_states": cell_states,
        });

        let name = format!("results-{stamp}-e{epoch}.json");
        fs::write(dir.path().join(&name), doc.to_string())?;
        println!("   wrote {name}");
    }

    // -------------------------------------------------------------------------
    // 2. Load the directory into a collection
    // -------------------------------------------------------------------------
    println!("\n2. Loading the result directory...");

    let collection = ResultCollection::from_dirs(&[dir.path()])?;
    println!("   loaded {} snapshots", collection.len());

    // -------------------------------------------------------------------------
    // 3. Print the score-sorted listing
    // -------------------------------------------------------------------------
    println!("\n3. Listing (best first):\n");

    let records = collection.sorted_records();
    let mut stdout = std::io::stdout();
    print_listing(&mut stdout, &records)?;

    // -------------------------------------------------------------------------
    // 4. Select the best snapshot with a scripted console
    // -------------------------------------------------------------------------
    println!("4. Selecting index 0...");

    let mut scripted = Cursor::new(&b"0\n"[..]);
    let picked = pick_record(&mut scripted, &mut stdout, &records)?
        .ok_or_else(|| anyhow::anyhow!("scripted selection must pick a record"))?;
    println!("\n   picked epoch {} (MSE = {})", picked.epoch(), picked.mse());

    // -------------------------------------------------------------------------
    // 5. Build and render both figures
    // -------------------------------------------------------------------------
    println!("\n5. Rendering figures...");

    let figures = [targets_outputs_figure(picked), cell_states_figure(picked)];
    for figure in &figures {
        let file_name = format!("{}.png", figure.title().to_lowercase().replace(' ', "_"));
        let path = dir.path().join(file_name);
        figure.render_png(&path, (1200, 700))?;
        println!(
            "   {} ({} series) -> {}",
            figure.title(),
            figure.series().len(),
            path.display()
        );
    }

    println!("\n=== Browsing Complete ===");
    Ok(())
}
