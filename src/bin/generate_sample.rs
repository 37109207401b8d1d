use anyhow::{Context, Result};
use marks_viewer::sample::{SimpleRng, sample_mark};

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_marks.csv".to_string());
    let students = 200;

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record(["student_id", "marks"])?;
    for id in 1..=students {
        let mark = sample_mark(&mut rng, 68.0, 12.0);
        writer.write_record([id.to_string(), format!("{mark:.1}")])?;
    }
    writer.flush().context("flushing CSV writer")?;

    log::info!("Wrote {students} marks to {output_path}");
    println!("Wrote {students} marks to {output_path}");
    Ok(())
}
