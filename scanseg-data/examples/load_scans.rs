//! Walks a dataset root and logs the shape and value range of every sample.
//!
//! ```text
//! RUST_LOG=info cargo run -p scanseg-data --example load_scans -- path/to/data [seed]
//! ```
//!
//! The root must contain `scans/` and `labels/` with matching filenames.

use scanseg_data::{LoaderConfig, Mode, SampleProducer, ScanSegError};

fn main() -> Result<(), ScanSegError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let root = args.next().unwrap_or_else(|| "data".to_string());
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let config = LoaderConfig::builder().root(root).seed(seed).build()?;
    let mut producer = SampleProducer::from_config(&config)?;

    for mode in [Mode::Train, Mode::Test] {
        producer.set_mode(mode);
        let view = producer.view();
        println!("\n--- {} [{}, {}) ---", mode, view.start(), view.end());
        for sample in producer.iter() {
            let sample = sample?;
            let (lo, hi) = sample.image.value_range().unwrap_or((0.0, 0.0));
            let (label_lo, label_hi) = sample.label.value_range().unwrap_or((0.0, 0.0));
            println!(
                "sample {:>4}: image {:?} in [{:.3}, {:.3}], label {:?} in [{}, {}]",
                sample.index,
                sample.image.shape(),
                lo,
                hi,
                sample.label.shape(),
                label_lo,
                label_hi
            );
        }
    }
    Ok(())
}
