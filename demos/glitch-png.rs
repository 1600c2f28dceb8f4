//! Glitch a PNG file with the default slide, sort and shuffle pass.
//!
//! Usage: `cargo run --example glitch-png -- <input.png> [output.png] [seed]`
use pixel_glitch::{GlitchSettings, ProcessingEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let input = args.next().ok_or("missing input path")?;
    let output = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/glitch.png").to_owned());
    let seed = match args.next() {
        Some(seed) => seed.parse()?,
        None => ProcessingEngine::DEFAULT_SEED,
    };

    // The engine works on RGBA8, let `image` decode and convert whatever the file holds.
    let image = image::open(&input)?.to_rgba8();
    let (width, height) = image.dimensions();

    let mut engine = ProcessingEngine::with_seed(width, height, seed)?;
    engine.load_base_image(width, height, image.as_raw())?;
    GlitchSettings::default().apply(&mut engine)?;

    // Copy the working image into a buffer that `image` can encode.
    let container = engine.get_pixel_data()?.to_owned();
    let glitched = image::RgbaImage::from_raw(width, height, container).ok_or("buffer size")?;
    glitched.save(&output)?;

    Ok(())
}
