use pixel_glitch::{Error, GlitchSettings, ProcessingEngine};

fn checkerboard(width: u32, height: u32) -> Vec<u8> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| if (x + y) % 2 == 0 { 0x20 } else { 0xe0 }))
        .flat_map(|v: u8| [v, v / 2, 255 - v, 0xff])
        .collect()
}

#[test]
fn defaults() {
    let settings = GlitchSettings::default();
    assert!(settings.sort.enabled && settings.slide.enabled && settings.shuffle.enabled);
    assert!(!settings.sort.vertical);
    assert_eq!(settings.sort.threshold, 150);
    assert_eq!((settings.slide.count, settings.slide.max_distance), (10, 50));
    assert_eq!(settings.shuffle.count, 5);
}

#[test]
fn apply_starts_from_base() -> Result<(), Error> {
    let image = checkerboard(32, 24);
    let settings = GlitchSettings::default();

    let mut engine = ProcessingEngine::with_seed(32, 24, 11)?;
    engine.load_base_image(32, 24, &image)?;
    settings.apply(&mut engine)?;
    let once = engine.get_pixel_data()?.to_vec();

    // The sort draws nothing and is discarded, the pass restarts from the base image.
    let mut fresh = ProcessingEngine::with_seed(32, 24, 11)?;
    fresh.load_base_image(32, 24, &image)?;
    fresh.process_pixel_sort(255, true)?;
    settings.apply(&mut fresh)?;
    assert_eq!(fresh.get_pixel_data()?, &once[..]);

    Ok(())
}

#[test]
fn apply_matches_manual_order() -> Result<(), Error> {
    let image = checkerboard(17, 29);
    let mut settings = GlitchSettings::default();
    settings.sort.vertical = true;
    settings.sort.threshold = 200;

    let mut by_settings = ProcessingEngine::with_seed(17, 29, 5)?;
    by_settings.load_base_image(17, 29, &image)?;
    settings.apply(&mut by_settings)?;

    let mut by_hand = ProcessingEngine::with_seed(17, 29, 5)?;
    by_hand.load_base_image(17, 29, &image)?;
    by_hand.process_rect_slide(10, 50)?;
    by_hand.process_pixel_sort(200, true)?;
    by_hand.process_area_shuffle(5)?;

    assert_eq!(by_settings.get_pixel_data()?, by_hand.get_pixel_data()?);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn partial_settings_fill_defaults() {
    let settings: GlitchSettings =
        serde_json::from_str(r#"{ "sort": { "threshold": 90 }, "shuffle": { "enabled": false } }"#)
            .expect("valid settings");

    assert_eq!(settings.sort.threshold, 90);
    assert!(settings.sort.enabled);
    assert!(!settings.shuffle.enabled);
    assert_eq!(settings.slide, GlitchSettings::default().slide);

    let json = serde_json::to_string(&settings).expect("serializable");
    let back: GlitchSettings = serde_json::from_str(&json).expect("round trip");
    assert_eq!(back, settings);
}
