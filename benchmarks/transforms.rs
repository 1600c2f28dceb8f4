//! Benchmarks each transformation on a freshly reset image.
use brunch::Bench;

use pixel_glitch::{Error, ProcessingEngine};

#[derive(Clone, Copy, Debug)]
enum Transform {
    SortRows(u8),
    SortColumns(u8),
    Slide { count: u32, max: u32 },
    Shuffle(u32),
}

struct Glitch {
    transform: Transform,
    sz: u32,
}

impl Glitch {
    fn name(&self) -> String {
        format!("transform({:?}, {})", self.transform, self.sz)
    }

    fn prepare(self) -> Result<impl FnMut(), Error> {
        let data: Vec<u8> = (0..self.sz * self.sz)
            .flat_map(|i| {
                let v = (i.wrapping_mul(2_654_435_761) >> 24) as u8;
                [v, v ^ 0x5a, v.wrapping_add(97), 0xff]
            })
            .collect();

        let mut engine = ProcessingEngine::with_seed(self.sz, self.sz, 0)?;
        engine.load_base_image(self.sz, self.sz, &data)?;

        let transform = self.transform;
        Ok(move || {
            engine.reset_image().unwrap();
            match transform {
                Transform::SortRows(threshold) => engine.process_pixel_sort(threshold, false),
                Transform::SortColumns(threshold) => engine.process_pixel_sort(threshold, true),
                Transform::Slide { count, max } => engine.process_rect_slide(count, max),
                Transform::Shuffle(count) => engine.process_area_shuffle(count),
            }
            .unwrap()
        })
    }
}

fn main() {
    let tests = [
        Glitch {
            transform: Transform::SortRows(150),
            sz: 512,
        },
        Glitch {
            transform: Transform::SortRows(255),
            sz: 512,
        },
        // Columns gather through a scratch line.
        Glitch {
            transform: Transform::SortColumns(150),
            sz: 512,
        },
        Glitch {
            transform: Transform::Slide { count: 10, max: 50 },
            sz: 512,
        },
        Glitch {
            transform: Transform::Shuffle(5),
            sz: 512,
        },
        Glitch {
            transform: Transform::Shuffle(50),
            sz: 512,
        },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(tests.map(|glitch| {
        Bench::new(format!("pixel_glitch::{}", glitch.name()))
            .run(glitch.prepare().expect("Failed to setup benchmark"))
    }));
    benches.finish();
}
