#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use opus_batch_translate::pipelines::translation::{
    BatchTranslator, BatchTranslatorConfig, MarianLoader, MarianTranslator, TargetLanguage,
    Translator, TranslatorLoader,
};
use opus_batch_translate::resources::ModelSource;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tch::Device;

const SENTENCES: [&str; 10] = [
    "In findings published Tuesday in Cornell University's arXiv by a team of scientists from the University of Montreal and a separate report published Wednesday in Nature Astronomy by a team from University College London (UCL), the presence of water vapour was confirmed in the atmosphere of K2-18b, a planet circling a star in the constellation Leo.",
    "This is the first such discovery in a planet in its star's habitable zone, not too hot and not too cold for liquid water to exist.",
    "They found that certain wavelengths of light, which are usually absorbed by water, weakened when the planet was in the way.",
    "The team from UCL then analyzed the Montreal team's data using their own software and confirmed their conclusion.",
    "This was not the first time scientists have found signs of water on an exoplanet.",
    "This is the first potentially habitable planet where the temperature is right and where we now know there is water.",
    "It's the best candidate for habitability right now.",
    "Further observations will be required to say for sure.",
    "K2-18b was first identified in 2015 by the Kepler space telescope.",
    "It is about 110 light-years from Earth and larger but less dense.",
];

fn create_loader() -> MarianLoader {
    MarianLoader::new(ModelSource::default()).with_device(Device::cuda_if_available())
}

fn translation_forward_pass(iters: u64, translator: &MarianTranslator, data: &[String]) -> Duration {
    let mut duration = Duration::new(0, 0);
    for _i in 0..iters {
        let start = Instant::now();
        let _ = translator.translate_batch(data);
        duration = duration.checked_add(start.elapsed()).unwrap();
    }
    duration
}

fn translation_load_model(iters: u64, target_language: &TargetLanguage) -> Duration {
    let mut duration = Duration::new(0, 0);
    for _i in 0..iters {
        let start = Instant::now();
        create_loader().load(target_language).unwrap();
        duration = duration.checked_add(start.elapsed()).unwrap();
    }
    duration
}

fn translation_file(iters: u64, input: &Path, output: &Path) -> Duration {
    let config = BatchTranslatorConfig::default();
    let batch_translator = BatchTranslator::new(config, create_loader()).unwrap();
    let mut duration = Duration::new(0, 0);
    for _i in 0..iters {
        let start = Instant::now();
        batch_translator.translate_all(input, output).unwrap();
        duration = duration.checked_add(start.elapsed()).unwrap();
    }
    duration
}

fn bench_translation(c: &mut Criterion) {
    //    Set-up translation model
    unsafe {
        torch_sys::dummy_cuda_dependency();
    }
    let spanish = TargetLanguage::new("es").unwrap();
    let translator = create_loader().load(&spanish).unwrap();

    //    Define input
    let input: Vec<String> = SENTENCES.iter().map(|s| spanish.tag(s)).collect();

    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.txt");
    let output_path = dir.path().join("output.txt");
    let mut content = String::from("english\n");
    for _ in 0..3 {
        for sentence in SENTENCES.iter() {
            content.push_str(sentence);
            content.push('\n');
        }
    }
    fs::write(&input_path, content).unwrap();

    c.bench_function("Translation forward pass", |b| {
        b.iter_custom(|iters| black_box(translation_forward_pass(iters, &translator, &input)))
    });

    c.bench_function("Load model", |b| {
        b.iter_custom(|iters| black_box(translation_load_model(iters, &spanish)))
    });

    c.bench_function("Translate file", |b| {
        b.iter_custom(|iters| black_box(translation_file(iters, &input_path, &output_path)))
    });
}

criterion_group! {
name = benches;
config = Criterion::default().sample_size(10);
targets = bench_translation
}

criterion_main!(benches);
