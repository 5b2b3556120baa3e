use std::time::Duration;

use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

use ngram_sim::{Granularity, NgramSimilarity};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_TIME: Duration = Duration::from_secs(5);
const MEASURE_TIME: Duration = Duration::from_secs(10);

const NUM_DOCUMENTS: [usize; 3] = [100, 300, 1000];
const WORDS_PER_DOCUMENT: usize = 50;
const VOCABULARY_SIZE: usize = 500;
const WINDOW_SIZES: [usize; 3] = [1, 2, 3];

fn random_documents(num_documents: usize) -> Vec<String> {
    let mut rng = thread_rng();
    let vocabulary: Vec<String> = (0..VOCABULARY_SIZE)
        .map(|_| {
            let len = rng.gen_range(2..10);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect();
    let dist = Uniform::new(0, VOCABULARY_SIZE);
    (0..num_documents)
        .map(|_| {
            (0..WORDS_PER_DOCUMENT)
                .map(|_| vocabulary[rng.sample(dist)].as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn criterion_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let documents = random_documents(NUM_DOCUMENTS[NUM_DOCUMENTS.len() - 1]);
    add_similar_pairs_benches(&mut group, &documents, Granularity::Char);
    add_similar_pairs_benches(&mut group, &documents, Granularity::Word);
}

macro_rules! bench_common {
    ($name:expr, $method:ident, $documents:ident, $granularity:ident, $group:ident) => {
        for &window_size in &WINDOW_SIZES {
            let comparer = NgramSimilarity::new($granularity, window_size).unwrap();
            for &num_documents in &NUM_DOCUMENTS {
                let documents = &$documents[..num_documents];
                let bench_name = format!("{}/{}/{window_size}/{num_documents}", $name, $granularity);
                $group.bench_function(bench_name, |b| {
                    b.iter(|| {
                        if comparer.$method(documents, 0.5).unwrap().len() == usize::MAX {
                            panic!();
                        }
                    });
                });
            }
        }
    };
}

fn add_similar_pairs_benches(
    group: &mut BenchmarkGroup<WallTime>,
    documents: &[String],
    granularity: Granularity,
) {
    bench_common!("similar_pairs", similar_pairs, documents, granularity, group);
    bench_common!(
        "similar_pairs_in_parallel",
        similar_pairs_in_parallel,
        documents,
        granularity,
        group
    );
}

criterion_group!(benches, criterion_random);
criterion_main!(benches);
