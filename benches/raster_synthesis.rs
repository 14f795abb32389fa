use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dicom_loadgen::image_pipeline::{GeneratorConfig, Phantom, RasterPlan, RasterSynthesizer};
use dicom_loadgen::image_pipeline::sizing::MIB;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark_phantoms(c: &mut Criterion) {
    let mut group = c.benchmark_group("phantom_1024x1024");

    let phantoms = vec![
        (Phantom::Ct, "ct"),
        (Phantom::Mr, "mr"),
        (Phantom::Ultrasound, "us"),
        (Phantom::Generic, "generic"),
    ];

    for (phantom, label) in phantoms {
        group.bench_with_input(BenchmarkId::from_parameter(label), &phantom, |b, phantom| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| phantom.synthesize(black_box(1024), black_box(1024), &mut rng).unwrap());
        });
    }

    group.finish();
}

fn benchmark_by_target_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("ct_by_target_size");
    group.sample_size(10);

    for megabytes in [1u64, 4, 16] {
        let plan = RasterPlan::for_target(megabytes * MIB, &GeneratorConfig::default());
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}MB", megabytes)),
            &plan,
            |b, plan| {
                let mut rng = StdRng::seed_from_u64(0);
                b.iter(|| Phantom::Ct.synthesize(plan.width, plan.height, &mut rng).unwrap());
            },
        );
    }

    group.finish();
}

fn benchmark_serialization(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let raster = Phantom::Generic.synthesize(2048, 2048, &mut rng).unwrap();

    c.bench_function("raster_to_le_bytes_2048", |b| {
        b.iter(|| black_box(&raster).to_le_bytes());
    });
}

criterion_group!(
    benches,
    benchmark_phantoms,
    benchmark_by_target_size,
    benchmark_serialization
);
criterion_main!(benches);
