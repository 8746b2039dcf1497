//! Performance benchmarks for lineup

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lineup::test_utils::{RecordingDiagnostics, TestDir};
use lineup::{FileProcessor, TransformChain, Walker};

const PROSE: &str = "It was the best of times, it was the worst of times,\r\n\
it was the age of wisdom, it was the age of foolishness,\r\n\
it was the epoch of belief, it was the epoch of incredulity.\r\n";

const ACCENTED: &str = "Là où les élèves étudient, la forêt chuchote.\n\
Straße, Größe, Maß und Fuß.\n\
Ελληνικά κείμενα για δοκιμή.\n";

fn create_tree(file_count: usize, dirs: usize) -> TestDir {
    let dir = TestDir::new();
    for i in 0..file_count {
        let path = format!("dir_{}/file_{}.txt", i % dirs, i);
        dir.add_file(&path, &PROSE.repeat(10));
    }
    dir
}

fn bench_transform_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_chain");

    let ascii = PROSE.repeat(100);
    group.bench_function("ascii_crlf", |b| {
        b.iter(|| TransformChain::uppercase_numbered().apply_str(black_box(&ascii)))
    });

    let unicode = ACCENTED.repeat(100);
    group.bench_function("unicode", |b| {
        b.iter(|| TransformChain::uppercase_numbered().apply_str(black_box(&unicode)))
    });

    group.finish();
}

fn bench_process_file(c: &mut Criterion) {
    let dir = TestDir::new();
    let small = dir.add_file("small.txt", PROSE);
    let large = dir.add_file("large.txt", &PROSE.repeat(5_000));
    let processor = FileProcessor::default();

    let mut group = c.benchmark_group("process_file");
    group.bench_function("small", |b| {
        b.iter(|| {
            processor.process(black_box(&small), &mut RecordingDiagnostics::default())
        })
    });
    group.bench_function("large", |b| {
        b.iter(|| {
            processor.process(black_box(&large), &mut RecordingDiagnostics::default())
        })
    });
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    group.sample_size(20);

    // Outputs from earlier iterations are processed again on later ones, so
    // every iteration walks a fresh tree.
    group.bench_function("tree_50_files", |b| {
        b.iter_with_setup(
            || create_tree(50, 5),
            |tree| {
                Walker::default().explore(tree.path(), &mut RecordingDiagnostics::default());
                tree
            },
        )
    });

    group.finish();
}

criterion_group!(benches, bench_transform_chain, bench_process_file, bench_walk);
criterion_main!(benches);
