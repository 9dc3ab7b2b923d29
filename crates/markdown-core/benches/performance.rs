use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markdown_core::{
    AnnotationRange, StylePartition, StyleTag, TextEdit, TextRange, minimal_replacement,
    wrap_paragraph,
};

fn long_paragraph(word_count: usize) -> String {
    let mut out = String::with_capacity(word_count * 8);
    for i in 0..word_count {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("word{i:04}"));
    }
    out
}

fn bench_partition_insert(c: &mut Criterion) {
    // a heading line plus heavily nested inlines, repeated down the document
    c.bench_function("partition_insert/3k_overlapping", |b| {
        b.iter(|| {
            let mut partition = StylePartition::new(100_000);
            for i in 0..1_000usize {
                let base = i * 100;
                partition
                    .insert(TextRange::new(base, base + 80), StyleTag::ListItem)
                    .unwrap();
                partition
                    .insert(TextRange::new(base + 10, base + 40), StyleTag::Emphasis)
                    .unwrap();
                partition
                    .insert(TextRange::new(base + 20, base + 60), StyleTag::Strong)
                    .unwrap();
            }
            black_box(partition.len());
        })
    });
}

fn bench_reflow(c: &mut Criterion) {
    let text = long_paragraph(2_000);
    c.bench_function("reflow/2k_words", |b| {
        b.iter(|| {
            let wrapped = wrap_paragraph(black_box(&text), 80, 2, 2).unwrap();
            black_box(wrapped.len());
        })
    });
}

fn bench_minimal_replacement(c: &mut Criterion) {
    let original = long_paragraph(2_000);
    let wrapped = wrap_paragraph(&original, 80, 0, 0).unwrap();

    c.bench_function("minimal_replacement/2k_words", |b| {
        b.iter(|| {
            let replacement = minimal_replacement(black_box(&original), black_box(&wrapped));
            black_box(replacement);
        })
    });
}

fn bench_annotation_fanout(c: &mut Criterion) {
    let mut ranges: Vec<AnnotationRange> = (0..10_000)
        .map(|i| AnnotationRange::new(i * 10, i * 10 + 6))
        .collect();
    let edit = TextEdit::new(50_000, 3, 1);

    c.bench_function("annotation_fanout/10k_ranges", |b| {
        b.iter(|| {
            for range in ranges.iter_mut() {
                range.apply_edit(black_box(&edit));
            }
            black_box(ranges.len());
        })
    });
}

criterion_group!(
    benches,
    bench_partition_insert,
    bench_reflow,
    bench_minimal_replacement,
    bench_annotation_fanout
);
criterion_main!(benches);
