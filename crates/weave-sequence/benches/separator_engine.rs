//! Benchmarks for separator rendering.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use weave_sequence::{CodegenWriter, Fragment, RenderOptions, RenderSequenceExt, Template};

/// Generate `count` items, every third one spanning several lines.
fn generate_items(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if i % 3 == 0 {
                format!("fn item_{i}() {{\n    body();\n}}")
            } else {
                format!("const ITEM_{i}: u32 = {i};")
            }
        })
        .collect()
}

fn bench_presets(c: &mut Criterion) {
    let items = generate_items(1_000);
    let mut group = c.benchmark_group("presets");
    group.throughput(Throughput::Elements(items.len() as u64));

    let presets = [
        ("auto_spacer", RenderOptions::LINE_BREAKS_WITH_AUTO_SPACER),
        ("spacer", RenderOptions::LINE_BREAKS_WITH_SPACER),
        ("multi_line_csv", RenderOptions::MULTI_LINE_CSV),
    ];
    for (name, options) in presets {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut writer = CodegenWriter::new();
                writer
                    .render(items.iter().map(String::as_str).render_with(options.clone()))
                    .unwrap();
                writer.into_string()
            });
        });
    }
    group.finish();
}

fn bench_nested_templates(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_templates");

    for modules in [10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(modules), &modules, |b, &n| {
            b.iter(|| {
                let blocks: Vec<Fragment> = (0..n)
                    .map(|i| {
                        let body: Fragment = generate_items(10).into();
                        Template::parse(&format!("mod m{i} {{{{\n{{0}}\n}}}}"), vec![body])
                            .unwrap()
                            .into()
                    })
                    .collect();
                let mut writer = CodegenWriter::new();
                writer.render(blocks.render()).unwrap();
                writer.into_string()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_presets, bench_nested_templates);
criterion_main!(benches);
