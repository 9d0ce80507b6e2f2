//! Benchmarks for navigation tree queries.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nb_config::{NavEntry, NavSection, SiteConfig, ThemeConfig};
use nb_nav::{find, flatten, neighbours, validate};

/// Build a forest with `breadth` sections per level, `depth` levels deep and
/// `breadth` pages in every section.
fn create_forest(depth: usize, breadth: usize) -> SiteConfig {
    fn create_section(
        prefix: &str,
        current_depth: usize,
        depth: usize,
        breadth: usize,
    ) -> NavSection {
        let mut children: Vec<NavEntry> = (0..breadth)
            .map(|i| NavEntry::document(format!("{prefix}/page-{i}.md")))
            .collect();

        if current_depth < depth {
            children.extend((0..breadth).map(|i| {
                let child_prefix = format!("{prefix}/section-{i}");
                create_section(&child_prefix, current_depth + 1, depth, breadth).into()
            }));
        }

        NavSection::new(format!("Section {prefix}"), children)
    }

    let sidebar = (0..breadth)
        .map(|i| create_section(&format!("/root-{i}"), 1, depth, breadth))
        .collect();

    SiteConfig {
        theme_config: ThemeConfig {
            sidebar,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for (depth, breadth) in [(2, 5), (3, 4), (4, 3)] {
        let config = create_forest(depth, breadth);
        group.bench_with_input(
            BenchmarkId::new("count", format!("d{depth}_b{breadth}")),
            &config,
            |b, config| b.iter(|| flatten(config).count()),
        );
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let config = create_forest(4, 3);

    let mut group = c.benchmark_group("find");

    group.bench_function("first_page", |b| {
        b.iter(|| find(&config, "/root-0/page-0.md"))
    });

    group.bench_function("deep_page", |b| {
        b.iter(|| find(&config, "/root-2/section-2/section-2/section-2/page-2.md"))
    });

    group.bench_function("not_found", |b| b.iter(|| find(&config, "/nonexistent.md")));

    group.finish();
}

fn bench_neighbours(c: &mut Criterion) {
    let config = create_forest(4, 3);

    c.bench_function("neighbours_last_page", |b| {
        b.iter(|| neighbours(&config, "/root-2/section-2/section-2/section-2/page-2.md"))
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for (depth, breadth) in [(2, 5), (4, 3)] {
        let config = create_forest(depth, breadth);
        group.bench_with_input(
            BenchmarkId::new("forest", format!("d{depth}_b{breadth}")),
            &config,
            |b, config| b.iter(|| validate(config)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_flatten,
    bench_find,
    bench_neighbours,
    bench_validate,
);

criterion_main!(benches);
