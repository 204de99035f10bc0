use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use paintshop_catalog::{
    AreaId, CategoryId, ColorId, Facet, FacetValue, FilterSelection, FinishId, PriceRange, Product, option_counts,
    recompute,
};
use paintshop_core::ProductId;

const TYPES: [&str; 5] = ["interior-paint", "exterior-paint", "primer", "varnish", "enamel"];
const AREAS: [&str; 4] = ["walls", "facades", "wood", "metal"];
const FINISHES: [&str; 4] = ["matt", "satin", "semi-gloss", "gloss"];
const COLORS: [&str; 6] = ["white", "grey", "black", "red", "blue", "green"];

fn synthetic_catalog(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| Product {
            id: ProductId::new(),
            name: format!("product {i}"),
            product_type: CategoryId::new(TYPES[i % TYPES.len()]).unwrap(),
            area: AreaId::new(AREAS[i % AREAS.len()]).unwrap(),
            finish: FinishId::new(FINISHES[i % FINISHES.len()]).unwrap(),
            color: ColorId::new(COLORS[i % COLORS.len()]).unwrap(),
            price: (i % 1000) as f64,
        })
        .collect()
}

fn narrow_selection() -> FilterSelection {
    FilterSelection::new()
        .with(FacetValue::ProductType(CategoryId::new("primer").unwrap()))
        .with(FacetValue::Finish(FinishId::new("matt").unwrap()))
        .with(FacetValue::Price(PriceRange::new(100.0, 400.0).unwrap()))
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    for size in [1_000usize, 10_000, 100_000] {
        let catalog = synthetic_catalog(size);
        let selection = narrow_selection();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("unfiltered", size), &catalog, |b, catalog| {
            b.iter(|| recompute(black_box(catalog), black_box(&FilterSelection::new())))
        });
        group.bench_with_input(BenchmarkId::new("three_facets", size), &catalog, |b, catalog| {
            b.iter(|| recompute(black_box(catalog), black_box(&selection)))
        });
    }
    group.finish();
}

fn bench_option_counts(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);
    let selection = narrow_selection();
    c.bench_function("option_counts/color/10000", |b| {
        b.iter(|| option_counts(black_box(&catalog), black_box(&selection), Facet::Color))
    });
}

criterion_group!(benches, bench_recompute, bench_option_counts);
criterion_main!(benches);
