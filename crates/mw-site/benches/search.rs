//! Benchmarks for navigation search and page rendering.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mw_content::{ContentStore, ContentStoreBuilder};
use mw_site::memory::{MemoryDisplay, MemoryLocation};
use mw_site::{NavigationList, SearchFilter, Session, UiEvent};

/// Create a store with `count` pages of a few paragraphs each.
fn create_store(count: usize) -> ContentStore {
    let mut builder = ContentStoreBuilder::new();
    for i in 0..count {
        let body = format!(
            "<h1>Page {i}</h1>\n{}",
            "<p>Resource mapping notes for Patient and Observation.</p>\n".repeat(40)
        );
        builder = builder.with_page(format!("page-{i}"), format!("Page {i}"), body);
    }
    builder.build()
}

fn bench_search_builtin(c: &mut Criterion) {
    let store = ContentStore::builtin();
    let filter = SearchFilter::new(store);
    let mut navigation = NavigationList::from_store(store);

    let mut group = c.benchmark_group("search_builtin");

    for query in ["bundle", "PATIENT", "no-such-term"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| filter.apply_query(&mut navigation, query));
        });
    }

    group.finish();
}

fn bench_search_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_sizes");

    for count in [10, 100, 1000] {
        let store = create_store(count);
        let filter = SearchFilter::new(&store);
        let mut navigation = NavigationList::from_store(&store);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| filter.apply_query(&mut navigation, "observation"));
        });
    }

    group.finish();
}

fn bench_session_click(c: &mut Criterion) {
    let store = ContentStore::builtin();
    let mut session = Session::new(store, MemoryDisplay::new(), MemoryLocation::new());
    session.start();

    c.bench_function("session_click", |b| {
        b.iter(|| {
            session.dispatch(UiEvent::Click("glossary".into()));
            session.dispatch(UiEvent::Click("intro".into()));
        });
    });
}

criterion_group!(
    benches,
    bench_search_builtin,
    bench_search_varying_sizes,
    bench_session_click,
);

criterion_main!(benches);
