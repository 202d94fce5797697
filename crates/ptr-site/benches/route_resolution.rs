//! Benchmarks for tree resolution and navigation projections.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ptr_site::{breadcrumbs, resolve, sidebar_projection};
use ptr_tree::{DirectoryDef, DocTree, PageDef, TreeBuilder};

/// Build a tree with the specified depth and breadth.
fn build_tree(depth: usize, breadth: usize) -> DocTree {
    fn build_dir(current_depth: usize, max_depth: usize, breadth: usize, i: usize) -> DirectoryDef {
        let mut dir = DirectoryDef::new(format!("Section {i}"), format!("section-{i}"));
        if current_depth < max_depth {
            for j in 0..breadth {
                dir = dir.child(build_dir(current_depth + 1, max_depth, breadth, j));
            }
        } else {
            for j in 0..breadth {
                dir = dir.child(
                    PageDef::new(format!("Page {j}"), format!("page-{j}")).component("doc"),
                );
            }
        }
        dir
    }

    let mut builder = TreeBuilder::new();
    for i in 0..breadth {
        builder = builder.child(build_dir(1, depth, breadth, i));
    }
    builder.build().unwrap()
}

/// Deepest resolvable route in a tree built by [`build_tree`].
fn deep_route(depth: usize) -> String {
    let mut route = "section-0".to_owned();
    for _ in 1..depth {
        route.push_str("/section-0");
    }
    route.push_str("/page-0");
    route
}

fn bench_resolve(c: &mut Criterion) {
    let tree = build_tree(3, 5);

    let mut group = c.benchmark_group("resolve");

    group.bench_function("shallow_hit", |b| b.iter(|| resolve(&tree, "section-0")));

    group.bench_function("deep_hit", |b| {
        let route = deep_route(3);
        b.iter(|| resolve(&tree, &route))
    });

    group.bench_function("miss", |b| b.iter(|| resolve(&tree, "nonexistent/path")));

    group.finish();
}

fn bench_sidebar(c: &mut Criterion) {
    let mut group = c.benchmark_group("sidebar");

    for (depth, breadth) in [(2, 5), (3, 4), (4, 3)] {
        let tree = build_tree(depth, breadth);

        group.bench_with_input(
            BenchmarkId::new("build_tree", format!("d{depth}_b{breadth}")),
            &tree,
            |b, tree| b.iter(|| sidebar_projection(tree)),
        );
    }

    group.finish();
}

fn bench_breadcrumbs(c: &mut Criterion) {
    let tree = build_tree(5, 3);

    let mut group = c.benchmark_group("breadcrumbs");

    group.bench_function("depth_2", |b| {
        b.iter(|| breadcrumbs(&tree, "section-0/section-0"))
    });

    group.bench_function("depth_5", |b| {
        let route = deep_route(5);
        b.iter(|| breadcrumbs(&tree, &route))
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_sidebar, bench_breadcrumbs);
criterion_main!(benches);
