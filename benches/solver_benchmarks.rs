//! Performance benchmarks for the equation solver.
//!
//! Covers the pure core (parse, solve) and a full request through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use equation_solver::api::{create_router, AppState};
use equation_solver::config::ServerConfig;
use equation_solver::parser::parse;
use equation_solver::solver::{solve, solve_str};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Benchmark: parsing equations of increasing length.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for input in ["x=5", "2x+3y=12", "x + y + z = 1", "  2.5 a  -  .75 b = -1024.125 "] {
        group.bench_with_input(BenchmarkId::from_parameter(input.trim()), input, |b, input| {
            b.iter(|| parse(black_box(input)))
        });
    }
    group.finish();
}

/// Benchmark: solving already-parsed equations.
fn bench_solve(c: &mut Criterion) {
    let two_term = (parse("2x+3y=12").unwrap(), parse("x-y=1").unwrap());
    let completed = (parse("x=5").unwrap(), parse("x+y=9").unwrap());
    let degenerate = (parse("x+y=2").unwrap(), parse("2x+2y=4").unwrap());

    c.bench_function("solve_two_term", |b| {
        b.iter(|| solve(black_box(&two_term.0), black_box(&two_term.1)))
    });
    c.bench_function("solve_with_completion", |b| {
        b.iter(|| solve(black_box(&completed.0), black_box(&completed.1)))
    });
    c.bench_function("solve_degenerate", |b| {
        b.iter(|| solve(black_box(&degenerate.0), black_box(&degenerate.1)))
    });
    c.bench_function("solve_str", |b| {
        b.iter(|| solve_str(black_box("2x + 3y = 12"), black_box("x - y = 1")))
    });
}

/// Benchmark: a full GET /solution through the router.
fn bench_http_solution(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(ServerConfig::default()));

    c.bench_function("http_solution", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .uri("/solution?equation1=2x%2B3y%3D12&equation2=x-y%3D1")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_parse, bench_solve, bench_http_solution);
criterion_main!(benches);
