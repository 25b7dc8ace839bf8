// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use httplog::{redact_headers, HeaderExclusion, HttpLoggingInterceptor};
use reqwest::header::{HeaderMap, HeaderValue};

fn redaction_benchmark(c: &mut Criterion) {
    let mut headers = HeaderMap::new();
    headers.insert("authorization", HeaderValue::from_static("Bearer abc"));
    headers.insert("accept", HeaderValue::from_static("*/*"));
    headers.insert("user-agent", HeaderValue::from_static("httplog-bench"));
    headers.append("cookie", HeaderValue::from_static("a=1"));
    headers.append("cookie", HeaderValue::from_static("b=2"));

    let exclusion = HeaderExclusion::parse(["authorization", "cookie"]).unwrap();

    c.bench_function("redact_headers", |b| {
        b.iter(|| black_box(redact_headers(black_box(&headers), &exclusion)))
    });
}

fn skip_check_benchmark(c: &mut Criterion) {
    let logging = HttpLoggingInterceptor::builder()
        .set_skip_urls(["/health", "/metrics", "/static/", ".png"])
        .unwrap()
        .build();
    let urls = [
        "https://api.example.com/v1/users/42",
        "https://api.example.com/health",
        "https://cdn.example.com/static/app.js",
    ];

    c.bench_function("skip_url_check", |b| {
        b.iter(|| {
            for url in &urls {
                black_box(logging.is_skipped(url));
            }
        })
    });
}

criterion_group!(benches, redaction_benchmark, skip_check_benchmark);
criterion_main!(benches);
