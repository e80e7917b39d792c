// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use fract::{output, Renderer, HEIGHT, MAX_ITERATIONS, WIDTH};

fn render_single(c: &mut Criterion) {
    let renderer = Renderer::new(WIDTH, HEIGHT, MAX_ITERATIONS);
    c.bench_function("render 400x400 single", move |b| {
        b.iter(|| renderer.render_single())
    });
}

fn render_threaded(c: &mut Criterion) {
    let renderer = Renderer::new(WIDTH, HEIGHT, MAX_ITERATIONS);
    let threads = num_cpus::get();
    c.bench_function("render 400x400 all cores", move |b| {
        b.iter(|| renderer.render(threads).unwrap())
    });
}

fn encode(c: &mut Criterion) {
    let image = Renderer::new(WIDTH, HEIGHT, MAX_ITERATIONS).render_single();
    c.bench_function("encode 400x400 png", move |b| {
        b.iter(|| output::encode_png(&image).unwrap())
    });
}

criterion_group!(benches, render_single, render_threaded, encode);
criterion_main!(benches);
