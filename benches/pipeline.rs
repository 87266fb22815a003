use criterion::{criterion_group, criterion_main, Criterion};
use lambdagen::config::GeneratorConfig;
use lambdagen::generator::{plan, AskamaEngine, LambdaView, RenderContext, TemplateEngine};
use lambdagen::model::AnnotationEntity;
use lambdagen::pipeline::{canonical_chain, PipelineOptions};
use std::hint::black_box;

fn bench_chain(c: &mut Criterion) {
    let options = PipelineOptions::default();
    c.bench_function("canonical_chain", |b| {
        b.iter(|| {
            let out = canonical_chain(&options).invoke().expect("chain");
            black_box(out.lambdas.len());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let plan = plan(&GeneratorConfig::default()).expect("plan");
    let contexts: Vec<RenderContext> = plan
        .cache
        .lambdas()
        .iter()
        .step_by(64)
        .filter_map(LambdaView::from_lambda)
        .map(|view| RenderContext::new(view, AnnotationEntity::functional_interface()))
        .collect();
    c.bench_function("render_builtin", |b| {
        b.iter(|| {
            for context in &contexts {
                let source = AskamaEngine.render(context).expect("render");
                black_box(&source);
            }
        })
    });
}

criterion_group!(benches, bench_chain, bench_render);
criterion_main!(benches);
