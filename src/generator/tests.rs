#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::GeneratorConfig;
use crate::model::{AnnotationEntity, Lambda, LambdaType, MethodSignature, Parameter, TypeEntity};
use crate::pipeline::GeneratorError;
use std::cell::Cell;
use std::fs;

fn planned(config: &GeneratorConfig, name: &str) -> Lambda {
    let plan = plan(config).unwrap();
    plan.cache.find(name).cloned().unwrap()
}

fn view(name: &str) -> LambdaView {
    LambdaView::from_lambda(&planned(&GeneratorConfig::default(), name)).unwrap()
}

#[test]
fn test_apply_jdk_suffix() {
    let base = Lambda::new(LambdaType::Runnable).with_name("Runnable");
    let renamed = apply_jdk_suffix(vec![
        base.clone().with_from_jdk(true),
        base.clone()
            .with_name("ThrowableRunnable")
            .with_throwable(true)
            .with_from_jdk(true),
        base.clone().with_name("Task"),
    ]);
    let names: Vec<_> = renamed.iter().map(|l| l.name().unwrap()).collect();
    assert_eq!(names, vec!["Runnable2", "ThrowableRunnable", "Task"]);
}

#[test]
fn test_plan_is_sorted_and_validated() {
    let plan = plan(&GeneratorConfig::default()).unwrap();
    assert_eq!(plan.cache.len(), 16418);
    let keys: Vec<_> = plan
        .cache
        .lambdas()
        .iter()
        .map(|l| (l.package().unwrap(), l.name().unwrap()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_plan_renames_jdk_duplicates() {
    let config = GeneratorConfig::default();
    let plan = plan(&config).unwrap();
    for name in ["Function2", "BiFunction2", "IntBinaryOperator2", "Runnable2", "Comparator2"] {
        let lambda = plan.cache.find(name).unwrap();
        assert!(lambda.from_jdk(), "{name}");
    }
    assert!(plan.cache.find("Function").is_none());
    let twin = plan.cache.find("ThrowableFunction").unwrap();
    assert!(twin.from_jdk());
    assert!(twin.throwable());
}

#[test]
fn test_plan_respects_root_package() {
    let config = GeneratorConfig {
        root_package: "com.acme.fn".to_string(),
        throwing: false,
        ..GeneratorConfig::default()
    };
    let lambda = planned(&config, "ByteFunction");
    assert_eq!(lambda.package(), Some("com.acme.fn.function.primitive"));
    assert!(plan(&config).unwrap().cache.find("ThrowableByteFunction").is_none());
}

#[test]
fn test_view_of_throwing_function() {
    let view = view("ThrowableByteFunction");
    assert_eq!(view.package, "io.lambdagen.function.primitive");
    assert_eq!(view.type_params, "<R>");
    assert_eq!(view.method_name, "applyThrows");
    assert_eq!(view.method_decl, "R applyThrows(byte t) throws Throwable");
    assert_eq!(view.plain_decl, "R apply(byte t)");
    assert!(view.returns_value);
    assert!(view.throwable);
}

#[test]
fn test_builtin_template_plain() {
    let context = RenderContext::new(
        view("ByteToFloatFunction"),
        AnnotationEntity::functional_interface(),
    );
    let source = AskamaEngine.render(&context).unwrap();
    assert!(source.starts_with("package io.lambdagen.function.conversion;\n"));
    assert!(source.contains("@FunctionalInterface\npublic interface ByteToFloatFunction {"));
    assert!(source.contains("    float applyAsFloat(byte t);\n"));
    assert!(source.contains("Converts byte to float."));
    assert!(!source.contains("default"));
    assert!(source.ends_with("}\n") || source.ends_with('}'));
}

#[test]
fn test_builtin_template_throwing() {
    let context = RenderContext::new(
        view("ThrowableConsumer"),
        AnnotationEntity::functional_interface(),
    );
    let source = AskamaEngine.render(&context).unwrap();
    assert!(source.contains("public interface ThrowableConsumer<T> {"));
    assert!(source.contains("void acceptThrows(T t) throws Throwable;"));
    assert!(source.contains("default void accept(T t) {"));
    assert!(source.contains("acceptThrows(t);"));
    assert!(!source.contains("return acceptThrows"));
    assert!(source.contains("throw new RuntimeException(e);"));
}

#[test]
fn test_builtin_template_mentions_jdk_type() {
    let context = RenderContext::new(view("Supplier2"), AnnotationEntity::default());
    let source = AskamaEngine.render(&context).unwrap();
    assert!(source.contains("<code>Supplier</code>"));
    assert!(!source.contains("@FunctionalInterface"));
}

#[test]
fn test_jinja_engine_sees_same_context() {
    let engine = JinjaEngine::new(
        "{{ lambda.package }}.{{ lambda.name }}|{{ lambda.method_decl }}|{{ annotation.values | join(',') }}\n",
    )
    .unwrap();
    let context = RenderContext::new(
        view("ObjIntConsumer2"),
        AnnotationEntity::functional_interface().with("@Generated"),
    );
    let rendered = engine.render(&context).unwrap();
    assert_eq!(
        rendered,
        "io.lambdagen.consumer.obj.ObjIntConsumer2|void accept(T t, int u)|@FunctionalInterface,@Generated\n"
    );
}

#[test]
fn test_jinja_engine_reports_syntax_errors() {
    assert!(JinjaEngine::new("{% if lambda.name %}unterminated").is_err());
}

#[test]
fn test_jinja_engine_renders_repeatedly() {
    let engine = JinjaEngine::new("{{ lambda.name }}").unwrap();
    for name in ["Runnable2", "ThrowableRunnable", "ByteFunction"] {
        let context = RenderContext::new(view(name), AnnotationEntity::default());
        assert_eq!(engine.render(&context).unwrap(), name);
    }
}

#[test]
fn test_jinja_engine_reports_render_errors() {
    let engine = JinjaEngine::new("{{ lambda.name | nosuchfilter }}").unwrap();
    let context = RenderContext::new(view("Runnable2"), AnnotationEntity::default());
    assert!(engine.render(&context).is_err());
}

#[test]
fn test_view_requires_finished_lambda() {
    let lambda = Lambda::new(LambdaType::Runnable).with_name("Task");
    assert!(LambdaView::from_lambda(&lambda).is_none());

    let lambda = lambda
        .with_package("io.x")
        .with_method(MethodSignature {
            name: "run".to_string(),
            base_name: "run".to_string(),
            return_type: "void".to_string(),
            parameters: vec![],
            throws: None,
        });
    let view = LambdaView::from_lambda(&lambda).unwrap();
    assert!(!view.returns_value);
    assert_eq!(view.type_params, "");
}

#[test]
fn test_render_all_writes_package_layout() {
    let dir = tempfile::tempdir().unwrap();
    let comparator = Lambda::new(LambdaType::Comparator)
        .with_arity(2)
        .with_input(1, TypeEntity::placeholder("T"))
        .with_input(2, TypeEntity::placeholder("T"))
        .with_package("io.x.comparator")
        .with_method(MethodSignature {
            name: "compare".to_string(),
            base_name: "compare".to_string(),
            return_type: "int".to_string(),
            parameters: vec![
                Parameter {
                    java_type: "T".to_string(),
                    name: "o1".to_string(),
                },
                Parameter {
                    java_type: "T".to_string(),
                    name: "o2".to_string(),
                },
            ],
            throws: None,
        })
        .with_name("Comparator2");
    let plan = Plan {
        cache: vec![comparator].into(),
        report: Default::default(),
    };
    let written = render_all(
        &plan,
        &AskamaEngine,
        &AnnotationEntity::functional_interface(),
        dir.path(),
        "java",
    )
    .unwrap();
    assert_eq!(written, 1);
    let path = dir.path().join("io/x/comparator/Comparator2.java");
    let source = fs::read_to_string(path).unwrap();
    assert!(source.contains("public interface Comparator2<T> {"));
    assert!(source.contains("int compare(T o1, T o2);"));
}

/// Fails every render and counts the attempts.
struct FailingEngine {
    calls: Cell<usize>,
}

impl TemplateEngine for FailingEngine {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn render(&self, _context: &RenderContext) -> anyhow::Result<String> {
        self.calls.set(self.calls.get() + 1);
        anyhow::bail!("template blew up")
    }
}

#[test]
fn test_render_all_stops_at_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        throwing: false,
        ..GeneratorConfig::default()
    };
    let lambdas = vec![planned(&config, "ByteFunction"), planned(&config, "Runnable2")];
    let plan = Plan {
        cache: lambdas.into(),
        report: Default::default(),
    };
    let engine = FailingEngine {
        calls: Cell::new(0),
    };
    let err = render_all(
        &plan,
        &engine,
        &AnnotationEntity::default(),
        dir.path(),
        "java",
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("template blew up"));
    assert!(err.to_string().contains("failed to render"));
    assert_eq!(engine.calls.get(), 1);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_generate_requires_output_dir() {
    let err = generate(&GeneratorConfig::default()).unwrap_err();
    assert!(err.to_string().contains("no output directory"));
}

#[test]
fn test_generate_rejects_invalid_config_before_running() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        output_dir: Some(dir.path().to_path_buf()),
        root_package: "not a package".to_string(),
        ..GeneratorConfig::default()
    };
    assert!(generate(&config).is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_validation_error_is_surfaced() {
    let issues = crate::pipeline::validate_lambdas(&[
        Lambda::new(LambdaType::Runnable),
        Lambda::new(LambdaType::Runnable),
    ]);
    let err = GeneratorError::Validation(issues);
    assert!(err.to_string().contains("duplicate_key"));
}
