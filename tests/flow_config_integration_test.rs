use anyhow::Result;
use counted_flow::app::{input, output, output::OutputFormat};
use counted_flow::core::ReportSink;
use counted_flow::utils::validation::Validate;
use counted_flow::{Branch, FileSink, FlowConfig, FlowError, FlowRunner, FunctionRegistry};
use serde_json::json;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const FLOW: &str = r#"
[flow]
name = "singleton-upper"
description = "Uppercase a lone value, otherwise report lengths"
version = "1.0"

[branch]
predicate = { has_size = 1 }
then = "uppercase"
else = "length"

[single]
apply = "uppercase"
fallback = "<ambiguous>"

[output]
format = "csv"
"#;

fn write_temp(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_file_driven_flow_to_csv() -> Result<()> {
    let config_file = write_temp(FLOW)?;
    let input_file = write_temp(r#"["red", "green", "blue"]"#)?;
    let out_dir = TempDir::new()?;
    let out_path = out_dir.path().join("report.csv");

    let config = FlowConfig::from_file(config_file.path())?;
    config.validate()?;
    let format: OutputFormat = config.output_format().unwrap_or("json").parse()?;

    let runner = FlowRunner::new(config, FunctionRegistry::with_builtins());
    let report = runner.run(input::load_values(input_file.path())?)?;

    assert_eq!(report.branch, Branch::Else);
    assert_eq!(report.mapped_values(), vec![&json!(3), &json!(5), &json!(4)]);
    assert_eq!(
        report.single.as_ref().map(|s| (s.matched, s.value.clone())),
        Some((false, json!("<ambiguous>")))
    );

    FileSink::new(&out_path).write_report(&output::render(&report, format)?)?;

    let written = std::fs::read_to_string(&out_path)?;
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines, vec!["index,original,mapped", "0,red,3", "1,green,5", "2,blue,4"]);
    Ok(())
}

#[test]
fn test_single_value_flow_to_json() -> Result<()> {
    let config = FlowConfig::from_toml_str(FLOW)?;
    let runner = FlowRunner::new(config, FunctionRegistry::with_builtins());

    let report = runner.run(input::inline_values(&["hello".to_string()]))?;
    let rendered = output::render(&report, OutputFormat::Json)?;
    let parsed: serde_json::Value = serde_json::from_str(&rendered)?;

    assert_eq!(parsed["branch"], "then");
    assert_eq!(parsed["predicate"], "size == 1");
    assert_eq!(parsed["pairs"][0]["mapped"], "HELLO");
    assert_eq!(parsed["single"]["matched"], true);
    assert_eq!(parsed["single"]["value"], "HELLO");
    assert!(parsed["generated_at"].is_string());
    Ok(())
}

#[test]
fn test_custom_registry_function() -> Result<()> {
    let config = FlowConfig::from_toml_str(
        r#"
[flow]
name = "custom"

[branch]
predicate = "not_empty"
then = "square"
else = "identity"
"#,
    )?;

    let mut registry = FunctionRegistry::empty();
    registry
        .register("square", |v| {
            v.as_i64()
                .map(|n| json!(n * n))
                .unwrap_or(serde_json::Value::Null)
        })
        .register("identity", |v| v.clone());

    let report = FlowRunner::new(config, registry).run(vec![json!(3), json!(4)])?;
    assert_eq!(report.mapped_values(), vec![&json!(9), &json!(16)]);
    Ok(())
}

#[test]
fn test_fail_policy_reports_fallback_error() -> Result<()> {
    let config = FlowConfig::from_toml_str(&FLOW.replace(
        "fallback = \"<ambiguous>\"",
        "on_mismatch = \"fail\"",
    ))?;
    let runner = FlowRunner::new(config, FunctionRegistry::with_builtins());

    let err = runner.run(vec![]).unwrap_err();
    assert!(matches!(err, FlowError::FallbackError { .. }));
    assert_eq!(err.severity(), counted_flow::utils::error::ErrorSeverity::Medium);
    Ok(())
}
