use crate::cli::ConfigArgs;
use crate::support::{config_or_exit, print_json};
use serde_json::json;

pub fn run(config_args: &ConfigArgs, json_output: bool) {
    let config = config_or_exit(config_args);
    let missing = config.missing_fields();
    let domain = config.domain();

    if json_output {
        print_json(&json!({
            "config": config,
            "domain": domain,
            "complete": missing.is_empty(),
            "missing": missing,
        }));
        return;
    }

    let show = |value: &str| {
        if value.is_empty() {
            "(unset)".to_string()
        } else {
            value.to_string()
        }
    };
    println!("label config");
    println!();
    println!("  tenant: {}", show(&config.tenant));
    println!("  environment: {}", show(&config.environment));
    println!("  stage: {}", show(&config.stage));
    println!("  workspace: {}", show(&config.workspace));
    println!("  namespace: {}", show(&config.namespace));
    println!("  delimiter: {}", config.delimiter);
    println!("  segment policy: {}", config.segment_policy);
    println!("  domain: {}", domain.join(", "));
    if missing.is_empty() {
        println!("  complete: yes");
    } else {
        println!("  complete: no (missing {})", missing.join(", "));
    }
}
