use crate::cli::{ConfigArgs, DescriptorArgs};
use crate::settings;
use label_kernel::{LabelConfig, ResourceDescriptor};
use serde::Serialize;

/// Resolve configuration or exit with the resolution error.
pub fn config_or_exit(args: &ConfigArgs) -> LabelConfig {
    settings::resolve(args).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

/// Resolve configuration and require every mandatory value.
///
/// The generators are never reached with an incomplete record; all missing
/// values are reported in one message.
pub fn complete_config_or_exit(args: &ConfigArgs) -> LabelConfig {
    let config = config_or_exit(args);
    if let Err(e) = config.ensure_complete() {
        tracing::debug!(error = %e, "completeness gate rejected configuration");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
    config
}

pub fn descriptor(args: DescriptorArgs) -> ResourceDescriptor {
    ResourceDescriptor {
        resource_type: args.resource_type,
        qualifier: args.qualifier,
        instance_key: args.instance_key,
        delimiter: args.delimiter,
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("json serialization")
    );
}
