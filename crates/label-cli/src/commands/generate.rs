use crate::cli::{ConfigArgs, DescriptorArgs};
use crate::support::{complete_config_or_exit, descriptor, print_json};
use label_kernel::label;
use serde_json::json;

pub fn run(config_args: &ConfigArgs, resource: DescriptorArgs, json_output: bool) {
    let config = complete_config_or_exit(config_args);
    let descriptor = descriptor(resource);

    let generated = label(&config, &descriptor);
    let tags_without_name = generated.tags_without_name();
    tracing::debug!(id = %generated.id, "generated label");

    if json_output {
        print_json(&json!({
            "id": generated.id,
            "tags": generated.tags,
            "tags_without_name": tags_without_name,
        }));
    } else {
        println!("id: {}", generated.id);
        println!("tags:");
        for (key, value) in &generated.tags {
            println!("  {key}: {value}");
        }
    }
}
