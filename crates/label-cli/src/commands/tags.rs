use crate::cli::{ConfigArgs, DescriptorArgs};
use crate::support::{complete_config_or_exit, descriptor, print_json};
use label_kernel::label;

pub fn run(config_args: &ConfigArgs, resource: DescriptorArgs, without_name: bool) {
    let config = complete_config_or_exit(config_args);
    let descriptor = descriptor(resource);

    let generated = label(&config, &descriptor);
    tracing::debug!(
        resource_type = %descriptor.resource_type,
        tag_count = generated.tags.len(),
        "generated tags"
    );

    if without_name {
        print_json(&generated.tags_without_name());
    } else {
        print_json(&generated.tags);
    }
}
