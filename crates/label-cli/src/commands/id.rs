use crate::cli::{ConfigArgs, DescriptorArgs};
use crate::support::{complete_config_or_exit, descriptor};
use label_kernel::generate_id;

pub fn run(config_args: &ConfigArgs, resource: DescriptorArgs) {
    let config = complete_config_or_exit(config_args);
    let descriptor = descriptor(resource);

    let id = generate_id(&config, &descriptor);
    tracing::debug!(resource_type = %descriptor.resource_type, %id, "generated id");
    println!("{id}");
}
