//! AWS ECS container metadata
//!
//! ECS writes a JSON description of the running container to the file named
//! by `ECS_CONTAINER_METADATA_FILE` when metadata is enabled for the task.

use infra_fs::{NormalizedPath, io};
use serde::Deserialize;

use crate::env::EnvSource;
use crate::error::{Error, Result};

/// Variable naming the metadata file.
pub const METADATA_FILE_VAR: &str = "ECS_CONTAINER_METADATA_FILE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ContainerMetadata {
    pub cluster: String,
    #[serde(rename = "ContainerInstanceARN")]
    pub container_instance_arn: String,
    #[serde(rename = "TaskARN")]
    pub task_arn: String,
    pub task_definition_family: String,
    pub task_definition_revision: String,
    #[serde(rename = "ContainerID")]
    pub container_id: String,
    pub container_name: String,
    pub docker_container_name: String,
    #[serde(rename = "ImageID")]
    pub image_id: String,
    pub image_name: String,
    pub port_mappings: Vec<PortMapping>,
    pub networks: Vec<Network>,
    pub metadata_file_status: String,
    pub availability_zone: String,
    #[serde(rename = "HostPrivateIPv4Address")]
    pub host_private_ipv4_address: String,
    #[serde(rename = "HostPublicIPv4Address")]
    pub host_public_ipv4_address: String,
}

impl ContainerMetadata {
    /// True when no container was described.
    pub fn is_zero(&self) -> bool {
        self.container_id.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PortMapping {
    pub container_port: u16,
    pub host_port: u16,
    #[serde(rename = "BindIp")]
    pub bind_ip: String,
    pub protocol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Network {
    pub network_mode: String,
    #[serde(rename = "IPv4Addresses")]
    pub ipv4_addresses: Vec<String>,
}

/// Metadata of the running container.
///
/// Outside ECS (variable unset or empty) this is the zero value, not an error.
pub fn container_metadata(env: &dyn EnvSource) -> Result<ContainerMetadata> {
    let Some(file) = env.var(METADATA_FILE_VAR).filter(|file| !file.is_empty()) else {
        return Ok(ContainerMetadata::default());
    };
    let path = NormalizedPath::new(&file);
    let text = io::read_text(&path)?;
    serde_json::from_str(&text).map_err(|e| Error::decode(path.as_str(), e))
}

/// Availability zone of the running container, empty when unknown.
pub fn availability_zone(env: &dyn EnvSource) -> String {
    container_metadata(env)
        .map(|meta| meta.availability_zone)
        .unwrap_or_default()
}
