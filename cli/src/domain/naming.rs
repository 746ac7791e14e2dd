//! Runtime resource names derived from an instance slug.
//!
//! Names are never stored: every operation recomputes them, so a stop or
//! liveness query always targets what a launch created for the same slug.

use botfleet_common::Instance;
use serde::Serialize;

/// Fixed prefix shared by every container this orchestrator creates.
pub const CONTAINER_PREFIX: &str = "trading-bot";

/// Container names for the two halves of an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerNames {
    pub core: String,
    pub ui: String,
}

impl ContainerNames {
    #[must_use]
    pub fn for_slug(slug: &str) -> Self {
        Self {
            core: format!("{CONTAINER_PREFIX}-{slug}-core"),
            ui: format!("{CONTAINER_PREFIX}-{slug}-ui"),
        }
    }

    #[must_use]
    pub fn for_instance(instance: &Instance) -> Self {
        Self::for_slug(&instance.slug)
    }
}

/// Name of the throwaway container that scrapes the pairlist.
#[must_use]
pub fn pairlist_container_name(slug: &str) -> String {
    format!("{CONTAINER_PREFIX}-{slug}-get-instance-config-pairlist")
}
