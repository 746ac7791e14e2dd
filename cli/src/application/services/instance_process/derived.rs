//! Derived data: free host ports and suggested pairlists.

use botfleet_common::Instance;

use super::{InstanceProcess, fall_back};
use crate::application::ports::CommandRunner;
use crate::domain::error::ProcessError;
use crate::domain::invocation;
use crate::domain::pairlist::parse_pairlist;
use crate::domain::policy::Operation;

impl<R: CommandRunner> InstanceProcess<R> {
    /// Ask the host helper script for a free TCP port.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError` if the script fails or prints anything other
    /// than a port in `1..=65535`.
    pub async fn allocate_port(&self) -> Result<u16, ProcessError> {
        let invocation = invocation::allocate_port(&self.config);
        let stdout = self.invoke(Operation::AllocatePort, &invocation).await?;
        match stdout.trim().parse::<u16>() {
            Ok(port) if port != 0 => Ok(port),
            _ => Err(ProcessError::InvalidPort {
                command: invocation.to_string(),
                output: stdout,
            }),
        }
    }

    /// Scrape tradable pairs for the instance's stake currency.
    ///
    /// Never fails: any invocation or parse failure yields an empty list.
    pub async fn fetch_pairlist(&self, instance: &Instance, count: usize) -> Vec<String> {
        let invocation = invocation::scrape_pairlist(instance, &self.config);
        let result = self.invoke(Operation::FetchPairlist, &invocation).await;
        let stdout = fall_back(Operation::FetchPairlist, result.map(Some), || None);
        let pairs = stdout
            .map(|out| parse_pairlist(&out, count))
            .unwrap_or_default();
        tracing::debug!(slug = %instance.slug, pairs = pairs.len(), "pairlist fetched");
        pairs
    }
}
