//! One `impl InnerTubeClient` block per upstream endpoint.

pub mod browse;
pub mod search;
pub mod suggestions;
