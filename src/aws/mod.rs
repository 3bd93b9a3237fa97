// ABOUTME: AWS control-plane access for ECR and ECS.
// ABOUTME: Capability traits plus the SDK-backed client bundle.

mod clients;
pub mod traits;

pub use clients::AwsClients;
pub use traits::*;
