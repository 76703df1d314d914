//! Pipeline driver

use crate::builder::{CommandWheelBuilder, WheelBuilder};
use crate::locate::locate_wheel;
use crate::publisher::publish_artifact;
use crate::staging::StagingArea;
use crate::timeout::with_optional_timeout;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use wheelhouse_bridge::FileBridge;
use wheelhouse_config::Config;
use wheelhouse_errors::Error;
use wheelhouse_types::{PipelineStage, PublishReport, PublishRequest};

/// Drives the four pipeline stages in order, short-circuiting on the first
/// failure
///
/// The whole model is transient and scoped to a single [`run`](Self::run)
/// call; nothing persists across invocations except the published wheel.
pub struct PublishPipeline {
    bridge: Arc<dyn FileBridge>,
    builder: Arc<dyn WheelBuilder>,
    staging_root: PathBuf,
    build_timeout: Option<u64>,
}

impl PublishPipeline {
    #[must_use]
    pub fn new(
        bridge: Arc<dyn FileBridge>,
        builder: Arc<dyn WheelBuilder>,
        staging_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bridge,
            builder,
            staging_root: staging_root.into(),
            build_timeout: None,
        }
    }

    /// Assemble a pipeline from configuration, using the configured build
    /// command and deadline.
    #[must_use]
    pub fn from_config(config: &Config, bridge: Arc<dyn FileBridge>) -> Self {
        let builder = CommandWheelBuilder::from_config(&config.publish);
        Self::new(bridge, Arc::new(builder), config.staging_root())
            .with_build_timeout(config.build_timeout())
    }

    /// Deadline for the external build invocation, `None` to disable
    #[must_use]
    pub fn with_build_timeout(mut self, timeout_seconds: Option<u64>) -> Self {
        self.build_timeout = timeout_seconds;
        self
    }

    /// Run the pipeline: stage, build, locate, publish.
    ///
    /// On success the staging directory is removed and the destination holds
    /// exactly one newly published wheel. On failure the staging directory is
    /// left in place for inspection and no partial success is reported.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure; see `wheelhouse_errors::PublishError`
    /// for the taxonomy.
    pub async fn run(&self, request: &PublishRequest) -> Result<PublishReport, Error> {
        let staging = StagingArea::allocate(&self.staging_root);
        info!(
            stage = %PipelineStage::Init,
            source = %request.source.display(),
            destination = %request.destination.display(),
            staging = %staging.path().display(),
            "starting publish pipeline"
        );

        match self.execute(request, &staging).await {
            Ok(report) => {
                // Scratch space is only reclaimed on the happy path
                if let Err(e) = staging.discard(self.bridge.as_ref()).await {
                    warn!(
                        staging = %staging.path().display(),
                        error = %e,
                        "failed to remove staging directory after publish"
                    );
                }
                Ok(report)
            }
            Err(e) => {
                error!(
                    stage = %PipelineStage::Failed,
                    staging = %staging.path().display(),
                    error = %e,
                    "publish pipeline aborted"
                );
                Err(e)
            }
        }
    }

    async fn execute(
        &self,
        request: &PublishRequest,
        staging: &StagingArea,
    ) -> Result<PublishReport, Error> {
        let bridge = self.bridge.as_ref();

        staging.populate(bridge, &request.source).await?;
        info!(stage = %PipelineStage::Staged, staging = %staging.path().display(), "source staged");

        with_optional_timeout(self.builder.build(staging.path()), self.build_timeout).await?;
        info!(stage = %PipelineStage::Built, "build completed");

        let artifact = locate_wheel(bridge, &staging.dist_dir()).await?;
        info!(stage = %PipelineStage::Located, wheel = %artifact, "wheel located");

        let (destination_path, overwrote) = publish_artifact(
            bridge,
            &artifact,
            &request.destination,
            request.overwrite,
        )
        .await?;
        info!(
            stage = %PipelineStage::Published,
            wheel = %artifact,
            destination = %destination_path.display(),
            overwrote,
            "wheel published"
        );

        Ok(PublishReport {
            artifact,
            destination_path,
            overwrote,
        })
    }
}
