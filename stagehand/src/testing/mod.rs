//! In-process Stage for exercising stagehand without an actor runtime.
//!
//! Enable with the `test-harness` feature:
//!
//! ```toml
//! [dev-dependencies]
//! stagehand = { version = "0.1", features = ["test-harness"] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! let launched = StageBootstrap::new(StageProperties::default())
//!     .launch(RecordingStageBuilder::new())
//!     .await?;
//!
//! let actor = Arc::new(FakeActor::new("Inventory", Some("eu-1")).with_detail("items", 3));
//! launched.stage().activate(actor.clone())?;
//!
//! assert_eq!(launched.info()?["actors"]["Inventory"]["eu-1"]["items"], 3);
//! ```

mod fake_actor;
mod fake_stage;
mod recording_stage_builder;

pub use fake_actor::FakeActor;
pub use fake_stage::FakeStage;
pub use recording_stage_builder::{RecordingStageBuilder, StageSettings};
